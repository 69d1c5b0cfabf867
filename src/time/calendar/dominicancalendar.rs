use log::debug;

use crate::calendarerror::CalendarError;
use crate::holiday::holiday::Holiday;
use crate::holiday::holidayidentity::HolidayIdentity;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::utility::{
    MAX_SUPPORTED_YEAR,
    MIN_SUPPORTED_YEAR,
    check_year_in,
    check_year_range
};

/// Public holidays of the Dominican Republic, recomputed on every query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DominicanCalendar {
    min_year: i32,
    max_year: i32
}

impl DominicanCalendar {
    pub fn new() -> DominicanCalendar {
        DominicanCalendar {
            min_year: MIN_SUPPORTED_YEAR,
            max_year: MAX_SUPPORTED_YEAR
        }
    }

    /// Restricts queries to `[min_year, max_year]`, which must lie in the supported range.
    pub fn with_year_range(min_year: i32, max_year: i32) -> Result<DominicanCalendar, CalendarError> {
        check_year_range(min_year, max_year)?;
        Ok(DominicanCalendar { min_year, max_year })
    }

    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    fn check_year(&self, year: i32) -> Result<i32, CalendarError> {
        check_year_in(year, self.min_year, self.max_year)
    }
}

impl Default for DominicanCalendar {
    fn default() -> Self {
        DominicanCalendar::new()
    }
}

impl HolidayCalendar for DominicanCalendar {
    fn holidays(&self, year: i32) -> Result<Vec<Holiday>, CalendarError> {
        let year = self.check_year(year)?;
        debug!("building holiday catalog for {}", year);
        HolidayIdentity::ALL
            .iter()
            .map(|&identity| Holiday::for_year(identity, year))
            .collect()
    }

    fn holiday(&self, identity: HolidayIdentity, year: i32) -> Result<Holiday, CalendarError> {
        Holiday::for_year(identity, self.check_year(year)?)
    }
}


#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_catalog_2024() {
        let calendar = DominicanCalendar::new();
        let effective: Vec<(HolidayIdentity, NaiveDate)> = calendar
            .holidays(2024)
            .unwrap()
            .iter()
            .map(|h| (h.identity(), h.effective_date()))
            .collect();

        assert_eq!(effective, vec![
            (HolidayIdentity::NewYear, date(2024, 1, 1)),
            (HolidayIdentity::SantosReyes, date(2024, 1, 6)),
            (HolidayIdentity::NuestraSenoraDeLaAltagracia, date(2024, 1, 21)),
            (HolidayIdentity::NatalicioDeJuanPabloDuarte, date(2024, 1, 29)),
            (HolidayIdentity::DiaDeLaIndependenciaNacional, date(2024, 2, 27)),
            (HolidayIdentity::DiaDelTrabajo, date(2024, 4, 29)),
            (HolidayIdentity::ViernesSanto, date(2024, 3, 29)),
            (HolidayIdentity::CorpusChristi, date(2024, 5, 30)),
            (HolidayIdentity::DiaDeLaRestauracion, date(2024, 8, 16)),
            (HolidayIdentity::NuestraSenoraDeLasMercedes, date(2024, 9, 24)),
            (HolidayIdentity::DiaDeLaConstitucion, date(2024, 11, 4)),
            (HolidayIdentity::DiaDeNavidad, date(2024, 12, 25))
        ]);
    }

    #[test]
    fn test_holiday_lookup_matches_catalog() {
        let calendar = DominicanCalendar::new();
        let catalog = calendar.holidays(2022).unwrap();
        for holiday in catalog {
            assert_eq!(calendar.holiday(holiday.identity(), 2022).unwrap(), holiday);
        }
    }

    #[test]
    fn test_year_range() {
        let calendar = DominicanCalendar::with_year_range(2000, 2030).unwrap();
        assert!(calendar.holidays(2030).is_ok());
        assert!(matches!(
            calendar.holidays(2031),
            Err(CalendarError::YearOutOfRange { year: 2031, min_year: 2000, max_year: 2030 })
        ));
        assert!(calendar.holiday(HolidayIdentity::NewYear, 1999).is_err());
        assert!(DominicanCalendar::with_year_range(1500, 2030).is_err());
        assert!(DominicanCalendar::with_year_range(2030, 2000).is_err());
    }
}
