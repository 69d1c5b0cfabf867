use chrono::{Datelike, NaiveDate};
use log::debug;

use crate::calendarerror::CalendarError;
use crate::holiday::holiday::Holiday;
use crate::holiday::holidayidentity::HolidayIdentity;
use crate::time::calendar::dominicancalendar::DominicanCalendar;
use crate::time::calendar::holidaycalendar::HolidayCalendar;

/// Dominican calendar with the catalogs of `[start_year, end_year]` computed up front.
///
/// Queries outside the window fall back to the raw calendar, so results are the
/// same as `DominicanCalendar` for every year.
pub struct PrecomputedDominicanCalendar {
    raw_calendar: DominicanCalendar,
    start_year: i32,
    precomputed_catalogs: Vec<Vec<Holiday>>
}

impl PrecomputedDominicanCalendar {
    pub fn new(
        raw_calendar: DominicanCalendar,
        start_year: i32,
        end_year: i32
    ) -> Result<PrecomputedDominicanCalendar, CalendarError> {
        if start_year > end_year {
            return Err(CalendarError::InvalidYearRange { start_year, end_year });
        }

        let precomputed_catalogs = (start_year..=end_year)
            .map(|year| raw_calendar.holidays(year))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("precomputed holiday catalogs for {}-{}", start_year, end_year);

        Ok(PrecomputedDominicanCalendar {
            raw_calendar,
            start_year,
            precomputed_catalogs
        })
    }

    pub fn raw_calendar(&self) -> &DominicanCalendar {
        &self.raw_calendar
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.start_year + (self.len() as i32) - 1
    }

    pub fn len(&self) -> usize {
        self.precomputed_catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.precomputed_catalogs.is_empty()
    }

    pub fn in_precomputation_range(&self, year: i32) -> bool {
        year >= self.start_year && year <= self.end_year()
    }

    fn precomputed(&self, year: i32) -> Option<&[Holiday]> {
        if self.in_precomputation_range(year) {
            let index = (year - self.start_year) as usize;
            Some(&self.precomputed_catalogs[index])
        } else {
            None
        }
    }
}

impl HolidayCalendar for PrecomputedDominicanCalendar {
    fn holidays(&self, year: i32) -> Result<Vec<Holiday>, CalendarError> {
        match self.precomputed(year) {
            Some(catalog) => Ok(catalog.to_vec()),
            None => self.raw_calendar.holidays(year)
        }
    }

    fn holiday(&self, identity: HolidayIdentity, year: i32) -> Result<Holiday, CalendarError> {
        match self.precomputed(year) {
            // Catalogs are stored in declaration order.
            Some(catalog) => Ok(catalog[identity as usize]),
            None => self.raw_calendar.holiday(identity, year)
        }
    }

    fn holiday_on(&self, d: NaiveDate) -> Result<Option<Holiday>, CalendarError> {
        match self.precomputed(d.year()) {
            Some(catalog) => Ok(catalog.iter().find(|h| h.effective_date() == d).copied()),
            None => self.raw_calendar.holiday_on(d)
        }
    }
}
