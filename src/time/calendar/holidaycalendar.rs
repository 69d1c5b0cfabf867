use chrono::{Datelike, NaiveDate};

use crate::calendarerror::CalendarError;
use crate::holiday::holiday::Holiday;
use crate::holiday::holidayidentity::HolidayIdentity;
use crate::time::rangeofdates::RangeOfDates;
use crate::time::relativeday::RelativeDay;

/// Read-only holiday queries. Implementors only need to build the yearly catalog;
/// every lookup is derived from it.
pub trait HolidayCalendar: Send + Sync {
    /// The twelve holidays of `year`, in `HolidayIdentity::ALL` order.
    fn holidays(&self, year: i32) -> Result<Vec<Holiday>, CalendarError>;

    fn holiday(&self, identity: HolidayIdentity, year: i32) -> Result<Holiday, CalendarError> {
        match self.holidays(year)?.into_iter().find(|h| h.identity() == identity) {
            Some(holiday) => Ok(holiday),
            None => unreachable!("holiday catalog for {} has no entry for {:?}", year, identity)
        }
    }

    fn is_holiday(&self, d: NaiveDate) -> Result<bool, CalendarError> {
        Ok(self.holiday_on(d)?.is_some())
    }

    /// First holiday observed on `d`, if any.
    fn holiday_on(&self, d: NaiveDate) -> Result<Option<Holiday>, CalendarError> {
        Ok(self.holidays(d.year())?
            .into_iter()
            .find(|h| h.effective_date() == d))
    }

    fn is_holiday_relative(&self, relative: RelativeDay, reference: NaiveDate) -> Result<bool, CalendarError> {
        self.is_holiday(relative.date(reference)?)
    }

    /// Holidays observed within `range`, ordered by effective date.
    fn holidays_between(&self, range: &RangeOfDates) -> Result<Vec<Holiday>, CalendarError> {
        let mut result = Vec::new();
        for year in range.years() {
            result.extend(
                self.holidays(year)?
                    .into_iter()
                    .filter(|h| range.contain(h.effective_date()))
            );
        }
        result.sort_by_key(|h| h.effective_date());
        Ok(result)
    }

    /// First holiday observed on or after `d`. `None` once the calendar's last
    /// supported year has no holiday left.
    fn next_holiday(&self, d: NaiveDate) -> Result<Option<Holiday>, CalendarError> {
        let upcoming = |holidays: Vec<Holiday>| {
            holidays
                .into_iter()
                .filter(|h| h.effective_date() >= d)
                .min_by_key(|h| h.effective_date())
        };

        match upcoming(self.holidays(d.year())?) {
            Some(holiday) => Ok(Some(holiday)),
            None => match self.holidays(d.year() + 1) {
                Ok(holidays) => Ok(upcoming(holidays)),
                Err(CalendarError::YearOutOfRange { .. }) => Ok(None),
                Err(e) => Err(e)
            }
        }
    }
}
