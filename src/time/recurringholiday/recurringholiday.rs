use chrono::{Datelike, NaiveDate};

use crate::calendarerror::CalendarError;


/// Rule producing the nominal date of a holiday for a given year, before any
/// relocation is applied.
pub trait RecurringHoliday: Send + Sync {

    fn nominal_date(&self, year: i32) -> Result<NaiveDate, CalendarError>;

    fn is_nominal_date(&self, d: &NaiveDate) -> Result<bool, CalendarError> {
        Ok(self.nominal_date(d.year())? == *d)
    }
}
