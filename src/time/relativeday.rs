use chrono::{Datelike, NaiveDate};

use crate::calendarerror::CalendarError;
use super::period::Period;
use super::utility::check_year;

/// A day expressed relative to a caller-supplied reference date.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum RelativeDay {
    Yesterday = -1,
    Today = 0,
    Tomorrow = 1
}

impl RelativeDay {
    /// The reference date must fall in a supported year.
    pub fn date(&self, reference: NaiveDate) -> Result<NaiveDate, CalendarError> {
        check_year(reference.year())?;
        Ok(reference + Period::days(*self as i32))
    }
}
