use chrono::NaiveDate;

use crate::calendarerror::CalendarError;
use crate::time::utility::check_year;
use super::recurringholiday::RecurringHoliday;

/// Holiday falling on the same month and day every year.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    pub const fn new(month: u32, day: u32) -> FixedDateHoliday {
        FixedDateHoliday { month, day }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn nominal_date(&self, year: i32) -> Result<NaiveDate, CalendarError> {
        let year = check_year(year)?;
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .ok_or(CalendarError::InvalidDate { year, month: self.month, day: self.day })
    }
}
