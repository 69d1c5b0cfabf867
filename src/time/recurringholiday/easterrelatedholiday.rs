use chrono::NaiveDate;

use crate::calendarerror::CalendarError;
use crate::time::period::Period;
use crate::time::utility::check_year;
use super::recurringholiday::RecurringHoliday;

const ONE_WEEK: Period = Period::weeks(1);

/// Western Easter Sunday by the Gauss congruence method.
///
/// The raw congruence result is corrected twice:
/// 1. April 26 becomes April 19.
/// 2. April 25 becomes April 18 when `r == 6` and `a > 10`.
///
/// Years outside the supported Gregorian range are rejected.
pub fn easter_sunday(year: i32) -> Result<NaiveDate, CalendarError> {
    let year = check_year(year)?;

    let a = year % 19;
    let b = year % 4;
    let c = year % 7;
    let d = year / 100;
    let e = (13 + 8 * d) / 25;
    let m = d / 4;
    let n = (15 - e + d - m) % 30;
    let p = (4 + d - m) % 7;
    let q = (19 * a + n) % 30;
    let r = (2 * b + 4 * c + 6 * q + p) % 7;

    let (month, day) = if q + r > 9 {
        (4, (q + r - 9) as u32)
    } else {
        (3, (22 + q + r) as u32)
    };

    let easter = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CalendarError::InvalidDate { year, month, day })?;

    let easter = match (month, day) {
        (4, 26) => easter - ONE_WEEK,
        (4, 25) if r == 6 && a > 10 => easter - ONE_WEEK,
        _ => easter
    };

    Ok(easter)
}

/// Holiday observed at a fixed offset from Easter Sunday.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EasterRelatedHoliday {
    shift_period: Period
}

impl EasterRelatedHoliday {
    pub const fn new(shift_days: i32) -> EasterRelatedHoliday {
        EasterRelatedHoliday {
            shift_period: Period::days(shift_days)
        }
    }

    pub fn shift_period(&self) -> Period {
        self.shift_period
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn nominal_date(&self, year: i32) -> Result<NaiveDate, CalendarError> {
        Ok(easter_sunday(year)? + self.shift_period)
    }
}
