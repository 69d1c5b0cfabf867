use crate::calendarerror::CalendarError;

/// First full year of the Gregorian calendar.
pub const MIN_SUPPORTED_YEAR: i32 = 1583;

pub const MAX_SUPPORTED_YEAR: i32 = 9999;

#[inline]
pub const fn is_supported_year(year: i32) -> bool {
    year >= MIN_SUPPORTED_YEAR && year <= MAX_SUPPORTED_YEAR
}

pub fn check_year(year: i32) -> Result<i32, CalendarError> {
    check_year_in(year, MIN_SUPPORTED_YEAR, MAX_SUPPORTED_YEAR)
}

pub fn check_year_in(year: i32, min_year: i32, max_year: i32) -> Result<i32, CalendarError> {
    if year >= min_year && year <= max_year {
        Ok(year)
    } else {
        Err(CalendarError::YearOutOfRange { year, min_year, max_year })
    }
}

/// Validates a `[start_year, end_year]` window against the supported range.
pub fn check_year_range(start_year: i32, end_year: i32) -> Result<(), CalendarError> {
    if start_year > end_year || !is_supported_year(start_year) || !is_supported_year(end_year) {
        Err(CalendarError::InvalidYearRange { start_year, end_year })
    } else {
        Ok(())
    }
}
