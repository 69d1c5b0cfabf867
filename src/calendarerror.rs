use thiserror::Error;

/// Error type shared by every calendar query and by configuration loading.
#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("year {year} is outside the supported range [{min_year}, {max_year}]")]
    YearOutOfRange {
        year: i32,
        min_year: i32,
        max_year: i32
    },

    #[error("invalid year range [{start_year}, {end_year}]")]
    InvalidYearRange {
        start_year: i32,
        end_year: i32
    },

    #[error("{year}-{month:02}-{day:02} is not a valid date")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    JsonParse(#[from] serde_json::Error)
}
