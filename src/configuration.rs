use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use log::info;
use serde::Deserialize;

use crate::calendarerror::CalendarError;
use crate::time::calendar::dominicancalendar::DominicanCalendar;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::precomputeddominicancalendar::PrecomputedDominicanCalendar;
use crate::time::utility::{
    MAX_SUPPORTED_YEAR,
    MIN_SUPPORTED_YEAR,
    check_year_range
};

fn default_min_year() -> i32 {
    MIN_SUPPORTED_YEAR
}

fn default_max_year() -> i32 {
    MAX_SUPPORTED_YEAR
}

#[derive(Deserialize, Default)]
struct PrecomputationJsonProp {
    apply: bool,
    #[serde(default)]
    start_year: i32,
    #[serde(default)]
    end_year: i32
}

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default = "default_min_year")]
    min_year: i32,
    #[serde(default = "default_max_year")]
    max_year: i32,
    #[serde(default)]
    precomputation: PrecomputationJsonProp
}

/// Settings for the calendar handed to consumers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Configuration {
    min_year: i32,
    max_year: i32,
    precomputation: Option<(i32, i32)>
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            min_year: MIN_SUPPORTED_YEAR,
            max_year: MAX_SUPPORTED_YEAR,
            precomputation: None
        }
    }

    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    pub fn precomputation(&self) -> Option<(i32, i32)> {
        self.precomputation
    }

    pub fn with_year_range(mut self, min_year: i32, max_year: i32) -> Result<Configuration, CalendarError> {
        check_year_range(min_year, max_year)?;
        self.min_year = min_year;
        self.max_year = max_year;
        Ok(self)
    }

    /// Precomputes `[start_year, end_year]`, which must lie inside the year range.
    pub fn with_precomputation(mut self, start_year: i32, end_year: i32) -> Result<Configuration, CalendarError> {
        if start_year > end_year || start_year < self.min_year || end_year > self.max_year {
            return Err(CalendarError::InvalidYearRange { start_year, end_year });
        }
        self.precomputation = Some((start_year, end_year));
        Ok(self)
    }

    pub fn from_json(json_value: serde_json::Value) -> Result<Configuration, CalendarError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_value(json_value)?;
        let configuration = Configuration::new().with_year_range(json_prop.min_year, json_prop.max_year)?;
        if json_prop.precomputation.apply {
            configuration.with_precomputation(
                json_prop.precomputation.start_year,
                json_prop.precomputation.end_year
            )
        } else {
            Ok(configuration)
        }
    }

    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<Configuration, CalendarError> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        let configuration = Configuration::from_json(json_value)?;
        info!("loaded calendar configuration from {}", file_path.as_ref().display());
        Ok(configuration)
    }

    pub fn calendar(&self) -> Result<Arc<dyn HolidayCalendar>, CalendarError> {
        let raw_calendar = DominicanCalendar::with_year_range(self.min_year, self.max_year)?;
        match self.precomputation {
            Some((start_year, end_year)) => {
                let precomputed = PrecomputedDominicanCalendar::new(raw_calendar, start_year, end_year)?;
                Ok(Arc::new(precomputed))
            },
            None => Ok(Arc::new(raw_calendar))
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
