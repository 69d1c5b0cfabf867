use chrono::{Datelike, NaiveDate};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::calendarerror::CalendarError;
use crate::time::recurringholiday::mondayadjustment::resolve_effective_date;
use crate::time::utility::check_year;
use super::holidayidentity::HolidayIdentity;
use super::immovability::is_immovable;

/// A holiday resolved for one year: its nominal date and the date it is observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Holiday {
    identity: HolidayIdentity,
    original_date: NaiveDate,
    effective_date: NaiveDate,
    is_immovable: bool
}

impl Holiday {
    /// Classifies `date` as the nominal date of `identity` and relocates it if movable.
    pub fn new(identity: HolidayIdentity, date: NaiveDate) -> Result<Holiday, CalendarError> {
        check_year(date.year())?;
        let is_immovable = is_immovable(identity, date);
        let effective_date = if is_immovable {
            date
        } else {
            resolve_effective_date(identity, date)?
        };

        Ok(Holiday {
            identity,
            original_date: date,
            effective_date,
            is_immovable
        })
    }

    pub fn for_year(identity: HolidayIdentity, year: i32) -> Result<Holiday, CalendarError> {
        let nominal_date = identity.recurrence().nominal_date(year)?;
        Holiday::new(identity, nominal_date)
    }

    pub fn identity(&self) -> HolidayIdentity {
        self.identity
    }

    pub fn description(&self) -> &'static str {
        self.identity.description()
    }

    pub fn original_date(&self) -> NaiveDate {
        self.original_date
    }

    pub fn effective_date(&self) -> NaiveDate {
        self.effective_date
    }

    pub fn is_immovable(&self) -> bool {
        self.is_immovable
    }

    pub fn is_relocated(&self) -> bool {
        self.effective_date != self.original_date
    }
}

impl Serialize for Holiday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Holiday", 5)?;
        state.serialize_field("identity", &self.identity)?;
        state.serialize_field("description", self.description())?;
        state.serialize_field("original_date", &self.original_date)?;
        state.serialize_field("effective_date", &self.effective_date)?;
        state.serialize_field("is_immovable", &self.is_immovable)?;
        state.end()
    }
}
