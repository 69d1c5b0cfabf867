use std::fmt;
use std::ops::{Add, Neg, Sub};

use chrono::{
    Duration,
    NaiveDate
};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum TimeUnit {
    Days,
    Weeks
}

impl TimeUnit {
    pub fn to_char(&self) -> char {
        match self {
            TimeUnit::Days => 'D',
            TimeUnit::Weeks => 'W'
        }
    }
}

/// A signed calendar offset used for Easter-relative dates and Monday relocation.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Period {
    number: i32,
    unit: TimeUnit
}

impl Period {
    pub const fn new(number: i32, unit: TimeUnit) -> Period {
        Period { number, unit }
    }

    pub const fn days(number: i32) -> Period {
        Period::new(number, TimeUnit::Days)
    }

    pub const fn weeks(number: i32) -> Period {
        Period::new(number, TimeUnit::Weeks)
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    pub fn num_days(&self) -> i64 {
        match self.unit {
            TimeUnit::Days => self.number as i64,
            TimeUnit::Weeks => 7 * self.number as i64
        }
    }

    /// `d` shifted by this period, or `None` past the limits of `NaiveDate`.
    pub fn checked_add_to(&self, d: NaiveDate) -> Option<NaiveDate> {
        d.checked_add_signed(Duration::days(self.num_days()))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.number, self.unit.to_char())
    }
}

impl Neg for Period {
    type Output = Self;

    fn neg(self) -> Self {
        Period::new(-self.number, self.unit)
    }
}

impl Add<Period> for NaiveDate {
    type Output = Self;

    fn add(self, period: Period) -> Self {
        self + Duration::days(period.num_days())
    }
}

impl Sub<Period> for NaiveDate {
    type Output = Self;

    fn sub(self, period: Period) -> Self {
        self + (-period)
    }
}
