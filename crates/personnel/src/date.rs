//! Calendar date value object.

use core::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use staffroll_core::{DomainError, DomainResult, ValueObject};

/// Immutable day/month/year triple.
///
/// Components are range-checked on construction only: day 1..=31, month
/// 1..=12, year > 0. There is no days-per-month or leap-year check, so
/// `31/02/2021` is a valid `Date` (see [`Date::to_naive_date`]).
///
/// Field order matters: the derived `Ord` compares year, then month, then day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date {
    year: i32,
    month: u32,
    day: u32,
}

impl ValueObject for Date {}

impl Date {
    pub fn new(day: u32, month: u32, year: i32) -> DomainResult<Self> {
        if year <= 0 {
            return Err(DomainError::validation(format!(
                "invalid year {year}: must be greater than 0"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(DomainError::validation(format!(
                "invalid month {month}: must be between 1 and 12"
            )));
        }
        if !(1..=31).contains(&day) {
            return Err(DomainError::validation(format!(
                "invalid day {day}: must be between 1 and 31"
            )));
        }

        Ok(Self { year, month, day })
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Convert to a calendar-checked `chrono` date.
    ///
    /// Returns `None` for dates that pass component validation but do not
    /// exist on the calendar (e.g. 30 February).
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl core::fmt::Display for Date {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = DomainError;

    /// Parse `YYYY-MM-DD`, applying the same component validation as [`Date::new`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DomainError::validation(format!("malformed date '{s}': expected YYYY-MM-DD"));

        let mut parts = s.trim().split('-');
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };

        let year = year.parse::<i32>().map_err(|_| malformed())?;
        let month = month.parse::<u32>().map_err(|_| malformed())?;
        let day = day.parse::<u32>().map_err(|_| malformed())?;

        Self::new(day, month, year)
    }
}

impl TryFrom<String> for Date {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Date> for String {
    fn from(value: Date) -> Self {
        value.to_string()
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = DomainError;

    /// Fails only for years <= 0, which `chrono` can represent but `Date` cannot.
    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(value.day(), value.month(), value.year())
    }
}
