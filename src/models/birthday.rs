//! Birthday field
//!
//! Birthdays are entered as `DD.MM.YYYY`. The raw text is kept verbatim for
//! display, alongside the parsed calendar date.

use chrono::{Datelike, NaiveDate};
use std::fmt;

use super::field::{Field, ValidationError};

/// The one date format accepted on input and shown on output
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A validated birthday
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    value: String,
    date: NaiveDate,
}

impl Birthday {
    /// Validate and wrap a raw `DD.MM.YYYY` string
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let date = parse_date(&value)?;
        Ok(Self { value, date })
    }

    /// The parsed calendar date
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Whether this is a February 29 birthday
    pub fn is_leap_day(&self) -> bool {
        self.month() == 2 && self.day() == 29
    }
}

/// Parse a `DD.MM.YYYY` string into a date
///
/// Field widths are fixed: `1.2.1990` and `01.02.90` are rejected even though
/// they name a real day.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidBirthday(raw.to_string());

    let bytes = raw.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'.' || bytes[5] != b'.' {
        return Err(invalid());
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 2 && *i != 5)
        .all(|(_, b)| b.is_ascii_digit());
    if !digits_ok {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| invalid())
}

impl Field for Birthday {
    fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl std::str::FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
