use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::error::SeedingError;

/// A calendar day in strict `YYYY-MM-DD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Parse a date, rejecting anything that is not a real day written as
    /// four-digit year, two-digit month, two-digit day.
    pub fn parse(raw: &str) -> Result<Self, SeedingError> {
        let shape_ok = raw.len() == 10
            && raw.bytes().enumerate().all(|(i, b)| match i {
                4 | 7 => b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !shape_ok {
            return Err(SeedingError::validation("date", "expected YYYY-MM-DD"));
        }

        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| SeedingError::validation("date", format!("{raw} is not a calendar date")))?;

        Ok(CalendarDate(date))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = SeedingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CalendarDate::parse(&value)
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

/// Opaque caller identity. Only non-emptiness is enforced.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(raw: impl Into<String>) -> Result<Self, SeedingError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(SeedingError::validation("userId", "must be a non-empty string"));
        }
        Ok(UserId(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Lowercase hex encoding of an HMAC-SHA256 digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeedHex(String);

impl SeedHex {
    pub fn from_digest(digest: &[u8]) -> Self {
        SeedHex(hex::encode(digest))
    }

    /// Wrap an existing hex string, e.g. one read back from a seed store.
    pub fn from_hex(raw: impl Into<String>) -> Self {
        SeedHex(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeedHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
