//! Booking date value object.
//!
//! The backend expects every date in day-month-year form (`31-12-2026`).
//! Screens and deep links also hand us ISO-like year-month-day strings, so
//! parsing accepts both; serialization always emits the wire format.

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::foundation::ValidationError;

/// Wire format used for every date sent to the backend.
pub const WIRE_DATE_FORMAT: &str = "%d-%m-%Y";

/// Alternate input format accepted from callers (ISO-like).
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date normalized to the backend's day-month-year wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookingDate(NaiveDate);

impl BookingDate {
    /// Parses a date from either `dd-mm-yyyy` (wire) or `yyyy-mm-dd` (ISO)
    /// input. Anything else is rejected locally.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        NaiveDate::parse_from_str(trimmed, WIRE_DATE_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT))
            .map(Self)
            .map_err(|_| {
                ValidationError::invalid_format(
                    "date",
                    format!("expected dd-mm-yyyy or yyyy-mm-dd, got '{}'", trimmed),
                )
            })
    }

    /// Wraps an already-parsed calendar date.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the date in the backend's wire format (`dd-mm-yyyy`).
    pub fn to_wire(&self) -> String {
        self.0.format(WIRE_DATE_FORMAT).to_string()
    }

    /// Returns the underlying calendar date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Number of nights between this date and a later checkout date.
    pub fn nights_until(&self, checkout: &BookingDate) -> i64 {
        (checkout.0 - self.0).num_days()
    }
}

impl fmt::Display for BookingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_wire())
    }
}

impl Serialize for BookingDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

impl<'de> Deserialize<'de> for BookingDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        BookingDate::parse(&raw).map_err(de::Error::custom)
    }
}
