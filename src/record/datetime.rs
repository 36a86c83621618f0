//! Shared timestamp format for records, stores and queries
//!
//! Timestamps are minute precision, no timezone: `YYYY-MM-DD HH:MM`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer};

/// The one datetime format accepted anywhere in flightdb
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parses a `YYYY-MM-DD HH:MM` timestamp, `None` if it does not match.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DATETIME_FORMAT).ok()
}

/// Formats a timestamp back into `YYYY-MM-DD HH:MM`.
pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

/// serde adapter used by `FlightRecord` for both datetime fields
pub(crate) mod serde_minutes {
    use super::*;

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_datetime(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_datetime(&s).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid datetime '{}', expected YYYY-MM-DD HH:MM",
                s
            ))
        })
    }
}
