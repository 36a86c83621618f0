//! Record type definitions
//!
//! Field order is fixed everywhere (input lines, store files, responses):
//! flight_id, origin, destination, departure_datetime, arrival_datetime, price

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::datetime::{format_datetime, serde_minutes};

/// Number of cells a record line must carry
pub const FIELD_COUNT: usize = 6;

/// Field names in record order
pub const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "flight_id",
    "origin",
    "destination",
    "departure_datetime",
    "arrival_datetime",
    "price",
];

/// A validated flight schedule entry.
///
/// Only the validator produces these from raw input, and the store
/// re-validates them on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlightRecord {
    /// 2-8 alphanumeric characters
    pub flight_id: String,
    /// 3 uppercase letters
    pub origin: String,
    /// 3 uppercase letters
    pub destination: String,
    #[serde(with = "serde_minutes")]
    pub departure_datetime: NaiveDateTime,
    /// Strictly after `departure_datetime`
    #[serde(with = "serde_minutes")]
    pub arrival_datetime: NaiveDateTime,
    /// Positive, rounded to cents
    pub price: f64,
}

/// The six trimmed text cells of one input line, not yet validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub flight_id: String,
    pub origin: String,
    pub destination: String,
    pub departure_datetime: String,
    pub arrival_datetime: String,
    pub price: String,
}

impl RawRecord {
    /// Builds a raw record from split cells.
    ///
    /// Returns `None` when fewer than six cells are present. Extra cells are
    /// ignored, every cell is trimmed.
    pub fn from_cells<S: AsRef<str>>(cells: &[S]) -> Option<Self> {
        if cells.len() < FIELD_COUNT {
            return None;
        }
        let cell = |i: usize| cells[i].as_ref().trim().to_string();
        Some(Self {
            flight_id: cell(0),
            origin: cell(1),
            destination: cell(2),
            departure_datetime: cell(3),
            arrival_datetime: cell(4),
            price: cell(5),
        })
    }

    /// Returns `(field name, cell)` pairs in record order
    pub fn fields(&self) -> [(&'static str, &str); FIELD_COUNT] {
        [
            (FIELD_NAMES[0], self.flight_id.as_str()),
            (FIELD_NAMES[1], self.origin.as_str()),
            (FIELD_NAMES[2], self.destination.as_str()),
            (FIELD_NAMES[3], self.departure_datetime.as_str()),
            (FIELD_NAMES[4], self.arrival_datetime.as_str()),
            (FIELD_NAMES[5], self.price.as_str()),
        ]
    }
}

impl From<&FlightRecord> for RawRecord {
    fn from(record: &FlightRecord) -> Self {
        Self {
            flight_id: record.flight_id.clone(),
            origin: record.origin.clone(),
            destination: record.destination.clone(),
            departure_datetime: format_datetime(&record.departure_datetime),
            arrival_datetime: format_datetime(&record.arrival_datetime),
            price: record.price.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_datetime;
    use serde_json::json;

    fn sample() -> FlightRecord {
        FlightRecord {
            flight_id: "FL123".into(),
            origin: "JFK".into(),
            destination: "LAX".into(),
            departure_datetime: parse_datetime("2024-01-01 08:00").unwrap(),
            arrival_datetime: parse_datetime("2024-01-01 10:00").unwrap(),
            price: 199.99,
        }
    }

    #[test]
    fn test_from_cells_trims_and_ignores_extra() {
        let raw = RawRecord::from_cells(&[" FL1 ", "JFK", "LAX", "a", "b", " 5 ", "extra"]).unwrap();
        assert_eq!(raw.flight_id, "FL1");
        assert_eq!(raw.price, "5");
    }

    #[test]
    fn test_from_cells_too_short() {
        assert!(RawRecord::from_cells(&["FL1", "JFK", "LAX"]).is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "flight_id": "FL123",
                "origin": "JFK",
                "destination": "LAX",
                "departure_datetime": "2024-01-01 08:00",
                "arrival_datetime": "2024-01-01 10:00",
                "price": 199.99
            })
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let value = json!({
            "flight_id": "FL123",
            "origin": "JFK",
            "destination": "LAX",
            "departure_datetime": "2024-01-01 08:00",
            "arrival_datetime": "2024-01-01 10:00",
            "price": 10.0,
            "gate": "B12"
        });
        assert!(serde_json::from_value::<FlightRecord>(value).is_err());
    }

    #[test]
    fn test_raw_from_record() {
        let raw = RawRecord::from(&sample());
        assert_eq!(raw.departure_datetime, "2024-01-01 08:00");
        assert_eq!(raw.price, "199.99");
    }
}
