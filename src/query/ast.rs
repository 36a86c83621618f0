//! Typed query structures

use chrono::NaiveDateTime;
use serde_json::Value;

use super::errors::QueryError;
use crate::record::FlightRecord;

/// A single optional constraint on a record
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// flight_id equals
    FlightId(String),
    /// origin equals
    Origin(String),
    /// destination equals
    Destination(String),
    /// departure_datetime >= bound
    DepartsFrom(NaiveDateTime),
    /// arrival_datetime <= bound
    ArrivesBy(NaiveDateTime),
    /// price <= bound
    MaxPrice(f64),
}

impl Criterion {
    /// Returns the query key this criterion was read from
    pub fn field(&self) -> &'static str {
        match self {
            Criterion::FlightId(_) => "flight_id",
            Criterion::Origin(_) => "origin",
            Criterion::Destination(_) => "destination",
            Criterion::DepartsFrom(_) => "departure_datetime",
            Criterion::ArrivesBy(_) => "arrival_datetime",
            Criterion::MaxPrice(_) => "price",
        }
    }

    pub fn matches(&self, record: &FlightRecord) -> bool {
        match self {
            Criterion::FlightId(id) => record.flight_id == *id,
            Criterion::Origin(code) => record.origin == *code,
            Criterion::Destination(code) => record.destination == *code,
            Criterion::DepartsFrom(bound) => record.departure_datetime >= *bound,
            Criterion::ArrivesBy(bound) => record.arrival_datetime <= *bound,
            Criterion::MaxPrice(bound) => record.price <= *bound,
        }
    }
}

/// One entry of a query definition.
///
/// `criteria` holds the parse error when the entry is unusable; the entry is
/// still reported so the response lines up with the definition.
#[derive(Debug)]
pub struct QueryEntry {
    /// Explicit `name`, else `query_<n>` (1-based)
    pub name: String,
    /// The entry exactly as written
    pub raw: Value,
    pub criteria: Result<Vec<Criterion>, QueryError>,
}

/// A parsed query definition, entries in file order
#[derive(Debug, Default)]
pub struct QueryDefinition {
    pub entries: Vec<QueryEntry>,
}

impl QueryDefinition {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_datetime;

    fn record() -> FlightRecord {
        FlightRecord {
            flight_id: "FL1".into(),
            origin: "JFK".into(),
            destination: "LAX".into(),
            departure_datetime: parse_datetime("2024-01-01 08:00").unwrap(),
            arrival_datetime: parse_datetime("2024-01-01 10:00").unwrap(),
            price: 100.0,
        }
    }

    #[test]
    fn test_exact_matches() {
        assert!(Criterion::Origin("JFK".into()).matches(&record()));
        assert!(!Criterion::Origin("jfk".into()).matches(&record()));
        assert!(Criterion::Destination("LAX".into()).matches(&record()));
        assert!(!Criterion::FlightId("FL2".into()).matches(&record()));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let dep = parse_datetime("2024-01-01 08:00").unwrap();
        let arr = parse_datetime("2024-01-01 10:00").unwrap();
        assert!(Criterion::DepartsFrom(dep).matches(&record()));
        assert!(Criterion::ArrivesBy(arr).matches(&record()));
        assert!(Criterion::MaxPrice(100.0).matches(&record()));
        assert!(!Criterion::MaxPrice(99.99).matches(&record()));
    }

    #[test]
    fn test_departure_bound_excludes_earlier() {
        let later = parse_datetime("2024-01-01 08:01").unwrap();
        assert!(!Criterion::DepartsFrom(later).matches(&record()));
        let earlier = parse_datetime("2024-01-01 09:59").unwrap();
        assert!(!Criterion::ArrivesBy(earlier).matches(&record()));
    }
}
