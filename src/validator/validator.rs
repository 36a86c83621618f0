//! Record validator
//!
//! Validation is deterministic and does not mutate its input.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use super::errors::{Rejection, Violation, ViolationCode};
use crate::record::{parse_datetime, FlightRecord, RawRecord};

static FLIGHT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{2,8}$").expect("flight_id pattern is valid"));

static AIRPORT_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").expect("airport pattern is valid"));

/// Magnitude from which an f64 can no longer represent single cents (2^53 / 100)
const CENT_RESOLUTION_LIMIT: f64 = 9_007_199_254_740_992.0 / 100.0;

/// Rounds a price to cents. Finite input always gives finite output.
pub(crate) fn round_to_cents(price: f64) -> f64 {
    if price.abs() >= CENT_RESOLUTION_LIMIT {
        return price;
    }
    (price * 100.0).round() / 100.0
}

/// Validator that turns raw records into `FlightRecord`s or rejections.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordValidator;

impl RecordValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validates the split cells of one line.
    ///
    /// Fewer than six cells is a `MissingFields` rejection.
    pub fn validate_cells<S: AsRef<str>>(&self, cells: &[S]) -> Result<FlightRecord, Rejection> {
        let raw = RawRecord::from_cells(cells)
            .ok_or_else(|| Rejection::single(Violation::missing_fields()))?;
        self.validate(&raw)
    }

    /// Validates one raw record.
    ///
    /// # Errors
    ///
    /// Returns a `Rejection` listing every failed rule when any rule fails.
    pub fn validate(&self, raw: &RawRecord) -> Result<FlightRecord, Rejection> {
        let mut violations = Vec::new();

        for (name, cell) in raw.fields() {
            if cell.is_empty() {
                violations.push(Violation::missing_field(name));
            }
        }

        if !raw.flight_id.is_empty() {
            if let Some(v) = check_flight_id(&raw.flight_id) {
                violations.push(v);
            }
        }
        if !raw.origin.is_empty() && !AIRPORT_CODE.is_match(&raw.origin) {
            violations.push(Violation::new(ViolationCode::InvalidOrigin, "invalid origin code"));
        }
        if !raw.destination.is_empty() && !AIRPORT_CODE.is_match(&raw.destination) {
            violations.push(Violation::new(
                ViolationCode::InvalidDestination,
                "invalid destination code",
            ));
        }

        let departure = parse_cell_datetime(
            &raw.departure_datetime,
            ViolationCode::InvalidDeparture,
            "invalid departure datetime",
            &mut violations,
        );
        let arrival = parse_cell_datetime(
            &raw.arrival_datetime,
            ViolationCode::InvalidArrival,
            "invalid arrival datetime",
            &mut violations,
        );
        if let (Some(dep), Some(arr)) = (departure, arrival) {
            if arr <= dep {
                violations.push(Violation::new(
                    ViolationCode::ArrivalNotAfterDeparture,
                    "arrival before or equal to departure",
                ));
            }
        }

        let price = if raw.price.is_empty() {
            None
        } else {
            match check_price(&raw.price) {
                Ok(price) => Some(price),
                Err(v) => {
                    violations.push(v);
                    None
                }
            }
        };

        if let Some(rejection) = Rejection::from_violations(violations) {
            return Err(rejection);
        }

        match (departure, arrival, price) {
            (Some(departure_datetime), Some(arrival_datetime), Some(price)) => Ok(FlightRecord {
                flight_id: raw.flight_id.clone(),
                origin: raw.origin.clone(),
                destination: raw.destination.clone(),
                departure_datetime,
                arrival_datetime,
                price,
            }),
            // every None above has already pushed a violation
            _ => Err(Rejection::single(Violation::missing_fields())),
        }
    }

    /// Re-applies every rule to an already typed record.
    ///
    /// Used when a persisted store is loaded.
    pub fn revalidate(&self, record: &FlightRecord) -> Result<(), Rejection> {
        self.validate(&RawRecord::from(record)).map(|_| ())
    }
}

fn check_flight_id(flight_id: &str) -> Option<Violation> {
    if FLIGHT_ID.is_match(flight_id) {
        return None;
    }
    let len = flight_id.chars().count();
    if !(2..=8).contains(&len) {
        Some(Violation::new(
            ViolationCode::FlightIdLength,
            "flight_id length must be 2-8 alphanumeric characters",
        ))
    } else {
        Some(Violation::new(
            ViolationCode::FlightIdFormat,
            "invalid flight_id format",
        ))
    }
}

fn parse_cell_datetime(
    cell: &str,
    code: ViolationCode,
    message: &str,
    violations: &mut Vec<Violation>,
) -> Option<NaiveDateTime> {
    if cell.is_empty() {
        return None;
    }
    let parsed = parse_datetime(cell);
    if parsed.is_none() {
        violations.push(Violation::new(code, message));
    }
    parsed
}

fn check_price(cell: &str) -> Result<f64, Violation> {
    let price: f64 = cell
        .parse()
        .ok()
        .filter(|p: &f64| p.is_finite())
        .ok_or_else(|| Violation::new(ViolationCode::InvalidPrice, "invalid price format"))?;

    let price = round_to_cents(price);
    if !price.is_finite() {
        return Err(Violation::new(ViolationCode::InvalidPrice, "invalid price format"));
    }
    if price <= 0.0 {
        return Err(Violation::new(
            ViolationCode::NonPositivePrice,
            "negative or zero price value",
        ));
    }
    Ok(price)
}
