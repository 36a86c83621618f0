//! Validation failure types
//!
//! Codes:
//! - MISSING_FIELDS
//! - MISSING_FIELD
//! - FLIGHT_ID_LENGTH
//! - FLIGHT_ID_FORMAT
//! - INVALID_ORIGIN
//! - INVALID_DESTINATION
//! - INVALID_DEPARTURE
//! - INVALID_ARRIVAL
//! - ARRIVAL_NOT_AFTER_DEPARTURE
//! - INVALID_PRICE
//! - NON_POSITIVE_PRICE

use std::fmt;

/// One distinguishable reason a record can be rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationCode {
    /// Line has fewer than six cells
    MissingFields,
    /// A cell is empty after trimming
    MissingField,
    /// flight_id shorter than 2 or longer than 8 characters
    FlightIdLength,
    /// flight_id has the right length but non-alphanumeric characters
    FlightIdFormat,
    /// origin is not 3 uppercase letters
    InvalidOrigin,
    /// destination is not 3 uppercase letters
    InvalidDestination,
    /// departure_datetime does not parse
    InvalidDeparture,
    /// arrival_datetime does not parse
    InvalidArrival,
    /// arrival at or before departure
    ArrivalNotAfterDeparture,
    /// price is not a finite number
    InvalidPrice,
    /// price is zero or negative
    NonPositivePrice,
}

impl ViolationCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            ViolationCode::MissingFields => "MISSING_FIELDS",
            ViolationCode::MissingField => "MISSING_FIELD",
            ViolationCode::FlightIdLength => "FLIGHT_ID_LENGTH",
            ViolationCode::FlightIdFormat => "FLIGHT_ID_FORMAT",
            ViolationCode::InvalidOrigin => "INVALID_ORIGIN",
            ViolationCode::InvalidDestination => "INVALID_DESTINATION",
            ViolationCode::InvalidDeparture => "INVALID_DEPARTURE",
            ViolationCode::InvalidArrival => "INVALID_ARRIVAL",
            ViolationCode::ArrivalNotAfterDeparture => "ARRIVAL_NOT_AFTER_DEPARTURE",
            ViolationCode::InvalidPrice => "INVALID_PRICE",
            ViolationCode::NonPositivePrice => "NON_POSITIVE_PRICE",
        }
    }
}

impl fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single failed rule with its human-readable message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    code: ViolationCode,
    message: String,
}

impl Violation {
    pub fn new(code: ViolationCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn missing_fields() -> Self {
        Self::new(ViolationCode::MissingFields, "missing required fields")
    }

    /// Message wording follows the field: origin and destination read
    /// "missing origin field", the rest "missing <name>".
    pub fn missing_field(field: &str) -> Self {
        let message = match field {
            "origin" | "destination" => format!("missing {} field", field),
            other => format!("missing {}", other),
        };
        Self::new(ViolationCode::MissingField, message)
    }

    pub fn code(&self) -> ViolationCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// The validator's negative decision for one record.
///
/// Never empty: the first violation is the primary reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    violations: Vec<Violation>,
}

impl Rejection {
    /// Builds a rejection, `None` if there is nothing to reject for
    pub(crate) fn from_violations(violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self { violations })
        }
    }

    pub(crate) fn single(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }

    /// Returns the first failing rule
    pub fn reason(&self) -> ViolationCode {
        self.violations[0].code()
    }

    /// Returns every failing rule in check order
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns true if any violation carries the given code
    pub fn has(&self, code: ViolationCode) -> bool {
        self.violations.iter().any(|v| v.code() == code)
    }

    /// All messages joined with ", "
    pub fn message(&self) -> String {
        self.violations
            .iter()
            .map(Violation::message)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.reason(), self.message())
    }
}

impl std::error::Error for Rejection {}
