//! Validation Rule Tests
//!
//! Every field rule rejects with its own code:
//! - flight_id length and characters
//! - origin and destination codes
//! - datetime format
//! - arrival strictly after departure
//! - positive, parseable price
//!
//! A record is either fully valid or rejected whole.

use flightdb::parser::parse_text;
use flightdb::validator::{RecordValidator, ViolationCode};

// =============================================================================
// Helper Functions
// =============================================================================

fn validate(line: &str) -> Result<flightdb::record::FlightRecord, flightdb::validator::Rejection> {
    let cells: Vec<&str> = line.split(',').collect();
    RecordValidator::new().validate_cells(&cells)
}

fn reason(line: &str) -> ViolationCode {
    validate(line).expect_err("expected rejection").reason()
}

// =============================================================================
// Scenario Tests
// =============================================================================

/// Arrival before departure is rejected.
#[test]
fn test_arrival_before_departure_rejected() {
    let code = reason("FL123,JFK,LAX,2024-01-01 10:00,2024-01-01 08:00,199.99");
    assert_eq!(code, ViolationCode::ArrivalNotAfterDeparture);
}

/// A well-formed line is accepted with its price intact.
#[test]
fn test_valid_line_accepted() {
    let record = validate("FL123,JFK,LAX,2024-01-01 08:00,2024-01-01 10:00,199.99").unwrap();
    assert_eq!(record.flight_id, "FL123");
    assert_eq!(record.origin, "JFK");
    assert_eq!(record.destination, "LAX");
    assert_eq!(record.price, 199.99);
}

// =============================================================================
// Distinguishable Reasons
// =============================================================================

/// Each rule violation carries its own code.
#[test]
fn test_each_violation_is_distinguishable() {
    let cases = [
        ("F,JFK,LAX,2024-01-01 08:00,2024-01-01 10:00,1", ViolationCode::FlightIdLength),
        ("FL12#,JFK,LAX,2024-01-01 08:00,2024-01-01 10:00,1", ViolationCode::FlightIdFormat),
        ("FL1,JF,LAX,2024-01-01 08:00,2024-01-01 10:00,1", ViolationCode::InvalidOrigin),
        ("FL1,JFK,L4X,2024-01-01 08:00,2024-01-01 10:00,1", ViolationCode::InvalidDestination),
        ("FL1,JFK,LAX,2024-01-01,2024-01-01 10:00,1", ViolationCode::InvalidDeparture),
        ("FL1,JFK,LAX,2024-01-01 08:00,10:00,1", ViolationCode::InvalidArrival),
        ("FL1,JFK,LAX,2024-01-01 10:00,2024-01-01 10:00,1", ViolationCode::ArrivalNotAfterDeparture),
        ("FL1,JFK,LAX,2024-01-01 08:00,2024-01-01 10:00,0", ViolationCode::NonPositivePrice),
        ("FL1,JFK,LAX,2024-01-01 08:00,2024-01-01 10:00,ten", ViolationCode::InvalidPrice),
        ("FL1,JFK,LAX,2024-01-01 08:00", ViolationCode::MissingFields),
        (",JFK,LAX,2024-01-01 08:00,2024-01-01 10:00,1", ViolationCode::MissingField),
    ];

    for (line, expected) in cases {
        assert_eq!(reason(line), expected, "line: {}", line);
    }
}

/// Validation gives the same answer every time.
#[test]
fn test_validation_is_deterministic() {
    for _ in 0..50 {
        assert!(validate("FL1,JFK,LAX,2024-01-01 08:00,2024-01-01 10:00,10").is_ok());
        assert_eq!(
            reason("FL1,JFK,LAX,2024-01-01 08:00,2024-01-01 10:00,-10"),
            ViolationCode::NonPositivePrice
        );
    }
}

// =============================================================================
// Whole-Record Rejection
// =============================================================================

/// One bad field keeps the whole line out of the store.
#[test]
fn test_partial_records_never_stored() {
    let text = "\
FL1,JFK,LAX,2024-01-01 08:00,2024-01-01 10:00,10
FL2,JFK,lax,2024-01-01 08:00,2024-01-01 10:00,10
FL3,JFK,LAX,2024-01-01 08:00,2024-01-01 10:00,-1
";
    let ingest = parse_text(text, None);
    assert_eq!(ingest.store.len(), 1);
    assert_eq!(ingest.store.records()[0].flight_id, "FL1");
    assert_eq!(ingest.errors.len(), 2);
}

/// Error log entries follow input order and carry the raw line.
#[test]
fn test_error_log_in_input_order() {
    let text = "\
X,JFK,LAX,2024-01-01 08:00,2024-01-01 10:00,10
FL1,JFK,LAX,2024-01-01 08:00,2024-01-01 10:00,10
FL2,JFK,LAX,2024-01-01 08:00,2024-01-01 07:00,10
";
    let ingest = parse_text(text, None);
    let lines: Vec<_> = ingest.errors.entries().iter().map(|e| e.line).collect();
    assert_eq!(lines, vec![1, 3]);
    assert!(ingest.errors.entries()[0].raw.starts_with("X,JFK"));
    assert_eq!(
        ingest.errors.render(),
        "Line 1: X,JFK,LAX,2024-01-01 08:00,2024-01-01 10:00,10 → flight_id length must be 2-8 alphanumeric characters\n\
         Line 3: FL2,JFK,LAX,2024-01-01 08:00,2024-01-01 07:00,10 → arrival before or equal to departure\n"
    );
}
