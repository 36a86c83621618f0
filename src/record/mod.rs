//! Flight record model
//!
//! A record is either fully valid or it does not exist as a `FlightRecord`.
//! Raw input lines are carried as `RawRecord` until the validator accepts them.

mod datetime;
mod types;

pub use datetime::{format_datetime, parse_datetime, DATETIME_FORMAT};
pub use types::{FlightRecord, RawRecord, FIELD_COUNT, FIELD_NAMES};
