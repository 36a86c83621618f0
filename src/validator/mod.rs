//! Record Validator subsystem for flightdb
//!
//! Every input line passes through here before it may enter the store.
//!
//! # Rules
//!
//! - All six cells present and non-empty
//! - flight_id: 2-8 ASCII alphanumeric characters
//! - origin / destination: exactly 3 uppercase ASCII letters
//! - departure / arrival: `YYYY-MM-DD HH:MM`
//! - arrival strictly after departure
//! - price: finite, strictly positive once rounded to cents
//!
//! Rules are checked independently. A rejection lists every failure; the
//! first one is its primary reason. The validator has no side effects.

mod errors;
mod validator;

pub use errors::{Rejection, Violation, ViolationCode};
pub use validator::RecordValidator;
