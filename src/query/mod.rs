//! Query Engine for flightdb
//!
//! A query definition is a JSON array of entry objects (or one object).
//! Each entry is a set of optional criteria, all of which must match:
//!
//! - `flight_id`, `origin`, `destination`: exact match
//! - `departure_datetime`: departs at or after
//! - `arrival_datetime`: arrives at or before
//! - `price`: costs at most
//!
//! `name` labels an entry. A bad entry fails alone; the other entries still run.

mod ast;
mod engine;
mod errors;
mod parser;
mod result;

pub use ast::{Criterion, QueryDefinition, QueryEntry};
pub use engine::QueryEngine;
pub use errors::{QueryError, QueryResult};
pub use result::{QueryOutcome, QueryResponse};
