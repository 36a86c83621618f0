//! Record Store
//!
//! In-memory, insertion-ordered collection of valid records.
//! Persisted as a pretty-printed JSON array; `save` then `load` is lossless.

mod errors;
mod store;

pub use errors::{StoreError, StoreResult};
pub use store::RecordStore;
