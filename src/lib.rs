//! flightdb - A strict, deterministic flight schedule parser, store and query tool
//!
//! raw lines → validator → (valid → store, invalid → error log)
//! store → query engine ← query definition → response file

pub mod cli;
pub mod config;
pub mod error_log;
pub mod observability;
pub mod output;
pub mod parser;
pub mod query;
pub mod record;
pub mod store;
pub mod validator;
