//! Query definition parsing
//!
//! Turns JSON into typed criteria. Strict: unknown keys and wrongly shaped
//! values are errors, never ignored. `null` means "not constrained", and so
//! does an empty datetime bound.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use super::ast::{Criterion, QueryDefinition, QueryEntry};
use super::errors::{QueryError, QueryResult};
use crate::record::parse_datetime;

/// Reserved key that labels an entry
const NAME_KEY: &str = "name";

impl QueryDefinition {
    /// Reads and parses a query definition file.
    pub fn load(path: &Path) -> QueryResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| QueryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parses a query definition.
    ///
    /// # Errors
    ///
    /// `QueryError::MalformedDefinition` if the text is not JSON or is neither
    /// an array nor an object. Per-entry problems are kept on the entry.
    pub fn parse(content: &str) -> QueryResult<Self> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| QueryError::MalformedDefinition(format!("Invalid JSON: {}", e)))?;

        let items = match value {
            Value::Array(items) => items,
            obj @ Value::Object(_) => vec![obj],
            _ => {
                return Err(QueryError::MalformedDefinition(
                    "expected a JSON array of query objects or a single query object".into(),
                ))
            }
        };

        let entries = items
            .into_iter()
            .enumerate()
            .map(|(index, raw)| parse_entry(index, raw))
            .collect();

        Ok(Self { entries })
    }
}

fn parse_entry(index: usize, raw: Value) -> QueryEntry {
    let default_name = format!("query_{}", index + 1);

    let (name, criteria) = match raw.as_object() {
        Some(obj) => entry_parts(obj, default_name),
        None => (default_name, Err(QueryError::MalformedEntry { index })),
    };

    QueryEntry {
        name,
        raw,
        criteria,
    }
}

fn entry_parts(
    obj: &Map<String, Value>,
    default_name: String,
) -> (String, QueryResult<Vec<Criterion>>) {
    match obj.get(NAME_KEY) {
        None | Some(Value::Null) => (default_name, parse_criteria(obj)),
        Some(Value::String(s)) => (s.clone(), parse_criteria(obj)),
        Some(_) => (
            default_name,
            Err(QueryError::malformed(NAME_KEY, "expected a string")),
        ),
    }
}

/// Parses every key of one entry into criteria, in key order.
pub(crate) fn parse_criteria(obj: &Map<String, Value>) -> QueryResult<Vec<Criterion>> {
    let mut criteria = Vec::with_capacity(obj.len());

    for (key, value) in obj {
        if key == NAME_KEY || value.is_null() {
            continue;
        }
        let criterion = match key.as_str() {
            "flight_id" => Criterion::FlightId(expect_string(key, value)?),
            "origin" => Criterion::Origin(expect_string(key, value)?),
            "destination" => Criterion::Destination(expect_string(key, value)?),
            "departure_datetime" => match expect_datetime(key, value)? {
                Some(bound) => Criterion::DepartsFrom(bound),
                None => continue,
            },
            "arrival_datetime" => match expect_datetime(key, value)? {
                Some(bound) => Criterion::ArrivesBy(bound),
                None => continue,
            },
            "price" => Criterion::MaxPrice(expect_price(key, value)?),
            _ => {
                return Err(QueryError::UnknownCriterion { field: key.clone() });
            }
        };
        criteria.push(criterion);
    }

    Ok(criteria)
}

fn expect_string(field: &str, value: &Value) -> QueryResult<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| QueryError::malformed(field, "expected a string"))
}

/// `""` is no bound
fn expect_datetime(field: &str, value: &Value) -> QueryResult<Option<chrono::NaiveDateTime>> {
    let s = value
        .as_str()
        .ok_or_else(|| QueryError::malformed(field, "expected a YYYY-MM-DD HH:MM string"))?;
    if s.is_empty() {
        return Ok(None);
    }
    parse_datetime(s.trim()).map(Some).ok_or_else(|| {
        QueryError::malformed(field, format!("'{}' is not a YYYY-MM-DD HH:MM datetime", s))
    })
}

/// Accepts a JSON number or a numeric string
fn expect_price(field: &str, value: &Value) -> QueryResult<f64> {
    let price = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    price
        .filter(|p| p.is_finite())
        .ok_or_else(|| QueryError::malformed(field, format!("'{}' is not a number", value)))
}
