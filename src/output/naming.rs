//! Response file naming
//!
//! `response_<student_id>_<name>_<last_name>_<YYYYMMDD_HHMM>.json`

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp layout used in response file names
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";

/// Caller identifiers that go into response file names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunIdentity {
    #[serde(default = "default_student_id")]
    pub student_id: String,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_last_name")]
    pub last_name: String,
}

fn default_student_id() -> String {
    "000000".to_string()
}
fn default_name() -> String {
    "Firstname".to_string()
}
fn default_last_name() -> String {
    "Lastname".to_string()
}

impl Default for RunIdentity {
    fn default() -> Self {
        Self {
            student_id: default_student_id(),
            name: default_name(),
            last_name: default_last_name(),
        }
    }
}

/// Builds the response file name for a run started at `timestamp`.
///
/// Spaces in the given and last names become underscores.
pub fn response_file_name(identity: &RunIdentity, timestamp: NaiveDateTime) -> String {
    format!(
        "response_{}_{}_{}_{}.json",
        identity.student_id,
        identity.name.replace(' ', "_"),
        identity.last_name.replace(' ', "_"),
        timestamp.format(TIMESTAMP_FORMAT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_datetime;

    #[test]
    fn test_default_identity_name() {
        let ts = parse_datetime("2024-03-05 09:07").unwrap();
        assert_eq!(
            response_file_name(&RunIdentity::default(), ts),
            "response_000000_Firstname_Lastname_20240305_0907.json"
        );
    }

    #[test]
    fn test_spaces_replaced() {
        let identity = RunIdentity {
            student_id: "123456".into(),
            name: "Mary Ann".into(),
            last_name: "van der Berg".into(),
        };
        let ts = parse_datetime("2024-12-31 23:59").unwrap();
        assert_eq!(
            response_file_name(&identity, ts),
            "response_123456_Mary_Ann_van_der_Berg_20241231_2359.json"
        );
    }
}
