//! Ingest of CSV text, files and directories

use std::fs;
use std::path::{Path, PathBuf};

use super::errors::{IngestError, IngestResult};
use super::line::split_line;
use crate::error_log::{ErrorEntry, ErrorLog};
use crate::observability::Event;
use crate::store::RecordStore;
use crate::validator::RecordValidator;

/// Error log reason for `#` lines
pub const COMMENT_REASON: &str = "comment line, ignored for data parsing";

/// Result of ingesting one or more inputs
#[derive(Debug, Default)]
pub struct Ingest {
    /// Valid records in input order
    pub store: RecordStore,
    /// Rejected and comment lines in input order
    pub errors: ErrorLog,
}

impl Ingest {
    fn append(&mut self, other: Ingest) {
        for record in other.store.into_records() {
            self.store.add_valid(record);
        }
        self.errors.extend(other.errors);
    }
}

fn is_header(cells: &[String]) -> bool {
    cells
        .first()
        .is_some_and(|c| c.trim().eq_ignore_ascii_case("flight_id"))
}

/// Parses CSV text line by line.
///
/// `source` is only used to label error log entries.
pub fn parse_text(text: &str, source: Option<&Path>) -> Ingest {
    let validator = RecordValidator::new();
    let mut ingest = Ingest::default();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;

        if line.trim().is_empty() {
            continue;
        }
        if line.trim_start().starts_with('#') {
            ingest
                .errors
                .push(ErrorEntry::new(source, line_no, line, COMMENT_REASON));
            continue;
        }

        let cells = split_line(line);

        if is_header(&cells) {
            continue;
        }

        match validator.validate_cells(&cells) {
            Ok(record) => ingest.store.add_valid(record),
            Err(rejection) => {
                tracing::debug!(
                    event = %Event::RecordRejected,
                    line = line_no,
                    reason = %rejection.reason(),
                    "record rejected"
                );
                ingest
                    .errors
                    .push_rejection(source, line_no, line, &rejection);
            }
        }
    }

    ingest
}

/// Ingests a single CSV file.
pub fn ingest_file(path: &Path) -> IngestResult<Ingest> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound(path.to_path_buf()));
    }

    tracing::info!(event = %Event::IngestStart, path = %path.display(), "reading input");
    let text = fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    let ingest = parse_text(&text, Some(path));
    tracing::info!(
        event = %Event::IngestComplete,
        path = %path.display(),
        valid = ingest.store.len(),
        rejected = ingest.errors.len(),
        "input parsed"
    );

    Ok(ingest)
}

/// Ingests every `*.csv` file in a directory, in sorted path order.
///
/// Subdirectories are not descended into.
pub fn ingest_dir(dir: &Path) -> IngestResult<Ingest> {
    if !dir.is_dir() {
        return Err(IngestError::DirNotFound(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|e| IngestError::io(dir, e))?;
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| IngestError::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "csv") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut combined = Ingest::default();
    for path in &paths {
        combined.append(ingest_file(path)?);
    }
    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const GOOD: &str = "FL123,JFK,LAX,2024-01-01 08:00,2024-01-01 10:00,199.99";
    const BAD: &str = "FL123,JFK,LAX,2024-01-01 10:00,2024-01-01 08:00,199.99";

    #[test]
    fn test_valid_and_invalid_lines() {
        let text = format!("{}\n{}\n", GOOD, BAD);
        let ingest = parse_text(&text, None);

        assert_eq!(ingest.store.len(), 1);
        assert_eq!(ingest.errors.len(), 1);
        let entry = &ingest.errors.entries()[0];
        assert_eq!(entry.line, 2);
        assert_eq!(entry.raw, BAD);
        assert_eq!(entry.reason, "arrival before or equal to departure");
    }

    #[test]
    fn test_header_and_blank_lines_skipped() {
        let text = format!(
            "flight_id,origin,destination,departure_datetime,arrival_datetime,price\n\n   \n{}\n",
            GOOD
        );
        let ingest = parse_text(&text, None);
        assert_eq!(ingest.store.len(), 1);
        assert!(ingest.errors.is_empty());
    }

    #[test]
    fn test_header_case_insensitive() {
        let ingest = parse_text(" Flight_ID ,a,b,c,d,e\n", None);
        assert!(ingest.store.is_empty());
        assert!(ingest.errors.is_empty());
    }

    #[test]
    fn test_comment_lines_logged() {
        let text = format!("  # exported 2024-01-01\n{}\n", GOOD);
        let ingest = parse_text(&text, None);
        assert_eq!(ingest.store.len(), 1);
        assert_eq!(ingest.errors.entries()[0].reason, COMMENT_REASON);
        assert_eq!(ingest.errors.entries()[0].line, 1);
    }

    #[test]
    fn test_unterminated_quote_is_one_cell() {
        let ingest = parse_text("\"FL1,JFK,LAX\n", None);
        assert!(ingest.store.is_empty());
        assert_eq!(ingest.errors.entries()[0].reason, "missing required fields");
    }

    #[test]
    fn test_quoted_cells_validated() {
        let ingest = parse_text(
            "\"FL9\",\"JFK\",LAX,2024-01-01 08:00,2024-01-01 10:00,\"50\"\n",
            None,
        );
        assert_eq!(ingest.store.len(), 1);
        assert_eq!(ingest.store.records()[0].flight_id, "FL9");
    }

    #[test]
    fn test_ingest_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = ingest_file(&tmp.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound(_)));
    }

    #[test]
    fn test_ingest_dir_sorted_csv_only() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("b.csv"),
            "BB2,JFK,LAX,2024-01-01 08:00,2024-01-01 10:00,2\n",
        )
        .unwrap();
        fs::write(
            tmp.path().join("a.csv"),
            "AA1,JFK,LAX,2024-01-01 08:00,2024-01-01 10:00,1\nbad\n",
        )
        .unwrap();
        fs::write(
            tmp.path().join("notes.txt"),
            "CC3,JFK,LAX,2024-01-01 08:00,2024-01-01 10:00,3\n",
        )
        .unwrap();

        let ingest = ingest_dir(tmp.path()).unwrap();
        let ids: Vec<_> = ingest
            .store
            .records()
            .iter()
            .map(|r| r.flight_id.as_str())
            .collect();
        assert_eq!(ids, vec!["AA1", "BB2"]);
        assert_eq!(ingest.errors.len(), 1);
        assert_eq!(
            ingest.errors.entries()[0].to_string(),
            "a.csv:Line 2: bad → missing required fields"
        );
    }

    #[test]
    fn test_ingest_dir_missing() {
        let tmp = TempDir::new().unwrap();
        let err = ingest_dir(&tmp.path().join("absent")).unwrap_err();
        assert!(matches!(err, IngestError::DirNotFound(_)));
    }
}
