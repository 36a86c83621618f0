//! Error Log for rejected input lines
//!
//! One entry per rejected (or ignored comment) line, appended in input
//! order, flushed once per run. Never read back.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::output::write_atomic;
use crate::validator::Rejection;

/// Diagnostic for one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEntry {
    /// File the line came from, if any
    pub source: Option<PathBuf>,
    /// 1-based line number
    pub line: usize,
    /// The line as read, without its newline
    pub raw: String,
    /// Why the line did not make it into the store
    pub reason: String,
}

impl ErrorEntry {
    pub fn new(
        source: Option<&Path>,
        line: usize,
        raw: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            source: source.map(Path::to_path_buf),
            line,
            raw: raw.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file_name = self
            .source
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy());
        if let Some(name) = file_name {
            write!(f, "{}:", name)?;
        }
        write!(f, "Line {}: {} → {}", self.line, self.raw, self.reason)
    }
}

/// Ordered accumulator of `ErrorEntry`s
#[derive(Debug, Default, Clone)]
pub struct ErrorLog {
    entries: Vec<ErrorEntry>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ErrorEntry) {
        self.entries.push(entry);
    }

    /// Records a validator rejection with all of its messages
    pub fn push_rejection(
        &mut self,
        source: Option<&Path>,
        line: usize,
        raw: &str,
        rejection: &Rejection,
    ) {
        self.push(ErrorEntry::new(source, line, raw, rejection.message()));
    }

    /// Appends every entry of `other`, keeping order
    pub fn extend(&mut self, other: ErrorLog) {
        self.entries.extend(other.entries);
    }

    pub fn entries(&self) -> &[ErrorEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the log as text, one entry per line
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.to_string());
            out.push('\n');
        }
        out
    }

    /// Writes the rendered log, replacing any existing file
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        write_atomic(path, self.render().as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_entry_without_source() {
        let entry = ErrorEntry::new(None, 3, "bad,line", "missing required fields");
        assert_eq!(entry.to_string(), "Line 3: bad,line → missing required fields");
    }

    #[test]
    fn test_entry_uses_file_basename() {
        let entry = ErrorEntry::new(
            Some(Path::new("/data/in/flights.csv")),
            7,
            "x",
            "invalid origin code",
        );
        assert_eq!(entry.to_string(), "flights.csv:Line 7: x → invalid origin code");
    }

    #[test]
    fn test_render_keeps_order() {
        let mut log = ErrorLog::new();
        log.push(ErrorEntry::new(None, 2, "b", "second"));
        log.push(ErrorEntry::new(None, 1, "a", "first"));
        assert_eq!(log.render(), "Line 2: b → second\nLine 1: a → first\n");
    }

    #[test]
    fn test_write_to_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("errors.txt");

        let mut log = ErrorLog::new();
        log.push(ErrorEntry::new(None, 1, "a", "reason"));
        log.write_to(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Line 1: a → reason\n");
    }

    #[test]
    fn test_empty_log_writes_empty_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("errors.txt");
        ErrorLog::new().write_to(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
