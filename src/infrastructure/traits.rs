//! I/O boundary traits for testability
//!
//! The tree builder never touches files or stdin directly; it is handed a
//! [`LineSource`], so callers and tests can substitute their own.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

/// Producer of raw input lines, one domain per line.
///
/// All-or-nothing: on error no lines are returned.
pub trait LineSource: Send + Sync {
    /// Read every line, in source order.
    fn read_lines(&self) -> io::Result<Vec<String>>;

    /// Short human-readable name used in error context.
    fn describe(&self) -> String {
        "line source".to_string()
    }
}

impl<F> LineSource for F
where
    F: Fn() -> io::Result<Vec<String>> + Send + Sync,
{
    fn read_lines(&self) -> io::Result<Vec<String>> {
        self()
    }
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Reads lines from a file.
#[derive(Debug, Clone)]
pub struct FileLineSource {
    path: PathBuf,
}

impl FileLineSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileLineSource {
    fn read_lines(&self) -> io::Result<Vec<String>> {
        let file = std::fs::File::open(&self.path)?;
        read_all(io::BufReader::new(file))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Reads lines from standard input until EOF.
#[derive(Debug, Default)]
pub struct StdinLineSource;

impl LineSource for StdinLineSource {
    fn read_lines(&self) -> io::Result<Vec<String>> {
        read_all(io::stdin().lock())
    }

    fn describe(&self) -> String {
        "<stdin>".to_string()
    }
}

/// In-memory lines.
#[derive(Debug, Clone, Default)]
pub struct StaticLineSource {
    lines: Vec<String>,
}

impl StaticLineSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a text buffer into lines.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines())
    }
}

impl LineSource for StaticLineSource {
    fn read_lines(&self) -> io::Result<Vec<String>> {
        Ok(self.lines.clone())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}

/// Collect every line or fail as a whole.
fn read_all<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn given_reader_with_invalid_utf8_when_reading_then_fails_whole() {
        let bytes: Vec<u8> = b"ok.com\n\xff\xfe.com\nlater.com\n".to_vec();
        let result = read_all(Cursor::new(bytes));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn given_crlf_text_when_reading_then_strips_line_endings() {
        let lines = read_all(Cursor::new("a.com\r\nb.com\r\n")).unwrap();
        assert_eq!(lines, vec!["a.com", "b.com"]);
    }

    #[test]
    fn given_closure_when_used_as_source_then_delegates() {
        let source = || -> io::Result<Vec<String>> { Ok(vec!["x.org".to_string()]) };
        assert_eq!(source.read_lines().unwrap(), vec!["x.org"]);
        assert_eq!(source.describe(), "line source");
    }
}
