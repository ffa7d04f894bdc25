use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, SplitError};

/// Ordered lines of the source file, terminators stripped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Collect every line of `reader`. `\n` and `\r\n` terminators are dropped.
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

/// Open `path` and load it whole into memory.
pub fn load_document(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SplitError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let lines = read_lines(BufReader::new(file)).map_err(|source| SplitError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Document::from_lines(lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_empty_source_yields_no_lines() {
        let lines = read_lines(Cursor::new("")).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_strips_terminators() {
        let lines = read_lines(Cursor::new("alpha\r\nbeta\ngamma")).unwrap();
        assert_eq!(lines, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_keeps_blank_lines() {
        let lines = read_lines(Cursor::new("a\n\n\nb\n")).unwrap();
        assert_eq!(lines, vec!["a", "", "", "b"]);
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let bytes: &[u8] = b"ok\n\xff\xfe\n";
        assert!(read_lines(Cursor::new(bytes)).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_document(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(SplitError::SourceUnavailable { .. })));
    }

    #[test]
    fn test_load_non_utf8_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.dat");
        std::fs::write(&path, b"fine\n\xc3\x28\n").unwrap();

        let result = load_document(&path);
        assert!(matches!(result, Err(SplitError::ReadError { .. })));
    }

    #[test]
    fn test_load_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "one\ntwo\nthree\n").unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.lines()[2], "three");
    }
}
