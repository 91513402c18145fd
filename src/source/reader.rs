//! Source over any buffered reader (stdin, in-memory buffers, files).

use std::fmt;
use std::io::BufRead;

use super::LogSource;
use crate::error::SourceError;

/// A log source that reads newline-delimited text from a [`BufRead`].
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, since
/// syslog lines can carry arbitrary payloads from other programs.
pub struct ReaderSource<R> {
    reader: R,
    description: String,
    buf: Vec<u8>,
}

impl<R: BufRead> ReaderSource<R> {
    /// Wrap a reader; `name` is used in the description.
    pub fn new(reader: R, name: &str) -> Self {
        Self {
            reader,
            description: format!("stream: {}", name),
            buf: Vec::new(),
        }
    }
}

impl<R> fmt::Debug for ReaderSource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReaderSource")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl<R: BufRead> LogSource for ReaderSource<R> {
    fn next_line(&mut self) -> Result<Option<String>, SourceError> {
        self.buf.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(|source| SourceError::Read {
                description: self.description.clone(),
                source,
            })?;

        if read == 0 {
            return Ok(None);
        }

        let mut line = self.buf.as_slice();
        if let Some(rest) = line.strip_suffix(b"\n") {
            line = rest;
        }
        if let Some(rest) = line.strip_suffix(b"\r") {
            line = rest;
        }
        Ok(Some(String::from_utf8_lossy(line).into_owned()))
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    fn collect<R: BufRead>(source: &mut ReaderSource<R>) -> Vec<String> {
        let mut lines = Vec::new();
        while let Some(line) = source.next_line().unwrap() {
            lines.push(line);
        }
        lines
    }

    #[test]
    fn test_reads_lines_without_terminators() {
        let mut source = ReaderSource::new(Cursor::new("a\r\nb\nc"), "test");
        assert_eq!(collect(&mut source), vec!["a", "b", "c"]);
        assert_eq!(source.description(), "stream: test");
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let mut source = ReaderSource::new(Cursor::new("a\n\nb\n"), "test");
        assert_eq!(collect(&mut source), vec!["a", "", "b"]);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let bytes: &[u8] = b"Oct 19 \xff NetworkManager\n";
        let mut source = ReaderSource::new(Cursor::new(bytes), "test");
        let line = source.next_line().unwrap().unwrap();
        assert!(line.contains('\u{FFFD}'));
        assert!(line.ends_with("NetworkManager"));
    }

    #[test]
    fn test_empty_input() {
        let mut source = ReaderSource::new(Cursor::new(""), "test");
        assert!(source.next_line().unwrap().is_none());
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn test_read_error_is_reported() {
        let mut source = ReaderSource::new(io::BufReader::new(FailingReader), "broken");
        let err = source.next_line().unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }));
        assert!(err.to_string().contains("stream: broken"));
    }
}
