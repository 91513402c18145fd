//! Log source abstraction for feeding raw lines to the classifier.
//!
//! A source is read once, front to back, until it is exhausted. There is
//! no tailing: lines appended after ingestion are not seen.

mod file;
mod reader;

pub use file::FileSource;
pub use reader::ReaderSource;

use std::fmt::Debug;

use crate::error::SourceError;

/// Trait for reading raw log lines from various sources.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use linkwatch::{LogSource, ReaderSource};
///
/// let mut source = ReaderSource::new(Cursor::new("first\nsecond\n"), "memory");
/// assert_eq!(source.next_line().unwrap().as_deref(), Some("first"));
/// assert_eq!(source.next_line().unwrap().as_deref(), Some("second"));
/// assert_eq!(source.next_line().unwrap(), None);
/// ```
pub trait LogSource: Debug {
    /// Read the next line, without its line terminator.
    ///
    /// Returns `Ok(None)` once the source is exhausted.
    fn next_line(&mut self) -> Result<Option<String>, SourceError>;

    /// Returns a human-readable description of the source.
    fn description(&self) -> &str;
}
