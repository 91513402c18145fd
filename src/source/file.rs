//! File-based log source.
//!
//! Opens a log file (typically `/var/log/syslog`) and reads it once.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use super::{LogSource, ReaderSource};
use crate::error::SourceError;

/// A log source that reads lines from a file on disk.
///
/// The file is opened eagerly so that an unreadable log is reported
/// before any journal is built.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
    inner: ReaderSource<BufReader<File>>,
}

impl FileSource {
    /// Open the file at `path` for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| SourceError::Open {
            path: path.clone(),
            source,
        })?;
        let description = format!("file: {}", path.display());
        let inner = ReaderSource::new(BufReader::new(file), &path.display().to_string());
        Ok(Self {
            path,
            description,
            inner,
        })
    }

    /// Returns the path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSource for FileSource {
    fn next_line(&mut self) -> Result<Option<String>, SourceError> {
        self.inner.next_line().map_err(|err| match err {
            SourceError::Read { source, .. } => SourceError::Read {
                description: self.description.clone(),
                source,
            },
            other => other,
        })
    }

    fn description(&self) -> &str {
        &self.description
    }
}
