//! Error types for log sources and the event journal.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::data::EventId;

/// Errors raised while obtaining or reading the log stream.
///
/// Both variants are fatal to a run: no journal is presented to the
/// operator when ingestion could not complete.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The log could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from an already opened log failed.
    #[error("failed to read from {description}: {source}")]
    Read {
        description: String,
        #[source]
        source: io::Error,
    },
}

/// Errors returned by journal operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JournalError {
    /// No live event carries the requested id.
    #[error("event with code {0} not found")]
    NotFound(EventId),
}
