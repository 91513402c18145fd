//! # linkwatch
//!
//! Scan a system log for NetworkManager connectivity transitions and keep
//! them in an ordered, in-memory event journal that an operator can list,
//! filter by category, delete from, and count.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  ┌─────────┐    ┌────────────┐    ┌─────────┐               │
//! │  │ source  │───▶│ classifier │───▶│ journal │◀── shell / app │
//! │  │ (input) │    │  (data)    │    │ (data)  │               │
//! │  └─────────┘    └────────────┘    └─────────┘               │
//! │        ingest::ingest drives the left half once at startup  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`source`]**: [`LogSource`] trait with file and reader backed sources
//! - **[`data`]**: [`Classifier`], [`Journal`] and the [`Event`] model
//! - **[`ingest`]**: reads a source to exhaustion into a journal
//! - **[`shell`]**: numbered text menu over the journal
//! - **[`app`]**, **[`events`]**, **[`ui`]**: full-screen terminal front end
//! - **[`config`]**, **[`logging`]**, **[`error`]**: ambient plumbing
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Scan /var/log/syslog and open the menu
//! linkwatch
//!
//! # Scan another file in the full-screen UI
//! linkwatch --file /var/log/messages --tui
//!
//! # Write a JSON report and exit
//! linkwatch --export events.json
//! ```
//!
//! ### As a library
//!
//! ```
//! use std::io::Cursor;
//! use linkwatch::{ingest, Category, Classifier, Journal, ReaderSource};
//!
//! let log = "\
//! Oct 19 10:00:01 host NetworkManager[612]: <info> device (eth0): link connected
//! Oct 19 10:05:12 host NetworkManager[612]: <info> NetworkManager state is now DISCONNECTED
//! ";
//! let mut source = ReaderSource::new(Cursor::new(log), "example");
//! let mut journal = Journal::new();
//! ingest(&mut source, &Classifier::default(), &mut journal).unwrap();
//!
//! assert_eq!(journal.count(), 2);
//! assert_eq!(journal.by_category(Category::Disconnected).count(), 1);
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod ingest;
pub mod logging;
pub mod shell;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use config::Settings;
pub use data::{
    Category, Classification, Classifier, ClassifierRules, DualMatchPolicy, Event, EventId,
    Journal,
};
pub use error::{JournalError, SourceError};
pub use ingest::{ingest, IngestStats};
pub use shell::{MenuChoice, Shell};
pub use source::{FileSource, LogSource, ReaderSource};
