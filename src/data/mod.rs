//! Event model, classification, and the journal.
//!
//! ## Submodules
//!
//! - [`event`]: [`Event`], [`EventId`], and the closed [`Category`] set
//! - [`classifier`]: turns raw log lines into `(timestamp, category)` pairs
//! - [`journal`]: ordered, mutable store of live events
//! - [`export`]: JSON report of the journal
//!
//! ## Data Flow
//!
//! ```text
//! raw log line
//!        │
//!        ▼
//! Classifier::classify_all()
//!        │
//!        ▼
//! Journal::append() ──▶ iter() / by_category() / delete() / count()
//! ```

pub mod classifier;
pub mod event;
pub mod export;
pub mod journal;

pub use classifier::{Classification, Classifier, ClassifierRules, DualMatchPolicy};
pub use event::{Category, Event, EventId};
pub use export::{Report, Summary};
pub use journal::Journal;
