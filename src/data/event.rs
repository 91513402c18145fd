//! Event records produced by the classifier and held by the journal.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a journal event.
///
/// Ids are handed out in creation order starting at 1 and are never
/// reused, even after the event they named has been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of connectivity transition an event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// The physical link of a device came up.
    Connected,
    /// NetworkManager reported its global state as disconnected.
    Disconnected,
}

impl Category {
    /// Both categories, in display order.
    pub const ALL: [Category; 2] = [Category::Connected, Category::Disconnected];

    /// Returns the display label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Connected => "CONNECTED",
            Category::Disconnected => "DISCONNECTED",
        }
    }

    /// Returns the operator phrase that selects this category.
    pub fn phrase(&self) -> &'static str {
        match self {
            Category::Connected => "connection",
            Category::Disconnected => "disconnection",
        }
    }

    /// Map an operator-typed phrase to a category.
    ///
    /// Only the first whitespace-separated token is considered and the
    /// comparison ignores ASCII case. Unknown phrases map to `None`.
    pub fn from_phrase(input: &str) -> Option<Self> {
        let token = input.split_whitespace().next()?;
        Self::ALL.into_iter().find(|c| c.phrase().eq_ignore_ascii_case(token))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One detected network-state transition.
///
/// Events are immutable once created; the journal only hands out shared
/// references to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    /// Leading characters of the source line, captured as-is.
    pub timestamp: String,
    pub category: Category,
}
