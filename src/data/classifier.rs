//! Classification of raw syslog lines into connectivity events.
//!
//! A line is only considered when it mentions the originating subsystem
//! (NetworkManager by default). Within those lines a link-up phrase yields
//! [`Category::Connected`] and the manager's disconnected-state phrase
//! yields [`Category::Disconnected`]. All matching is case-insensitive
//! substring matching.

use serde::{Deserialize, Serialize};

use super::event::Category;

/// Default number of leading characters captured as the timestamp.
///
/// Classic syslog stamps such as `Oct 19 10:00:01` are exactly this wide.
pub const DEFAULT_TIMESTAMP_WIDTH: usize = 15;

/// What to do with a line that matches both the connect and the
/// disconnect phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DualMatchPolicy {
    /// Emit only the first matching category (connect is checked first).
    #[default]
    FirstMatch,
    /// Emit one event per matching phrase.
    Both,
}

/// Matching rules for the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierRules {
    /// Token a line must contain to be considered at all.
    pub subsystem_marker: String,
    /// Phrase signalling a physical link-up.
    pub connect_phrase: String,
    /// Phrase signalling the manager's disconnected state.
    pub disconnect_phrase: String,
    /// Number of leading characters captured as the timestamp.
    pub timestamp_width: usize,
    pub dual_match: DualMatchPolicy,
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self {
            subsystem_marker: "NetworkManager".to_string(),
            connect_phrase: "link connected".to_string(),
            disconnect_phrase: "NetworkManager state is now DISCONNECTED".to_string(),
            timestamp_width: DEFAULT_TIMESTAMP_WIDTH,
            dual_match: DualMatchPolicy::default(),
        }
    }
}

/// Result of classifying a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub timestamp: String,
    pub category: Category,
}

/// Decides whether a log line encodes a connectivity event.
///
/// The classifier is a pure function of its rules and the input line.
///
/// # Example
///
/// ```
/// use linkwatch::{Category, Classifier};
///
/// let classifier = Classifier::default();
/// let line = "Oct 19 10:00:01 host NetworkManager[612]: <info> eth0: link connected";
/// let hit = classifier.classify(line).unwrap();
/// assert_eq!(hit.timestamp, "Oct 19 10:00:01");
/// assert_eq!(hit.category, Category::Connected);
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    marker: String,
    connect: String,
    disconnect: String,
    timestamp_width: usize,
    dual_match: DualMatchPolicy,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&ClassifierRules::default())
    }
}

impl Classifier {
    /// Build a classifier from its rules.
    pub fn new(rules: &ClassifierRules) -> Self {
        Self {
            marker: rules.subsystem_marker.to_lowercase(),
            connect: rules.connect_phrase.to_lowercase(),
            disconnect: rules.disconnect_phrase.to_lowercase(),
            timestamp_width: rules.timestamp_width,
            dual_match: rules.dual_match,
        }
    }

    /// Classify a line, returning at most one event (first match wins).
    pub fn classify(&self, line: &str) -> Option<Classification> {
        let line = trim_line_ending(line);
        let category = self.categories(line).next()?;
        Some(Classification {
            timestamp: extract_timestamp(line, self.timestamp_width).to_string(),
            category,
        })
    }

    /// Classify a line according to the configured [`DualMatchPolicy`].
    ///
    /// Returns an empty vector for lines that are not events.
    pub fn classify_all(&self, line: &str) -> Vec<Classification> {
        let line = trim_line_ending(line);
        let limit = match self.dual_match {
            DualMatchPolicy::FirstMatch => 1,
            DualMatchPolicy::Both => Category::ALL.len(),
        };
        let timestamp = extract_timestamp(line, self.timestamp_width);

        self.categories(line)
            .take(limit)
            .map(|category| Classification {
                timestamp: timestamp.to_string(),
                category,
            })
            .collect()
    }

    /// All categories the line matches, connect first.
    fn categories(&self, line: &str) -> impl Iterator<Item = Category> {
        let lowered = line.to_lowercase();
        let relevant = lowered.contains(&self.marker);
        let connected = relevant && lowered.contains(&self.connect);
        let disconnected = relevant && lowered.contains(&self.disconnect);

        [
            (connected, Category::Connected),
            (disconnected, Category::Disconnected),
        ]
        .into_iter()
        .filter_map(|(hit, category)| hit.then_some(category))
    }
}

/// Take up to `width` leading characters of a line.
///
/// Lines shorter than `width` are returned whole. Counting is by
/// character, so multi-byte sequences are never split.
pub fn extract_timestamp(line: &str, width: usize) -> &str {
    match line.char_indices().nth(width) {
        Some((end, _)) => &line[..end],
        None => line,
    }
}

fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
