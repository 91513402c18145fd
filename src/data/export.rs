//! JSON report of the journal's current contents.
//!
//! The report is a one-way snapshot for operators and scripts; nothing
//! in this crate reads it back.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::event::{Category, Event};
use super::journal::Journal;

/// Per-category totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub connected: usize,
    pub disconnected: usize,
}

impl Summary {
    /// Compute totals for a journal.
    pub fn of(journal: &Journal) -> Self {
        Self {
            total: journal.count(),
            connected: journal.count_by(Category::Connected),
            disconnected: journal.count_by(Category::Disconnected),
        }
    }
}

/// Serializable view of a journal.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub source: &'a str,
    pub summary: Summary,
    pub events: Vec<&'a Event>,
}

impl<'a> Report<'a> {
    /// Build a report of every live event, in journal order.
    pub fn new(journal: &'a Journal, source: &'a str) -> Self {
        Self {
            source,
            summary: Summary::of(journal),
            events: journal.iter().collect(),
        }
    }

    /// Render the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write a report of `journal` to `path`.
pub fn write_report(journal: &Journal, source: &str, path: &Path) -> Result<()> {
    let json = Report::new(journal, source).to_json()?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::EventId;
    use tempfile::TempDir;

    fn journal() -> Journal {
        let mut journal = Journal::new();
        journal.append("Oct 19 10:00:01", Category::Connected);
        journal.append("Oct 19 10:01:02", Category::Disconnected);
        journal.append("Oct 19 10:02:03", Category::Connected);
        journal
    }

    #[test]
    fn test_summary_counts() {
        let summary = Summary::of(&journal());
        assert_eq!(
            summary,
            Summary {
                total: 3,
                connected: 2,
                disconnected: 1
            }
        );
    }

    #[test]
    fn test_report_json_shape() {
        let mut journal = journal();
        journal.delete(EventId(2)).unwrap();

        let json = Report::new(&journal, "file: syslog").to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["source"], "file: syslog");
        assert_eq!(value["summary"]["total"], 2);
        assert_eq!(value["summary"]["disconnected"], 0);
        assert_eq!(value["events"][0]["id"], 1);
        assert_eq!(value["events"][1]["id"], 3);
        assert_eq!(value["events"][1]["category"], "CONNECTED");
        assert_eq!(value["events"][1]["timestamp"], "Oct 19 10:02:03");
    }

    #[test]
    fn test_write_report() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("events.json");

        write_report(&journal(), "test", &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"total\": 3"));
    }

    #[test]
    fn test_write_report_bad_path() {
        let err = write_report(&journal(), "test", Path::new("/nonexistent/dir/out.json"))
            .unwrap_err();
        assert!(err.to_string().contains("failed to write"));
    }
}
