//! Ingestion driver: feeds a log source through the classifier into the
//! journal.

use tracing::{debug, info};

use crate::data::{Classifier, Journal};
use crate::error::SourceError;
use crate::source::LogSource;

/// Counters describing one ingestion pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub lines_read: usize,
    pub events_recorded: usize,
}

/// Read `source` to exhaustion, appending every classified event to
/// `journal` in line order.
///
/// A read failure aborts ingestion; events recorded before the failure
/// stay in the journal but the caller is expected to treat the run as
/// failed.
pub fn ingest(
    source: &mut dyn LogSource,
    classifier: &Classifier,
    journal: &mut Journal,
) -> Result<IngestStats, SourceError> {
    let mut stats = IngestStats::default();

    while let Some(line) = source.next_line()? {
        stats.lines_read += 1;
        for hit in classifier.classify_all(&line) {
            let event = journal.append(hit.timestamp, hit.category);
            debug!(
                line = stats.lines_read,
                id = %event.id,
                category = %event.category,
                "recorded event"
            );
            stats.events_recorded += 1;
        }
    }

    info!(
        source = source.description(),
        lines = stats.lines_read,
        events = stats.events_recorded,
        "ingestion complete"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Category, ClassifierRules, DualMatchPolicy, EventId};
    use crate::source::ReaderSource;
    use std::io::Cursor;

    const LOG: &str = "\
Oct 19 10:00:01 laptop NetworkManager[612]: <info>  device (eth0): link connected
Oct 19 10:02:33 laptop systemd[1]: Started Daily apt download activities.
Oct 19 10:05:12 laptop NetworkManager[612]: <info>  manager: NetworkManager state is now DISCONNECTED
";

    fn run(log: &str, classifier: &Classifier) -> (Journal, IngestStats) {
        let mut source = ReaderSource::new(Cursor::new(log.to_string()), "test");
        let mut journal = Journal::new();
        let stats = ingest(&mut source, classifier, &mut journal).unwrap();
        (journal, stats)
    }

    #[test]
    fn test_connect_unrelated_disconnect() {
        let (journal, stats) = run(LOG, &Classifier::default());

        assert_eq!(
            stats,
            IngestStats {
                lines_read: 3,
                events_recorded: 2
            }
        );
        assert_eq!(journal.count(), 2);

        let ids: Vec<EventId> = journal.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![EventId(1), EventId(2)]);

        let connected: Vec<EventId> =
            journal.by_category(Category::Connected).map(|e| e.id).collect();
        assert_eq!(connected, vec![EventId(1)]);
        let disconnected: Vec<EventId> =
            journal.by_category(Category::Disconnected).map(|e| e.id).collect();
        assert_eq!(disconnected, vec![EventId(2)]);

        assert_eq!(journal.get(EventId(1)).unwrap().timestamp, "Oct 19 10:00:01");
        assert_eq!(journal.get(EventId(2)).unwrap().timestamp, "Oct 19 10:05:12");
    }

    #[test]
    fn test_empty_source() {
        let (journal, stats) = run("", &Classifier::default());
        assert!(journal.is_empty());
        assert_eq!(stats, IngestStats::default());
    }

    #[test]
    fn test_dual_match_policy_applies() {
        let line = "Oct 19 11:00:00 laptop NetworkManager[612]: link connected, NetworkManager state is now DISCONNECTED\n";

        let (journal, _) = run(line, &Classifier::default());
        assert_eq!(journal.count(), 1);

        let rules = ClassifierRules {
            dual_match: DualMatchPolicy::Both,
            ..ClassifierRules::default()
        };
        let (journal, stats) = run(line, &Classifier::new(&rules));
        assert_eq!(journal.count(), 2);
        assert_eq!(stats.events_recorded, 2);
        let categories: Vec<Category> = journal.iter().map(|e| e.category).collect();
        assert_eq!(categories, vec![Category::Connected, Category::Disconnected]);
    }
}
