//! Ordered, mutable store of detected events.
//!
//! The journal keeps events in creation order using an arena of slots
//! linked in both directions by index. Appending is O(1); deleting scans
//! from the head to find the id and then unlinks the slot in O(1).
//! Freed slots are recycled, but event ids never are.

use std::iter::FusedIterator;

use tracing::debug;

use super::event::{Category, Event, EventId};
use crate::error::JournalError;

/// One arena cell: the event plus its neighbours in journal order.
#[derive(Debug, Clone)]
struct Slot {
    event: Event,
    prev: Option<usize>,
    next: Option<usize>,
}

/// The authoritative, ordered record of live events.
///
/// # Example
///
/// ```
/// use linkwatch::{Category, Journal};
///
/// let mut journal = Journal::new();
/// journal.append("Oct 19 10:00:01", Category::Connected);
/// journal.append("Oct 19 10:05:12", Category::Disconnected);
///
/// assert_eq!(journal.count(), 2);
/// assert_eq!(journal.by_category(Category::Connected).count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Journal {
    slots: Vec<Option<Slot>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    next_id: u64,
    len: usize,
}

impl Default for Journal {
    fn default() -> Self {
        Self::new()
    }
}

impl Journal {
    /// Create an empty journal whose first event will get id 1.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            next_id: 1,
            len: 0,
        }
    }

    /// Record a new event at the tail of the journal.
    pub fn append(&mut self, timestamp: impl Into<String>, category: Category) -> &Event {
        let id = EventId(self.next_id);
        self.next_id += 1;

        let slot = Slot {
            event: Event {
                id,
                timestamp: timestamp.into(),
                category,
            },
            prev: self.tail,
            next: None,
        };

        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                self.slots.push(None);
                self.slots.len() - 1
            }
        };

        match self.tail {
            Some(tail) => {
                if let Some(Some(tail_slot)) = self.slots.get_mut(tail) {
                    tail_slot.next = Some(index);
                }
            }
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;

        debug!(id = %id, category = %category, "appended event");
        &self.slots[index].insert(slot).event
    }

    /// Remove the event with the given id.
    ///
    /// Returns the removed event, or [`JournalError::NotFound`] if no live
    /// event carries that id. The journal is unchanged on failure.
    pub fn delete(&mut self, id: EventId) -> Result<Event, JournalError> {
        let index = self.position(id).ok_or(JournalError::NotFound(id))?;
        let slot = self.slots[index].take().ok_or(JournalError::NotFound(id))?;

        match slot.prev {
            Some(prev) => {
                if let Some(Some(prev_slot)) = self.slots.get_mut(prev) {
                    prev_slot.next = slot.next;
                }
            }
            None => self.head = slot.next,
        }
        match slot.next {
            Some(next) => {
                if let Some(Some(next_slot)) = self.slots.get_mut(next) {
                    next_slot.prev = slot.prev;
                }
            }
            None => self.tail = slot.prev,
        }

        self.free.push(index);
        self.len -= 1;

        debug!(id = %id, "deleted event");
        Ok(slot.event)
    }

    /// Look up a live event by id.
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.iter().find(|e| e.id == id)
    }

    /// Iterate over all live events in creation order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            journal: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Iterate over the live events of one category, in creation order.
    pub fn by_category(
        &self,
        category: Category,
    ) -> impl DoubleEndedIterator<Item = &Event> + '_ {
        self.iter().filter(move |e| e.category == category)
    }

    /// Number of live events.
    pub fn count(&self) -> usize {
        self.len
    }

    /// Number of live events of one category.
    pub fn count_by(&self, category: Category) -> usize {
        self.by_category(category).count()
    }

    /// Returns true if the journal holds no events.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Find the slot index of a live event by walking from the head.
    fn position(&self, id: EventId) -> Option<usize> {
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let slot = self.slots.get(index)?.as_ref()?;
            if slot.event.id == id {
                return Some(index);
            }
            cursor = slot.next;
        }
        None
    }

    fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)?.as_ref()
    }
}

impl<'a> IntoIterator for &'a Journal {
    type Item = &'a Event;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Double-ended iterator over a journal's live events.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    journal: &'a Journal,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Event;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.journal.slot(self.front?)?;
        self.front = slot.next;
        self.remaining -= 1;
        Some(&slot.event)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.journal.slot(self.back?)?;
        self.back = slot.prev;
        self.remaining -= 1;
        Some(&slot.event)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids<'a>(events: impl Iterator<Item = &'a Event>) -> Vec<u64> {
        events.map(|e| e.id.0).collect()
    }

    fn sample() -> Journal {
        let mut journal = Journal::new();
        journal.append("Oct 19 10:00:01", Category::Connected);
        journal.append("Oct 19 10:01:02", Category::Disconnected);
        journal.append("Oct 19 10:02:03", Category::Connected);
        journal.append("Oct 19 10:03:04", Category::Disconnected);
        journal
    }

    #[test]
    fn test_new_journal_is_empty() {
        let journal = Journal::new();
        assert!(journal.is_empty());
        assert_eq!(journal.count(), 0);
        assert_eq!(journal.iter().next(), None);
    }

    #[test]
    fn test_append_assigns_ids_from_one() {
        let mut journal = Journal::new();
        let first = journal.append("Oct 19 10:00:01", Category::Connected).id;
        let second = journal.append("Oct 19 10:00:02", Category::Disconnected).id;
        assert_eq!(first, EventId(1));
        assert_eq!(second, EventId(2));
    }

    #[test]
    fn test_append_keeps_fields() {
        let mut journal = Journal::new();
        let event = journal.append("Oct 19 10:00:01", Category::Disconnected).clone();
        assert_eq!(event.timestamp, "Oct 19 10:00:01");
        assert_eq!(event.category, Category::Disconnected);
        assert_eq!(journal.get(event.id), Some(&event));
    }

    #[test]
    fn test_iter_in_insertion_order() {
        let journal = sample();
        assert_eq!(ids(journal.iter()), vec![1, 2, 3, 4]);
        assert_eq!(ids(journal.iter().rev()), vec![4, 3, 2, 1]);
        assert_eq!(journal.iter().len(), 4);
    }

    #[test]
    fn test_iter_meets_in_the_middle() {
        let journal = sample();
        let mut iter = journal.iter();
        assert_eq!(iter.next().map(|e| e.id.0), Some(1));
        assert_eq!(iter.next_back().map(|e| e.id.0), Some(4));
        assert_eq!(iter.next().map(|e| e.id.0), Some(2));
        assert_eq!(iter.next_back().map(|e| e.id.0), Some(3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_delete_middle_keeps_neighbours() {
        let mut journal = sample();
        let removed = journal.delete(EventId(2)).unwrap();
        assert_eq!(removed.id, EventId(2));
        assert_eq!(ids(journal.iter()), vec![1, 3, 4]);
        assert_eq!(ids(journal.iter().rev()), vec![4, 3, 1]);
        assert_eq!(journal.count(), 3);
    }

    #[test]
    fn test_delete_head_and_tail() {
        let mut journal = sample();
        journal.delete(EventId(1)).unwrap();
        journal.delete(EventId(4)).unwrap();
        assert_eq!(ids(journal.iter()), vec![2, 3]);
        assert_eq!(ids(journal.iter().rev()), vec![3, 2]);
    }

    #[test]
    fn test_delete_only_event() {
        let mut journal = Journal::new();
        journal.append("Oct 19 10:00:01", Category::Connected);
        journal.delete(EventId(1)).unwrap();
        assert!(journal.is_empty());
        assert_eq!(journal.iter().next(), None);

        // The journal is usable again and the id is not reused.
        let id = journal.append("Oct 19 10:00:02", Category::Connected).id;
        assert_eq!(id, EventId(2));
        assert_eq!(ids(journal.iter()), vec![2]);
    }

    #[test]
    fn test_delete_twice_reports_not_found() {
        let mut journal = sample();
        assert!(journal.delete(EventId(3)).is_ok());
        assert_eq!(journal.delete(EventId(3)), Err(JournalError::NotFound(EventId(3))));
        assert_eq!(journal.count(), 3);
    }

    #[test]
    fn test_delete_unknown_leaves_state() {
        let mut journal = sample();
        assert_eq!(journal.delete(EventId(99)), Err(JournalError::NotFound(EventId(99))));
        assert_eq!(ids(journal.iter()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_deleted_id_cannot_be_queried() {
        let mut journal = sample();
        journal.delete(EventId(2)).unwrap();
        assert!(journal.get(EventId(2)).is_none());
    }

    #[test]
    fn test_recycled_slot_goes_to_tail() {
        let mut journal = sample();
        journal.delete(EventId(1)).unwrap();
        let id = journal.append("Oct 19 10:04:05", Category::Connected).id;
        assert_eq!(id, EventId(5));
        assert_eq!(ids(journal.iter()), vec![2, 3, 4, 5]);
        assert_eq!(ids(journal.iter().rev()), vec![5, 4, 3, 2]);
    }

    #[test]
    fn test_by_category() {
        let journal = sample();
        assert_eq!(ids(journal.by_category(Category::Connected)), vec![1, 3]);
        assert_eq!(ids(journal.by_category(Category::Disconnected)), vec![2, 4]);
        assert_eq!(journal.count_by(Category::Connected), 2);
    }

    #[test]
    fn test_by_category_empty_is_not_an_error() {
        let mut journal = Journal::new();
        journal.append("Oct 19 10:00:01", Category::Connected);
        assert_eq!(journal.by_category(Category::Disconnected).count(), 0);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Append(bool),
        Delete(u64),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<bool>().prop_map(Op::Append),
            (1u64..40).prop_map(Op::Delete),
        ]
    }

    proptest! {
        #[test]
        fn prop_journal_matches_model(ops in proptest::collection::vec(op_strategy(), 0..80)) {
            let mut journal = Journal::new();
            let mut model: Vec<(u64, Category)> = Vec::new();
            let mut last_id = 0u64;

            for op in ops {
                match op {
                    Op::Append(connected) => {
                        let category = if connected { Category::Connected } else { Category::Disconnected };
                        let id = journal.append("ts", category).id.0;
                        prop_assert!(id > last_id);
                        last_id = id;
                        model.push((id, category));
                    }
                    Op::Delete(id) => {
                        let present = model.iter().position(|(m, _)| *m == id);
                        let result = journal.delete(EventId(id));
                        match present {
                            Some(pos) => {
                                prop_assert_eq!(result.map(|e| e.id.0), Ok(id));
                                model.remove(pos);
                            }
                            None => prop_assert!(result.is_err()),
                        }
                    }
                }

                let live: Vec<u64> = model.iter().map(|(id, _)| *id).collect();
                prop_assert_eq!(ids(journal.iter()), live.clone());
                let mut reversed = live.clone();
                reversed.reverse();
                prop_assert_eq!(ids(journal.iter().rev()), reversed);
                prop_assert_eq!(journal.count(), live.len());

                for category in Category::ALL {
                    let expected: Vec<u64> = model
                        .iter()
                        .filter(|(_, c)| *c == category)
                        .map(|(id, _)| *id)
                        .collect();
                    prop_assert_eq!(ids(journal.by_category(category)), expected);
                }
            }
        }
    }
}
