//! Application state and navigation logic for the terminal UI.

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::data::{export, Category, Event, EventId, Journal};
use crate::ui::Theme;

/// How long a status message stays visible.
const STATUS_TTL: Duration = Duration::from_secs(3);

/// The current view/tab in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Every event in journal order.
    All,
    /// Only link-up events.
    Connected,
    /// Only disconnected-state events.
    Disconnected,
}

impl View {
    /// Cycle to the next view.
    pub fn next(self) -> Self {
        match self {
            View::All => View::Connected,
            View::Connected => View::Disconnected,
            View::Disconnected => View::All,
        }
    }

    /// Cycle to the previous view.
    pub fn prev(self) -> Self {
        match self {
            View::All => View::Disconnected,
            View::Connected => View::All,
            View::Disconnected => View::Connected,
        }
    }

    /// Returns the display label for this view.
    pub fn label(&self) -> &'static str {
        match self {
            View::All => "All",
            View::Connected => "Connected",
            View::Disconnected => "Disconnected",
        }
    }

    /// Category this view is restricted to, if any.
    pub fn category(&self) -> Option<Category> {
        match self {
            View::All => None,
            View::Connected => Some(Category::Connected),
            View::Disconnected => Some(Category::Disconnected),
        }
    }
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub current_view: View,
    pub show_help: bool,

    pub journal: Journal,
    source_description: String,

    /// Row index within the current view.
    pub selected_index: usize,

    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App over an already populated journal.
    pub fn new(journal: Journal, source_description: impl Into<String>, theme: Theme) -> Self {
        Self {
            running: true,
            current_view: View::All,
            show_help: false,
            journal,
            source_description: source_description.into(),
            selected_index: 0,
            theme,
            status_message: None,
        }
    }

    /// Returns a description of the log source the journal was built from.
    pub fn source_description(&self) -> &str {
        &self.source_description
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < STATUS_TTL {
                return Some(msg);
            }
        }
        None
    }

    /// Events shown in the current view, in journal order.
    pub fn visible_events(&self) -> Vec<&Event> {
        match self.current_view.category() {
            Some(category) => self.journal.by_category(category).collect(),
            None => self.journal.iter().collect(),
        }
    }

    /// The event under the cursor, if the view is not empty.
    pub fn selected_event(&self) -> Option<&Event> {
        self.visible_events().get(self.selected_index).copied()
    }

    /// Switch to the next view.
    pub fn next_view(&mut self) {
        self.set_view(self.current_view.next());
    }

    /// Switch to the previous view.
    pub fn prev_view(&mut self) {
        self.set_view(self.current_view.prev());
    }

    /// Switch to a specific view.
    pub fn set_view(&mut self, view: View) {
        self.current_view = view;
        self.selected_index = 0;
    }

    /// Toggle between the two category views (menu option 2).
    pub fn toggle_category_view(&mut self) {
        let view = match self.current_view {
            View::Connected => View::Disconnected,
            View::All | View::Disconnected => View::Connected,
        };
        self.set_view(view);
    }

    /// Move selection down by one item.
    pub fn select_next(&mut self) {
        self.select_next_n(1);
    }

    /// Move selection up by one item.
    pub fn select_prev(&mut self) {
        self.select_prev_n(1);
    }

    /// Move selection down by n items.
    pub fn select_next_n(&mut self, n: usize) {
        let max = self.visible_events().len().saturating_sub(1);
        self.selected_index = (self.selected_index + n).min(max);
    }

    /// Move selection up by n items.
    pub fn select_prev_n(&mut self, n: usize) {
        self.selected_index = self.selected_index.saturating_sub(n);
    }

    /// Jump to the first item in the list.
    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    /// Jump to the last item in the list.
    pub fn select_last(&mut self) {
        self.selected_index = self.visible_events().len().saturating_sub(1);
    }

    /// Delete the event under the cursor (menu option 3).
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_event().map(|e| e.id) else {
            self.set_status_message("Nothing to remove".to_string());
            return;
        };
        self.delete(id);
    }

    /// Delete an event by id and report the outcome in the status bar.
    pub fn delete(&mut self, id: EventId) {
        let message = match self.journal.delete(id) {
            Ok(event) => format!("Event {} removed.", event.id),
            Err(e) => format!("Remove failed: {}", e),
        };
        self.set_status_message(message);

        let max = self.visible_events().len().saturating_sub(1);
        self.selected_index = self.selected_index.min(max);
    }

    /// Report the total event count in the status bar (menu option 4).
    pub fn show_count(&mut self) {
        let message = format!("Total events: {}", self.journal.count());
        self.set_status_message(message);
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit (menu option 5).
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export the journal to a JSON file.
    pub fn export_state(&self, path: &std::path::Path) -> Result<()> {
        export::write_report(&self.journal, &self.source_description, path)
    }
}
