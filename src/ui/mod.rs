//! Terminal UI rendering using ratatui.
//!
//! ## Submodules
//!
//! - [`journal`]: Table of events for the current view
//! - [`common`]: Shared components (header, tabs, status bar, help overlay)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Rendering Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├──────────────────────────────────────┤
//! │ Tabs (common::render_tabs)           │
//! ├──────────────────────────────────────┤
//! │                                      │
//! │ Event table (journal::render)        │
//! │                                      │
//! ├──────────────────────────────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    Overlay rendered on top:
//!    - common::render_help
//! ```

pub mod common;
pub mod journal;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Minimum terminal size for usable display.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 10;

/// Draw one full frame.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        let centered = Rect::new(
            0,
            (area.height / 2).saturating_sub(2),
            area.width,
            5u16.min(area.height),
        );
        frame.render_widget(paragraph, centered);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Length(1), // Tabs
        Constraint::Min(6),    // Event table
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    common::render_header(frame, app, chunks[0]);
    common::render_tabs(frame, app, chunks[1]);
    journal::render(frame, app, chunks[2]);
    common::render_status_bar(frame, app, chunks[3]);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Category, Journal};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        let mut journal = Journal::new();
        journal.append("Oct 19 10:00:01", Category::Connected);
        journal.append("Oct 19 10:05:12", Category::Disconnected);
        App::new(journal, "file: syslog", Theme::dark())
    }

    #[test]
    fn test_render_lists_events() {
        let text = screen(&app(), 100, 20);
        assert!(text.contains("LINKWATCH"));
        assert!(text.contains("Oct 19 10:00:01"));
        assert!(text.contains("DISCONNECTED"));
        assert!(text.contains("1:All"));
    }

    #[test]
    fn test_render_filtered_view() {
        let mut app = app();
        app.set_view(crate::app::View::Disconnected);
        let text = screen(&app, 100, 20);
        assert!(text.contains("Oct 19 10:05:12"));
        assert!(!text.contains("Oct 19 10:00:01"));
    }

    #[test]
    fn test_render_help_overlay() {
        let mut app = app();
        app.toggle_help();
        let text = screen(&app, 100, 30);
        assert!(text.contains("Keyboard Shortcuts"));
    }

    #[test]
    fn test_render_too_small() {
        let text = screen(&app(), 40, 8);
        assert!(text.contains("Terminal too small"));
    }
}
