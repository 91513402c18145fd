//! Common UI components.
//!
//! This module contains the header bar, tab bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, View};
use crate::data::{Category, Summary};

/// Render the header bar with event totals.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let summary = Summary::of(&app.journal);

    let line = Line::from(vec![
        Span::styled(" LINKWATCH ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("| {} events ", summary.total)),
        Span::raw("| "),
        Span::styled(
            format!("{} connected", summary.connected),
            app.theme.category_style(Category::Connected),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("{} disconnected", summary.disconnected),
            app.theme.category_style(Category::Disconnected),
        ),
        Span::raw(format!(" | {}", app.source_description())),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the tab bar showing available views.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = vec![
        Line::from(" 1:All "),
        Line::from(" 2:Connected "),
        Line::from(" 2:Disconnected "),
    ];

    let selected = match app.current_view {
        View::All => 0,
        View::Connected => 1,
        View::Disconnected => 2,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Temporary status messages take precedence over the key hints.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let status = format!(
        " {} | 1:all 2:type 3:remove 4:count 5:quit | e:export ?:help",
        app.current_view.label()
    );
    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Menu",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  1           List all events"),
        Line::from("  2           Toggle connected/disconnected"),
        Line::from("  3 x Del     Remove selected event"),
        Line::from("  4           Count events"),
        Line::from("  5 q Esc     Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ←/→ h/l Tab Switch views"),
        Line::from("  ↑/↓ j/k     Navigate list"),
        Line::from("  PgUp/PgDn   Jump 10 items"),
        Line::from("  Home/End    Jump to first/last"),
        Line::from(""),
        Line::from("  e           Export to JSON"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    let help_width = 44u16.min(area.width.saturating_sub(4));
    let help_height = 22u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
