//! Event table rendering.
//!
//! Shows the events of the current view in journal order.

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::App;

/// Render the event table for the current view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let events = app.visible_events();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    if events.is_empty() {
        let message = if app.journal.is_empty() {
            "No events recorded."
        } else {
            "No events of this type."
        };
        let block = block.title(format!(" {} (0) ", app.current_view.label()));
        frame.render_widget(Paragraph::new(message).block(block), area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Code"),
        Cell::from("Timestamp"),
        Cell::from("Type"),
    ])
    .height(1)
    .style(app.theme.header);

    let rows: Vec<Row> = events
        .iter()
        .map(|e| {
            Row::new(vec![
                Cell::from(e.id.to_string()),
                Cell::from(e.timestamp.clone()),
                Cell::from(e.category.label()).style(app.theme.category_style(e.category)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(8),
        Constraint::Fill(2),
        Constraint::Fill(1),
    ];

    let selected = app.selected_index.min(events.len() - 1);
    let title = format!(
        " {} ({}/{}) [{}/{}] ",
        app.current_view.label(),
        events.len(),
        app.journal.count(),
        selected + 1,
        events.len()
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(block.title(title))
        .row_highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(selected));

    frame.render_stateful_widget(table, area, &mut state);
}
