//! Sidebar view
//!
//! Shows the distinct expense dates, sorted per the current direction,
//! with the applied date filter marked.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::store::SortDirection;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::SidebarLayout;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = SidebarLayout::new(area);

    render_header(frame, layout.header);
    render_dates(frame, app, layout.dates);
}

/// Render sidebar header
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" spendlog ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let version = Paragraph::new(concat!("v", env!("CARGO_PKG_VERSION")))
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(version, area);
}

/// Render the date list
fn render_dates(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Sidebar;

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let arrow = match app.tracker.sort_direction() {
        SortDirection::Ascending => "↑",
        SortDirection::Descending => "↓",
    };

    let block = Block::default()
        .title(format!(" Dates {} ", arrow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let dates = app.tracker.sorted_dates();

    if dates.is_empty() {
        let text = Paragraph::new("No dates yet")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let selection = app.tracker.selection();
    let items: Vec<ListItem> = dates
        .iter()
        .map(|date| {
            let is_selected = selection == Some(*date);
            let marker = if is_selected { "▶ " } else { "  " };
            let date_style = if is_selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(date.format("%Y-%m-%d").to_string(), date_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.date_cursor));

    frame.render_stateful_widget(list, area, &mut state);
}
