//! Status bar view
//!
//! Shows the per-date spending summary, transient status messages, and
//! key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::services::Summary;
use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![Span::raw(" ")];

    match app.tracker.summary() {
        Summary::None => {
            spans.push(Span::styled(
                "Select a date to see total spending",
                Style::default().fg(Color::DarkGray),
            ));
        }
        Summary::Total { date, amount } => {
            spans.push(Span::styled(
                format!("Total spent on {}: ", date.format("%Y-%m-%d")),
                Style::default().fg(Color::White),
            ));
            let total_color = if amount.is_negative() {
                Color::Red
            } else {
                Color::Green
            };
            spans.push(Span::styled(
                amount.format_with_symbol(&app.settings.currency_symbol),
                Style::default()
                    .fg(total_color)
                    .add_modifier(Modifier::BOLD),
            ));
        }
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = " q:Quit  ?:Help  Tab:Panels ";
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}
