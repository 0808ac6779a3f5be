//! Help dialog
//!
//! Lists the keybindings.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;

const BINDINGS: &[(&str, &str)] = &[
    ("a", "Add an expense"),
    ("d / Del", "Delete (expense under cursor, or selected date)"),
    ("s", "Toggle date sort direction"),
    ("Enter", "Filter by the date under the cursor"),
    ("Esc", "Clear the date filter"),
    ("Tab", "Switch between date list and expense table"),
    ("j/k, arrows", "Move the cursor"),
    ("?", "This help"),
    ("q", "Quit"),
];

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let height = BINDINGS.len() as u16 + 4;
    let area = centered_rect_fixed(58, height, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![Line::from("")];
    for (key, action) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<12}", key), Style::default().fg(Color::Yellow)),
            Span::styled(*action, Style::default().fg(Color::White)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
