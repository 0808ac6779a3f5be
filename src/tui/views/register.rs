//! Expense register view
//!
//! Shows the visible expenses - everything, or only those on the selected
//! date - as a table in store order.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::MainPanelLayout;

/// Render the expense register
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = MainPanelLayout::new(area);

    render_header(frame, app, layout.header);
    render_expense_table(frame, app, layout.content);
}

/// Render register header
fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let title = match app.tracker.selection() {
        Some(date) => format!(" Expenses for {} ", date.format("%Y-%m-%d")),
        None => " All Expenses ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new("a:Add  d:Delete  s:Sort dates  Enter:Filter  Esc:Show all")
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

/// Render the expense table
fn render_expense_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let expenses = app.tracker.visible_expenses();

    if expenses.is_empty() {
        let text = Paragraph::new("No expenses. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Min(20),    // Name
        Constraint::Length(12), // Amount
        Constraint::Length(12), // Date
    ];

    let header = Row::new(vec![
        Cell::from("Name").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let symbol = app.settings.currency_symbol.clone();
    let rows: Vec<Row> = expenses
        .iter()
        .map(|exp| {
            let amount_color = if exp.amount.is_negative() {
                Color::Red
            } else {
                Color::Green
            };

            Row::new(vec![
                Cell::from(exp.name.clone()).style(Style::default().fg(Color::White)),
                Cell::from(format!("{:>10}", exp.amount.format_with_symbol(&symbol)))
                    .style(Style::default().fg(amount_color)),
                Cell::from(exp.date.format("%Y-%m-%d").to_string())
                    .style(Style::default().fg(Color::White)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(Some(app.expense_cursor));

    frame.render_stateful_widget(table, area, &mut state);
}
