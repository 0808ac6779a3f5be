//! Add-expense dialog
//!
//! Modal form for entering a new expense: name, amount, and date, with tab
//! navigation and inline validation. Parse failures never reach the
//! tracker; they surface here as an error line.

use chrono::{Local, NaiveDate};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::Money;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Name,
    Amount,
    Date,
}

impl ExpenseField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Amount,
            Self::Amount => Self::Date,
            Self::Date => Self::Name,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Date,
            Self::Amount => Self::Name,
            Self::Date => Self::Amount,
        }
    }
}

/// State for the add-expense form dialog
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    /// Currently focused field
    pub focused_field: ExpenseField,

    /// Name input
    pub name_input: TextInput,

    /// Amount input
    pub amount_input: TextInput,

    /// Date input
    pub date_input: TextInput,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    /// Create a fresh form with the date pre-filled to today
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        let mut state = Self {
            focused_field: ExpenseField::Name,
            name_input: TextInput::new().label("Name").placeholder("Expense name"),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD")
                .content(today.format("%Y-%m-%d").to_string()),
            error_message: None,
        };
        state.update_focus();
        state
    }

    /// Reset to a fresh form (called after a successful add)
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.name_input.focused = self.focused_field == ExpenseField::Name;
        self.amount_input.focused = self.focused_field == ExpenseField::Amount;
        self.date_input.focused = self.focused_field == ExpenseField::Date;
    }

    /// Get the currently focused input
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            ExpenseField::Name => &mut self.name_input,
            ExpenseField::Amount => &mut self.amount_input,
            ExpenseField::Date => &mut self.date_input,
        }
    }

    /// Validate the form, producing the parsed expense input
    pub fn validate(&self) -> SpendlogResult<(String, Money, NaiveDate)> {
        let name = self.name_input.value().trim();
        if name.is_empty() {
            return Err(SpendlogError::validation("Please fill in the expense name"));
        }
        if self.amount_input.value().trim().is_empty() {
            return Err(SpendlogError::validation("Please fill in the amount"));
        }

        let amount = Money::parse(self.amount_input.value())?;
        let date = NaiveDate::parse_from_str(self.date_input.value().trim(), "%Y-%m-%d")?;

        Ok((name.to_string(), amount, date))
    }
}

/// Render the add-expense dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(44, 10, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Expense ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Date
            Constraint::Length(1), // spacer
            Constraint::Length(1), // error line
            Constraint::Length(1), // spacer
            Constraint::Length(1), // hints
        ])
        .split(inner);

    let form = &app.expense_form;
    frame.render_widget(&form.name_input, rows[0]);
    frame.render_widget(&form.amount_input, rows[1]);
    frame.render_widget(&form.date_input, rows[2]);

    if let Some(ref error) = form.error_message {
        let error_line = Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red));
        frame.render_widget(error_line, rows[4]);
    }

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next field  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), rows[6]);
}
