//! Application state for the TUI
//!
//! The App struct holds the tracker plus everything needed for rendering
//! and handling events: panel focus, cursors, the active dialog, and the
//! add-expense form state.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::ExpenseId;
use crate::services::ExpenseTracker;

use super::dialogs::expense::ExpenseFormState;

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Sidebar,
    Main,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    /// Confirmation gate for deleting every expense on a date
    ConfirmDeleteDate(NaiveDate),
    Help,
}

/// Main application state
pub struct App {
    /// The expense tracker core
    pub tracker: ExpenseTracker,

    /// Launch-time settings
    pub settings: Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Cursor position in the sidebar date list
    pub date_cursor: usize,

    /// Cursor position in the expense table
    pub expense_cursor: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Add-expense form state
    pub expense_form: ExpenseFormState,
}

impl App {
    /// Create a new App instance
    pub fn new(settings: Settings) -> Self {
        Self {
            tracker: ExpenseTracker::with_sort_direction(settings.initial_sort),
            settings,
            should_quit: false,
            focused_panel: FocusedPanel::default(),
            active_dialog: ActiveDialog::default(),
            date_cursor: 0,
            expense_cursor: 0,
            status_message: None,
            expense_form: ExpenseFormState::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Whether a dialog is currently open
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the active dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Switch focus between sidebar and main panel
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
    }

    /// The date under the sidebar cursor, if any
    pub fn date_under_cursor(&self) -> Option<NaiveDate> {
        self.tracker.sorted_dates().get(self.date_cursor).copied()
    }

    /// The expense under the table cursor, if any
    pub fn expense_under_cursor(&self) -> Option<ExpenseId> {
        self.tracker
            .visible_expenses()
            .get(self.expense_cursor)
            .map(|e| e.id)
    }

    /// Keep both cursors inside the (possibly shrunken) lists
    pub fn clamp_cursors(&mut self) {
        let dates = self.tracker.sorted_dates().len();
        if self.date_cursor >= dates {
            self.date_cursor = dates.saturating_sub(1);
        }
        let visible = self.tracker.visible_expenses().len();
        if self.expense_cursor >= visible {
            self.expense_cursor = visible.saturating_sub(1);
        }
    }
}
