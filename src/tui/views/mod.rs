//! TUI Views module
//!
//! Contains the sidebar (date list), the expense register, and the status
//! bar, plus the dialog dispatch.

pub mod register;
pub mod sidebar;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);
    register::render(frame, app, layout.main);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render the active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::AddExpense => {
            dialogs::expense::render(frame, app);
        }
        ActiveDialog::ConfirmDeleteDate(date) => {
            dialogs::confirm::render(frame, date);
        }
        ActiveDialog::Help => {
            dialogs::help::render(frame);
        }
        ActiveDialog::None => {}
    }
}
