//! Event handler for the TUI
//!
//! Routes keyboard events based on the current application state and
//! implements the deletion precedence: a targeted expense wins over the
//! selected date, a date-wide delete is gated behind the confirmation
//! dialog, and with nothing targeted the request only produces a prompt.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActiveDialog, App, FocusedPanel};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }
    handle_normal_key(app, key)
}

/// Handle keys in normal (no dialog) mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),

        // Help
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        // Add expense
        KeyCode::Char('a') => {
            app.expense_form.reset();
            app.open_dialog(ActiveDialog::AddExpense);
        }

        // Toggle date ordering
        KeyCode::Char('s') => toggle_sort(app),

        // Delete (precedence handled below)
        KeyCode::Char('d') | KeyCode::Delete => handle_delete_request(app),

        // Clear the date filter
        KeyCode::Esc => {
            app.tracker.set_selection(None);
            app.clamp_cursors();
            app.clear_status();
        }

        // Panel navigation
        KeyCode::Tab => app.toggle_panel_focus(),
        KeyCode::Char('h') | KeyCode::Left => app.focused_panel = FocusedPanel::Sidebar,
        KeyCode::Char('l') | KeyCode::Right => app.focused_panel = FocusedPanel::Main,

        // Cursor movement
        KeyCode::Char('j') | KeyCode::Down => move_cursor_down(app),
        KeyCode::Char('k') | KeyCode::Up => move_cursor_up(app),

        // Apply the date under the cursor as the filter
        KeyCode::Enter => {
            if app.focused_panel == FocusedPanel::Sidebar {
                if let Some(date) = app.date_under_cursor() {
                    app.tracker.set_selection(Some(date));
                    app.expense_cursor = 0;
                    app.clear_status();
                }
            }
        }

        _ => {}
    }
    Ok(())
}

/// Deletion precedence: targeted expense, then selected date, then prompt
fn handle_delete_request(app: &mut App) {
    if app.focused_panel == FocusedPanel::Main {
        if let Some(id) = app.expense_under_cursor() {
            let name = app
                .tracker
                .expense(id)
                .map(|e| e.name.clone())
                .unwrap_or_default();
            app.tracker.remove_expense(id);
            app.clamp_cursors();
            app.set_status(format!("Deleted {}", name));
            return;
        }
    }

    if let Some(date) = app.tracker.selection() {
        // Date-wide removal only happens after explicit confirmation
        app.open_dialog(ActiveDialog::ConfirmDeleteDate(date));
    } else {
        app.set_status("Select an expense or a date to delete");
    }
}

/// Toggle the sort direction, keeping the cursor on the same date
fn toggle_sort(app: &mut App) {
    let current = app.date_under_cursor();
    app.tracker.toggle_date_sort_direction();
    if let Some(date) = current {
        if let Some(pos) = app.tracker.sorted_dates().iter().position(|d| *d == date) {
            app.date_cursor = pos;
        }
    }
}

fn move_cursor_down(app: &mut App) {
    match app.focused_panel {
        FocusedPanel::Sidebar => {
            let count = app.tracker.sorted_dates().len();
            if app.date_cursor + 1 < count {
                app.date_cursor += 1;
            }
        }
        FocusedPanel::Main => {
            let count = app.tracker.visible_expenses().len();
            if app.expense_cursor + 1 < count {
                app.expense_cursor += 1;
            }
        }
    }
}

fn move_cursor_up(app: &mut App) {
    match app.focused_panel {
        FocusedPanel::Sidebar => app.date_cursor = app.date_cursor.saturating_sub(1),
        FocusedPanel::Main => app.expense_cursor = app.expense_cursor.saturating_sub(1),
    }
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog.clone() {
        ActiveDialog::AddExpense => handle_expense_form_key(app, key),
        ActiveDialog::ConfirmDeleteDate(date) => {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    app.tracker.remove_all_for_date(date);
                    app.clamp_cursors();
                    app.close_dialog();
                    app.set_status(format!(
                        "Deleted all expenses for {}",
                        date.format("%Y-%m-%d")
                    ));
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
                _ => {}
            }
            Ok(())
        }
        ActiveDialog::Help => {
            app.close_dialog();
            Ok(())
        }
        ActiveDialog::None => Ok(()),
    }
}

/// Handle keys in the add-expense form
fn handle_expense_form_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab | KeyCode::Down => app.expense_form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.expense_form.prev_field(),
        KeyCode::Enter => submit_expense_form(app),
        KeyCode::Backspace => app.expense_form.focused_input().backspace(),
        KeyCode::Delete => app.expense_form.focused_input().delete(),
        KeyCode::Left => app.expense_form.focused_input().move_left(),
        KeyCode::Right => app.expense_form.focused_input().move_right(),
        KeyCode::Home => app.expense_form.focused_input().move_start(),
        KeyCode::End => app.expense_form.focused_input().move_end(),
        KeyCode::Char(c) => app.expense_form.focused_input().insert(c),
        _ => {}
    }
    Ok(())
}

/// Validate the form and hand the parsed expense to the tracker
fn submit_expense_form(app: &mut App) {
    let parsed = app.expense_form.validate();
    match parsed {
        Ok((name, amount, date)) => match app.tracker.add_expense(&name, amount, date) {
            Ok(_) => {
                app.close_dialog();
                app.expense_form.reset();
                app.set_status(format!("Added {}", name));
            }
            Err(err) => app.expense_form.error_message = Some(err.to_string()),
        },
        Err(err) => app.expense_form.error_message = Some(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn key(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::from(code))).unwrap();
    }

    fn sample_app() -> App {
        let mut app = App::new(Settings::default());
        app.tracker
            .add_expense("Coffee", Money::from_cents(350), date(2024, 1, 1))
            .unwrap();
        app.tracker
            .add_expense("Book", Money::from_cents(2000), date(2024, 1, 2))
            .unwrap();
        app
    }

    #[test]
    fn test_delete_prefers_targeted_expense_over_selected_date() {
        let mut app = sample_app();
        app.tracker.set_selection(Some(date(2024, 1, 1)));
        app.focused_panel = FocusedPanel::Main;
        app.expense_cursor = 0;

        key(&mut app, KeyCode::Char('d'));

        // The targeted expense went away directly, without the confirm
        // dialog, and the now-empty date left the index and the selection.
        assert!(!app.has_dialog());
        assert_eq!(app.tracker.len(), 1);
        assert_eq!(app.tracker.selection(), None);
    }

    #[test]
    fn test_delete_with_selected_date_asks_for_confirmation() {
        let mut app = sample_app();
        app.tracker.set_selection(Some(date(2024, 1, 1)));
        app.focused_panel = FocusedPanel::Sidebar;

        key(&mut app, KeyCode::Char('d'));
        assert_eq!(
            app.active_dialog,
            ActiveDialog::ConfirmDeleteDate(date(2024, 1, 1))
        );
        // Nothing removed until confirmed
        assert_eq!(app.tracker.len(), 2);

        key(&mut app, KeyCode::Char('y'));
        assert!(!app.has_dialog());
        assert_eq!(app.tracker.len(), 1);
        assert!(!app.tracker.sorted_dates().contains(&date(2024, 1, 1)));
    }

    #[test]
    fn test_delete_declined_leaves_everything_in_place() {
        let mut app = sample_app();
        app.tracker.set_selection(Some(date(2024, 1, 1)));
        app.focused_panel = FocusedPanel::Sidebar;

        key(&mut app, KeyCode::Char('d'));
        key(&mut app, KeyCode::Char('n'));

        assert!(!app.has_dialog());
        assert_eq!(app.tracker.len(), 2);
        assert_eq!(app.tracker.selection(), Some(date(2024, 1, 1)));
    }

    #[test]
    fn test_delete_with_no_target_is_a_noop_with_prompt() {
        let mut app = sample_app();
        app.focused_panel = FocusedPanel::Sidebar;

        key(&mut app, KeyCode::Char('d'));

        assert!(!app.has_dialog());
        assert_eq!(app.tracker.len(), 2);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Select an expense or a date to delete")
        );
    }

    #[test]
    fn test_enter_on_sidebar_applies_filter() {
        let mut app = sample_app();
        app.focused_panel = FocusedPanel::Sidebar;
        app.date_cursor = 1;

        key(&mut app, KeyCode::Enter);
        assert_eq!(app.tracker.selection(), Some(date(2024, 1, 2)));

        key(&mut app, KeyCode::Esc);
        assert_eq!(app.tracker.selection(), None);
    }

    #[test]
    fn test_sort_toggle_follows_cursor_date() {
        let mut app = sample_app();
        app.date_cursor = 0; // 2024-01-01 ascending

        key(&mut app, KeyCode::Char('s'));

        // Descending now lists 2024-01-02 first; the cursor follows
        assert_eq!(app.date_cursor, 1);
        assert_eq!(app.date_under_cursor(), Some(date(2024, 1, 1)));
    }

    #[test]
    fn test_add_dialog_roundtrip() {
        let mut app = sample_app();
        key(&mut app, KeyCode::Char('a'));
        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);

        for c in "Tea".chars() {
            key(&mut app, KeyCode::Char(c));
        }
        key(&mut app, KeyCode::Tab);
        for c in "2.50".chars() {
            key(&mut app, KeyCode::Char(c));
        }
        key(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        assert_eq!(app.tracker.len(), 3);
        assert_eq!(app.status_message.as_deref(), Some("Added Tea"));
    }

    #[test]
    fn test_add_dialog_reports_validation_error() {
        let mut app = sample_app();
        key(&mut app, KeyCode::Char('a'));

        // Submit with the name still empty
        key(&mut app, KeyCode::Enter);

        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);
        assert!(app.expense_form.error_message.is_some());
        assert_eq!(app.tracker.len(), 2);
    }

    #[test]
    fn test_quit() {
        let mut app = sample_app();
        key(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
