//! Terminal User Interface module
//!
//! This module provides the interactive front end for spendlog using
//! ratatui: a sidebar listing the distinct expense dates, a table of the
//! visible expenses, a status bar with the per-date summary, and dialogs
//! for data entry and confirmation.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
