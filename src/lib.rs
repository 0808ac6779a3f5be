//! spendlog - terminal-based expense tracker
//!
//! This library provides the core functionality for the spendlog
//! application: an in-memory store of expense records, a derived index of
//! the distinct dates they fall on, and a selection-driven view that
//! filters and totals spending per date.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Launch-time settings
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, identifiers)
//! - `store`: The in-memory expense store and its date index
//! - `services`: The tracker facade the UI talks to
//! - `tui`: The ratatui terminal interface
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use spendlog::models::Money;
//! use spendlog::services::ExpenseTracker;
//!
//! let mut tracker = ExpenseTracker::new();
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! tracker.add_expense("Coffee", Money::from_cents(350), date).unwrap();
//! tracker.set_selection(Some(date));
//! assert_eq!(tracker.visible_expenses().len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod tui;

pub use error::SpendlogError;
