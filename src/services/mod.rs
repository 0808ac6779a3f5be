//! Service layer for spendlog
//!
//! Provides the tracker facade the UI talks to: selection state and the
//! recomputed view on top of the expense store.

pub mod tracker;

pub use tracker::{ExpenseTracker, Summary};
