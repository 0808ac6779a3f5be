//! Core data models for spendlog
//!
//! This module contains the data structures that represent the expense
//! tracking domain: expenses, money amounts, and entity identifiers.

pub mod expense;
pub mod ids;
pub mod money;

pub use expense::Expense;
pub use ids::ExpenseId;
pub use money::Money;
