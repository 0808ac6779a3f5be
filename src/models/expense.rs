//! Expense model
//!
//! A single expense record: what was spent, how much, and on which day.
//! Identity is carried by [`ExpenseId`], never by field values - two
//! expenses with identical fields remain distinct entities.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// A single expense record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub name: String,

    /// Amount spent (sign unconstrained)
    pub amount: Money,

    /// Day the expense occurred
    pub date: NaiveDate,
}

impl Expense {
    /// Create a new expense with a fresh identity
    pub fn new(name: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
            date,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.name,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_expense() {
        let exp = Expense::new("Coffee", Money::from_cents(350), date(2024, 1, 1));
        assert_eq!(exp.name, "Coffee");
        assert_eq!(exp.amount, Money::from_cents(350));
        assert_eq!(exp.date, date(2024, 1, 1));
    }

    #[test]
    fn test_identical_fields_distinct_identity() {
        let a = Expense::new("Lunch", Money::from_cents(1200), date(2024, 1, 1));
        let b = Expense::new("Lunch", Money::from_cents(1200), date(2024, 1, 1));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_display() {
        let exp = Expense::new("Book", Money::from_cents(2000), date(2024, 1, 2));
        assert_eq!(format!("{}", exp), "2024-01-02 Book $20.00");
    }

    #[test]
    fn test_serialization() {
        let exp = Expense::new("Coffee", Money::from_cents(350), date(2024, 1, 1));
        let json = serde_json::to_string(&exp).unwrap();
        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(exp.id, deserialized.id);
        assert_eq!(exp.name, deserialized.name);
        assert_eq!(exp.amount, deserialized.amount);
        assert_eq!(exp.date, deserialized.date);
    }
}
