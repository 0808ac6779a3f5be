//! In-memory expense store
//!
//! Owns the ordered collection of expense records and keeps the derived
//! [`DateIndex`] consistent on every mutation. Insertion order is
//! preserved and duplicates by value are permitted; only the [`ExpenseId`]
//! distinguishes records.

pub mod date_index;

pub use date_index::{DateIndex, SortDirection};

use chrono::NaiveDate;

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Expense, ExpenseId, Money};

/// Insertion-ordered collection of expenses with a derived date index
#[derive(Debug, Default)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    dates: DateIndex,
}

impl ExpenseStore {
    /// Create an empty store with the dates sorted ascending
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with an explicit initial sort direction
    pub fn with_sort_direction(direction: SortDirection) -> Self {
        Self {
            expenses: Vec::new(),
            dates: DateIndex::with_direction(direction),
        }
    }

    /// Validate and append a new expense, returning its identity
    ///
    /// The name is trimmed; an empty result is rejected without mutating
    /// any state. The expense's date is inserted into the index if new.
    pub fn add(&mut self, name: &str, amount: Money, date: NaiveDate) -> SpendlogResult<ExpenseId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SpendlogError::validation("Expense name cannot be empty"));
        }

        let expense = Expense::new(name, amount, date);
        let id = expense.id;
        self.expenses.push(expense);
        self.dates.insert(date);
        Ok(id)
    }

    /// Remove exactly one expense by identity; `false` when absent
    ///
    /// When the removed expense was the last one on its date, the date
    /// leaves the index as well.
    pub fn remove(&mut self, id: ExpenseId) -> bool {
        let Some(pos) = self.expenses.iter().position(|e| e.id == id) else {
            return false;
        };

        let removed = self.expenses.remove(pos);
        if !self.expenses.iter().any(|e| e.date == removed.date) {
            self.dates.remove(removed.date);
        }
        true
    }

    /// Remove every expense on `date`, returning how many were removed
    ///
    /// The date always leaves the index afterward; a count of zero means
    /// it was already absent, which is a no-op rather than an error.
    pub fn remove_by_date(&mut self, date: NaiveDate) -> usize {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.date != date);
        self.dates.remove(date);
        before - self.expenses.len()
    }

    /// Look up an expense by identity
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Expenses matching `date`, or all expenses for `None`, in insertion
    /// order either way
    pub fn expenses_for_date(&self, date: Option<NaiveDate>) -> Vec<&Expense> {
        match date {
            Some(d) => self.expenses.iter().filter(|e| e.date == d).collect(),
            None => self.expenses.iter().collect(),
        }
    }

    /// Sum of amounts over `expenses_for_date`; zero for an empty result
    pub fn total_for_date(&self, date: Option<NaiveDate>) -> Money {
        self.expenses_for_date(date)
            .into_iter()
            .map(|e| e.amount)
            .sum()
    }

    /// Whether at least one expense carries `date`
    pub fn has_date(&self, date: NaiveDate) -> bool {
        self.dates.contains(date)
    }

    /// Flip the date ordering and re-sort the index
    pub fn toggle_sort_direction(&mut self) {
        self.dates.toggle_direction();
    }

    /// The distinct dates, sorted per the current direction
    pub fn sorted_dates(&self) -> &[NaiveDate] {
        self.dates.dates()
    }

    /// Current date ordering
    pub fn sort_direction(&self) -> SortDirection {
        self.dates.direction()
    }

    /// Number of stored expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the store holds no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
