//! Expense tracker facade
//!
//! Owns the expense store plus the current date selection, and caches the
//! view the UI renders from: the visible expense identities and the
//! summary. The view is recomputed synchronously inside every mutating
//! call, so callers never observe a stale selection or a partially
//! updated state between two calls.

use chrono::NaiveDate;

use crate::error::SpendlogResult;
use crate::models::{Expense, ExpenseId, Money};
use crate::store::{ExpenseStore, SortDirection};

/// Aggregate shown for the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Summary {
    /// No date selected - a neutral marker, not a zero total
    #[default]
    None,
    /// Total spent on the selected date
    Total { date: NaiveDate, amount: Money },
}

/// Facade over the store, the selection, and the recomputed view
#[derive(Debug, Default)]
pub struct ExpenseTracker {
    store: ExpenseStore,
    selection: Option<NaiveDate>,
    visible: Vec<ExpenseId>,
    summary: Summary,
}

impl ExpenseTracker {
    /// Create an empty tracker with no selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tracker with an explicit initial date ordering
    pub fn with_sort_direction(direction: SortDirection) -> Self {
        Self {
            store: ExpenseStore::with_sort_direction(direction),
            ..Self::default()
        }
    }

    /// Validate and append a new expense, returning its identity
    ///
    /// Nothing is mutated when validation fails.
    pub fn add_expense(
        &mut self,
        name: &str,
        amount: Money,
        date: NaiveDate,
    ) -> SpendlogResult<ExpenseId> {
        let id = self.store.add(name, amount, date)?;
        self.recompute();
        Ok(id)
    }

    /// Remove exactly one expense by identity; `false` when absent
    pub fn remove_expense(&mut self, id: ExpenseId) -> bool {
        if !self.store.remove(id) {
            return false;
        }
        self.reconcile_selection();
        self.recompute();
        true
    }

    /// Remove every expense on `date`, returning how many were removed
    ///
    /// Callers are expected to have obtained user confirmation before
    /// invoking a date-wide removal.
    pub fn remove_all_for_date(&mut self, date: NaiveDate) -> usize {
        let count = self.store.remove_by_date(date);
        self.reconcile_selection();
        self.recompute();
        count
    }

    /// Select a date to filter by, or `None` to show everything
    ///
    /// A date with no expenses behaves like `None`.
    pub fn set_selection(&mut self, date: Option<NaiveDate>) {
        self.selection = date.filter(|d| self.store.has_date(*d));
        self.recompute();
    }

    /// The currently selected date, if any
    pub fn selection(&self) -> Option<NaiveDate> {
        self.selection
    }

    /// Flip the date ordering and re-sort the index
    pub fn toggle_date_sort_direction(&mut self) {
        self.store.toggle_sort_direction();
        self.recompute();
    }

    /// The expenses visible under the current selection, in store order
    pub fn visible_expenses(&self) -> Vec<&Expense> {
        self.visible
            .iter()
            .filter_map(|id| self.store.get(*id))
            .collect()
    }

    /// The summary for the current selection
    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// The distinct dates, sorted per the current direction
    pub fn sorted_dates(&self) -> &[NaiveDate] {
        self.store.sorted_dates()
    }

    /// Current date ordering
    pub fn sort_direction(&self) -> SortDirection {
        self.store.sort_direction()
    }

    /// Look up an expense by identity
    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.store.get(id)
    }

    /// Number of stored expenses
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the tracker holds no expenses
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Drop a selection whose date left the index. Runs inside every
    /// removing call so a stale selection is never observable.
    fn reconcile_selection(&mut self) {
        if let Some(d) = self.selection {
            if !self.store.has_date(d) {
                self.selection = None;
            }
        }
    }

    fn recompute(&mut self) {
        self.visible = self
            .store
            .expenses_for_date(self.selection)
            .iter()
            .map(|e| e.id)
            .collect();
        self.summary = match self.selection {
            Some(date) => Summary::Total {
                date,
                amount: self.store.total_for_date(Some(date)),
            },
            None => Summary::None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Coffee 3.50 and Lunch 12.00 on Jan 1, Book 20.00 on Jan 2
    fn sample_tracker() -> ExpenseTracker {
        let mut tracker = ExpenseTracker::new();
        tracker
            .add_expense("Coffee", Money::from_cents(350), date(2024, 1, 1))
            .unwrap();
        tracker
            .add_expense("Lunch", Money::from_cents(1200), date(2024, 1, 1))
            .unwrap();
        tracker
            .add_expense("Book", Money::from_cents(2000), date(2024, 1, 2))
            .unwrap();
        tracker
    }

    #[test]
    fn test_dates_sorted_ascending_by_default() {
        let tracker = sample_tracker();
        assert_eq!(
            tracker.sorted_dates(),
            &[date(2024, 1, 1), date(2024, 1, 2)]
        );
    }

    #[test]
    fn test_no_selection_shows_everything() {
        let tracker = sample_tracker();
        assert_eq!(tracker.summary(), Summary::None);

        let names: Vec<_> = tracker
            .visible_expenses()
            .iter()
            .map(|e| e.name.clone())
            .collect();
        assert_eq!(names, ["Coffee", "Lunch", "Book"]);
    }

    #[test]
    fn test_selecting_a_date_filters_and_totals() {
        let mut tracker = sample_tracker();
        tracker.set_selection(Some(date(2024, 1, 1)));

        assert_eq!(tracker.visible_expenses().len(), 2);
        assert_eq!(
            tracker.summary(),
            Summary::Total {
                date: date(2024, 1, 1),
                amount: Money::from_cents(1550),
            }
        );
    }

    #[test]
    fn test_toggle_sort_direction_reverses_dates() {
        let mut tracker = sample_tracker();
        tracker.toggle_date_sort_direction();
        assert_eq!(
            tracker.sorted_dates(),
            &[date(2024, 1, 2), date(2024, 1, 1)]
        );
    }

    #[test]
    fn test_removing_last_expense_on_date_drops_it_from_index() {
        let mut tracker = sample_tracker();
        let book = tracker.visible_expenses()[2].id;

        assert!(tracker.remove_expense(book));
        assert_eq!(tracker.sorted_dates(), &[date(2024, 1, 1)]);
    }

    #[test]
    fn test_removing_selected_dates_last_expense_clears_selection() {
        let mut tracker = sample_tracker();
        tracker.set_selection(Some(date(2024, 1, 2)));
        let book = tracker.visible_expenses()[0].id;

        assert!(tracker.remove_expense(book));

        // Selection cleared atomically with the deletion
        assert_eq!(tracker.selection(), None);
        assert_eq!(tracker.summary(), Summary::None);
        assert_eq!(tracker.visible_expenses().len(), 2);
    }

    #[test]
    fn test_removing_one_of_several_keeps_selection_and_updates_total() {
        let mut tracker = sample_tracker();
        tracker.set_selection(Some(date(2024, 1, 1)));
        let coffee = tracker.visible_expenses()[0].id;

        assert!(tracker.remove_expense(coffee));

        assert_eq!(tracker.selection(), Some(date(2024, 1, 1)));
        assert_eq!(
            tracker.summary(),
            Summary::Total {
                date: date(2024, 1, 1),
                amount: Money::from_cents(1200),
            }
        );
    }

    #[test]
    fn test_remove_all_for_date_is_idempotent() {
        let mut tracker = sample_tracker();
        tracker.set_selection(Some(date(2024, 1, 1)));

        assert_eq!(tracker.remove_all_for_date(date(2024, 1, 1)), 2);
        assert_eq!(tracker.selection(), None);
        assert!(!tracker.sorted_dates().contains(&date(2024, 1, 1)));

        assert_eq!(tracker.remove_all_for_date(date(2024, 1, 1)), 0);
        assert!(!tracker.sorted_dates().contains(&date(2024, 1, 1)));
    }

    #[test]
    fn test_adding_to_selected_date_refreshes_total() {
        let mut tracker = sample_tracker();
        tracker.set_selection(Some(date(2024, 1, 1)));

        tracker
            .add_expense("Tea", Money::from_cents(250), date(2024, 1, 1))
            .unwrap();

        assert_eq!(tracker.visible_expenses().len(), 3);
        assert_eq!(
            tracker.summary(),
            Summary::Total {
                date: date(2024, 1, 1),
                amount: Money::from_cents(1800),
            }
        );
    }

    #[test]
    fn test_adding_other_date_keeps_filter() {
        let mut tracker = sample_tracker();
        tracker.set_selection(Some(date(2024, 1, 2)));

        tracker
            .add_expense("Tea", Money::from_cents(250), date(2024, 1, 3))
            .unwrap();

        // Still filtered to Jan 2
        assert_eq!(tracker.visible_expenses().len(), 1);
        assert_eq!(
            tracker.sorted_dates(),
            &[date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)]
        );
    }

    #[test]
    fn test_selecting_unknown_date_behaves_like_none() {
        let mut tracker = sample_tracker();
        tracker.set_selection(Some(date(2030, 6, 1)));

        assert_eq!(tracker.selection(), None);
        assert_eq!(tracker.summary(), Summary::None);
        assert_eq!(tracker.visible_expenses().len(), 3);
    }

    #[test]
    fn test_failed_add_leaves_view_untouched() {
        let mut tracker = sample_tracker();
        let err = tracker
            .add_expense("", Money::from_cents(500), date(2024, 1, 5))
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(tracker.visible_expenses().len(), 3);
        assert_eq!(tracker.sorted_dates(), &[date(2024, 1, 1), date(2024, 1, 2)]);
    }

    #[test]
    fn test_descending_start_direction() {
        let mut tracker = ExpenseTracker::with_sort_direction(SortDirection::Descending);
        tracker
            .add_expense("Coffee", Money::from_cents(350), date(2024, 1, 1))
            .unwrap();
        tracker
            .add_expense("Book", Money::from_cents(2000), date(2024, 1, 2))
            .unwrap();

        assert_eq!(
            tracker.sorted_dates(),
            &[date(2024, 1, 2), date(2024, 1, 1)]
        );
    }
}
