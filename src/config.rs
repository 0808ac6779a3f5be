//! Launch-time settings
//!
//! The tracker is in-memory and process-lifetime only, so there are no
//! configuration files; everything configurable arrives as a command-line
//! flag and is carried in a [`Settings`] value.

use crate::store::SortDirection;

/// Options collected from the command line at launch
#[derive(Debug, Clone)]
pub struct Settings {
    /// Currency symbol rendered before amounts
    pub currency_symbol: String,

    /// Initial ordering of the date sidebar
    pub initial_sort: SortDirection,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            initial_sort: SortDirection::Ascending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.initial_sort, SortDirection::Ascending);
    }
}
