//! Custom error types for spendlog
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::money::MoneyParseError;

/// The main error type for spendlog operations
#[derive(Error, Debug)]
pub enum SpendlogError {
    /// Validation errors for expense input
    #[error("Validation error: {0}")]
    Validation(String),
}

impl SpendlogError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Parse failures from the input boundary all surface as validation errors.

impl From<MoneyParseError> for SpendlogError {
    fn from(err: MoneyParseError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<chrono::ParseError> for SpendlogError {
    fn from(err: chrono::ParseError) -> Self {
        Self::Validation(format!("Invalid date: {}", err))
    }
}

/// Result type alias for spendlog operations
pub type SpendlogResult<T> = Result<T, SpendlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpendlogError::validation("expense name cannot be empty");
        assert_eq!(
            err.to_string(),
            "Validation error: expense name cannot be empty"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_money_parse_error() {
        let parse_err = MoneyParseError::InvalidFormat("abc".into());
        let err: SpendlogError = parse_err.into();
        assert!(err.is_validation());
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_from_date_parse_error() {
        let parse_err = chrono::NaiveDate::parse_from_str("not-a-date", "%Y-%m-%d").unwrap_err();
        let err: SpendlogError = parse_err.into();
        assert!(err.is_validation());
        assert!(err.to_string().starts_with("Validation error: Invalid date"));
    }
}
