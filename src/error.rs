//! Custom error types for Pocket Budget
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. None of these errors is fatal to a
//! session: every failure path leaves the budget state as it was.

use thiserror::Error;

/// The main error type for Pocket Budget operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Invalid income or transaction fields
    #[error("Validation error: {0}")]
    Validation(String),

    /// Transaction index outside the current list
    #[error("No transaction at index {index} (have {len})")]
    Index { index: i64, len: usize },

    /// The currency catalog could not be fetched or parsed
    #[error("Currency catalog error: {0}")]
    CatalogLoad(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Persistence adapter errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl BudgetError {
    /// Create an index error for a delete outside `0..len`
    pub fn index_out_of_range(index: i64, len: usize) -> Self {
        Self::Index { index, len }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an index error
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index { .. })
    }

    /// Check if this is a catalog load error
    pub fn is_catalog_load(&self) -> bool {
        matches!(self, Self::CatalogLoad(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Pocket Budget operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetError::Validation("income must be a number".into());
        assert_eq!(err.to_string(), "Validation error: income must be a number");
        assert!(err.is_validation());
    }

    #[test]
    fn test_index_error() {
        let err = BudgetError::index_out_of_range(-1, 3);
        assert_eq!(err.to_string(), "No transaction at index -1 (have 3)");
        assert!(err.is_index());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let budget_err: BudgetError = io_err.into();
        assert!(matches!(budget_err, BudgetError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let budget_err: BudgetError = json_err.into();
        assert!(matches!(budget_err, BudgetError::Json(_)));
    }
}
