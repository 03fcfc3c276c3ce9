//! Error types for category-ledger
//!
//! Ledger operations only ever fail with [`LedgerError`]; everything around
//! them (configuration, storage, lookups by name) reports [`BudgetError`].

use thiserror::Error;

/// Failures of a single category ledger operation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    /// The debit would take the category below its current balance
    #[error("Insufficient funds in category '{category}': need {needed:.2}, have {available:.2}")]
    InsufficientFunds {
        category: String,
        needed: f64,
        available: f64,
    },

    /// Withdrawals and transfers need a finite, non-negative amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),
}

impl LedgerError {
    /// Check if this is an insufficient funds error
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::InsufficientFunds { .. })
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

/// The main error type for category-ledger operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Validation errors for user input and models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// A ledger operation was refused
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl BudgetError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for categories
    pub fn duplicate_category(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an insufficient funds error
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::Ledger(err) if err.is_insufficient_funds())
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for category-ledger operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_funds_display() {
        let err = LedgerError::InsufficientFunds {
            category: "Food".into(),
            needed: 50.0,
            available: 12.5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds in category 'Food': need 50.00, have 12.50"
        );
        assert!(err.is_insufficient_funds());
    }

    #[test]
    fn test_ledger_error_is_transparent() {
        let err: BudgetError = LedgerError::InvalidAmount(-3.0).into();
        assert_eq!(err.to_string(), "Invalid amount: -3");
        assert!(!err.is_insufficient_funds());
    }

    #[test]
    fn test_not_found_error() {
        let err = BudgetError::category_not_found("Clothing");
        assert_eq!(err.to_string(), "Category not found: Clothing");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BudgetError = io_err.into();
        assert!(matches!(err, BudgetError::Io(_)));
    }

    #[test]
    fn test_malformed_json_reports_as_storage_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = BudgetError::Storage(format!("Failed to parse budget.json: {}", parse_err));
        assert!(err.to_string().starts_with("Storage error: Failed to parse budget.json"));
        assert!(!err.is_not_found());
    }
}
