//! Custom error types for daybudget
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::{AccountKind, Money};

/// The main error type for daybudget operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// A required positive amount was missing, zero, negative or unparseable
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The source account cannot cover the requested movement
    #[error("Insufficient balance in {account} account: need {needed}, have {available}")]
    InsufficientBalance {
        account: AccountKind,
        needed: Money,
        available: Money,
    },

    /// The ledger has not been set up yet
    #[error("Ledger is not initialized. Run 'daybudget init <main> <daily-limit>' first")]
    NotInitialized,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl BudgetError {
    /// Create an "insufficient balance" error for the given account
    pub fn insufficient(account: AccountKind, needed: Money, available: Money) -> Self {
        Self::InsufficientBalance {
            account,
            needed,
            available,
        }
    }

    /// Check if this is an invalid amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }

    /// Check if this is an insufficient balance error
    pub fn is_insufficient_balance(&self) -> bool {
        matches!(self, Self::InsufficientBalance { .. })
    }

    /// Whether the user can fix this by correcting their input and retrying
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_) | Self::InsufficientBalance { .. } | Self::NotInitialized
        )
    }
}

// Implement From traits for common error types

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

/// Result type alias for daybudget operations
pub type BudgetResult<T> = Result<T, BudgetError>;
