//! Standalone transaction error types.

use thiserror::Error;

use crate::currency::CurrencyError;

/// Errors that can occur while creating a standalone transaction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransactionError {
    /// Description must not be empty.
    #[error("Transaction description must not be empty")]
    EmptyDescription,

    /// Amount must be positive.
    #[error("Transaction amount must be positive")]
    NonPositiveAmount,

    /// Exchange rate validation failed.
    #[error(transparent)]
    Currency(#[from] CurrencyError),
}

impl TransactionError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyDescription => "EMPTY_DESCRIPTION",
            Self::NonPositiveAmount => "NON_POSITIVE_AMOUNT",
            Self::Currency(err) => err.error_code(),
        }
    }
}
