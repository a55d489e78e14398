//! Currency error types.

use thiserror::Error;

/// Errors raised at the currency boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurrencyError {
    /// Exchange rate must be positive.
    #[error("Exchange rate must be positive")]
    InvalidExchangeRate,
}

impl CurrencyError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidExchangeRate => "INVALID_EXCHANGE_RATE",
        }
    }
}
