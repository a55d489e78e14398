//! Quote error types.

use thiserror::Error;

use finvo_shared::types::QuoteId;

use crate::billing::BillingError;
use crate::currency::CurrencyError;

/// Errors that can occur during quote operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    /// Quote number must not be empty.
    #[error("Quote number must not be empty")]
    EmptyQuoteNumber,

    /// Validity date must not precede the issue date.
    #[error("Validity date must not precede the issue date")]
    ValidUntilBeforeIssue,

    /// The quote has already been converted; conversion is one-way and
    /// happens at most once.
    #[error("Quote {0} already converted to invoice")]
    AlreadyConverted(QuoteId),

    /// Line-item or charge validation failed.
    #[error(transparent)]
    Billing(#[from] BillingError),

    /// Exchange rate validation failed.
    #[error(transparent)]
    Currency(#[from] CurrencyError),

    /// Invoice-side validation failed while converting.
    #[error(transparent)]
    Invoice(#[from] crate::invoice::InvoiceError),
}

impl QuoteError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyQuoteNumber => "EMPTY_QUOTE_NUMBER",
            Self::ValidUntilBeforeIssue => "VALID_UNTIL_BEFORE_ISSUE",
            Self::AlreadyConverted(_) => "QUOTE_ALREADY_CONVERTED",
            Self::Billing(err) => err.error_code(),
            Self::Currency(err) => err.error_code(),
            Self::Invoice(err) => err.error_code(),
        }
    }
}
