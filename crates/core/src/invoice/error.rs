//! Invoice error types.

use thiserror::Error;

use crate::billing::BillingError;
use crate::currency::CurrencyError;

use super::types::InvoiceStatus;

/// Errors that can occur during invoice operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvoiceError {
    /// Invoice number must not be empty.
    #[error("Invoice number must not be empty")]
    EmptyInvoiceNumber,

    /// Due date must not precede the issue date.
    #[error("Due date must not precede the issue date")]
    DueBeforeIssue,

    /// Line-item or charge validation failed.
    #[error(transparent)]
    Billing(#[from] BillingError),

    /// Exchange rate validation failed.
    #[error(transparent)]
    Currency(#[from] CurrencyError),

    /// The requested status transition is not allowed.
    #[error("Cannot transition invoice from {from:?} to {to:?}")]
    InvalidStatusTransition {
        /// Current status.
        from: InvoiceStatus,
        /// Requested status.
        to: InvoiceStatus,
    },
}

impl InvoiceError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyInvoiceNumber => "EMPTY_INVOICE_NUMBER",
            Self::DueBeforeIssue => "DUE_BEFORE_ISSUE",
            Self::Billing(err) => err.error_code(),
            Self::Currency(err) => err.error_code(),
            Self::InvalidStatusTransition { .. } => "INVALID_STATUS_TRANSITION",
        }
    }
}
