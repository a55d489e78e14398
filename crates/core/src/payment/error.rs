//! Payment error types.

use thiserror::Error;

use crate::currency::CurrencyError;

/// Errors that can occur while recording a payment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaymentError {
    /// Payment amount must be positive.
    #[error("Payment amount must be positive")]
    NonPositiveAmount,

    /// Exchange rate validation failed.
    #[error(transparent)]
    Currency(#[from] CurrencyError),

    /// The payment does not reference the invoice it is being applied to.
    #[error("Payment references invoice {payment_invoice}, not {invoice}")]
    InvoiceMismatch {
        /// Invoice the payment points at.
        payment_invoice: finvo_shared::types::InvoiceId,
        /// Invoice the caller is applying it to.
        invoice: finvo_shared::types::InvoiceId,
    },
}

impl PaymentError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveAmount => "NON_POSITIVE_AMOUNT",
            Self::Currency(err) => err.error_code(),
            Self::InvoiceMismatch { .. } => "INVOICE_MISMATCH",
        }
    }
}
