//! Billing error types for line-item and totals validation.

use thiserror::Error;

/// Errors that can occur while validating line items and document charges.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BillingError {
    /// Document must have at least one line item.
    #[error("Document must have at least one line item")]
    NoLineItems,

    /// Line-item quantity cannot be negative.
    #[error("Line item {index}: quantity cannot be negative")]
    NegativeQuantity {
        /// Zero-based index of the offending item.
        index: usize,
    },

    /// Line-item unit price cannot be negative.
    #[error("Line item {index}: unit price cannot be negative")]
    NegativeUnitPrice {
        /// Zero-based index of the offending item.
        index: usize,
    },

    /// Line-item tax rate cannot be negative.
    #[error("Line item {index}: tax rate cannot be negative")]
    NegativeTaxRate {
        /// Zero-based index of the offending item.
        index: usize,
    },

    /// Shipping charge cannot be negative.
    #[error("Shipping charge cannot be negative")]
    NegativeShipping,

    /// Shipping tax rate cannot be negative.
    #[error("Shipping tax rate cannot be negative")]
    NegativeShippingTaxRate,

    /// Discount cannot be negative.
    #[error("Discount cannot be negative")]
    NegativeDiscount,
}

impl BillingError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NoLineItems => "NO_LINE_ITEMS",
            Self::NegativeQuantity { .. } => "NEGATIVE_QUANTITY",
            Self::NegativeUnitPrice { .. } => "NEGATIVE_UNIT_PRICE",
            Self::NegativeTaxRate { .. } => "NEGATIVE_TAX_RATE",
            Self::NegativeShipping => "NEGATIVE_SHIPPING",
            Self::NegativeShippingTaxRate => "NEGATIVE_SHIPPING_TAX_RATE",
            Self::NegativeDiscount => "NEGATIVE_DISCOUNT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(BillingError::NoLineItems.error_code(), "NO_LINE_ITEMS");
        assert_eq!(
            BillingError::NegativeQuantity { index: 2 }.error_code(),
            "NEGATIVE_QUANTITY"
        );
        assert_eq!(BillingError::NegativeShipping.error_code(), "NEGATIVE_SHIPPING");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            BillingError::NegativeUnitPrice { index: 1 }.to_string(),
            "Line item 1: unit price cannot be negative"
        );
    }
}
