//! Payment domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finvo_shared::types::{CurrencyCode, InvoiceId, Money, PaymentId};

/// Payment processing status.
///
/// Only [`PaymentStatus::Success`] counts toward invoice balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Payment initiated but not confirmed.
    Pending,
    /// Payment confirmed; counts toward the ledger.
    Success,
    /// Payment failed.
    Failed,
    /// Payment was refunded after succeeding.
    Refunded,
}

impl PaymentStatus {
    /// Returns true if this payment counts toward paid totals.
    #[must_use]
    pub fn counts_toward_ledger(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// How a payment was made.
///
/// Modeled as a tagged union keyed by method so each branch is exhaustively
/// validated, rather than a free-form metadata blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Bank wire or ACH transfer.
    BankTransfer {
        /// Name of the originating bank.
        bank_name: String,
        /// Transfer reference supplied by the bank.
        reference: String,
    },
    /// Card payment.
    Card {
        /// Card brand (e.g. "visa").
        brand: String,
        /// Last four digits of the card number.
        last4: String,
    },
    /// PayPal payment.
    Paypal {
        /// Payer's PayPal email.
        email: String,
    },
    /// Cash payment.
    Cash,
    /// Anything else, with a free-form note.
    Other {
        /// Description of the method.
        note: String,
    },
}

/// A payment recorded against an invoice.
///
/// Holds a back-reference to its invoice only; the payment does not own the
/// invoice. `base_amount` is derived once at recording time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// The payment ID.
    pub id: PaymentId,
    /// The invoice this payment settles (back-reference).
    pub invoice_id: InvoiceId,
    /// Amount in the currency the payment was made in.
    pub original_amount: Decimal,
    /// Currency the payment was made in.
    pub original_currency: CurrencyCode,
    /// Exchange rate to the organization base currency at payment time.
    pub exchange_rate: Decimal,
    /// `original_amount` converted to the organization base currency.
    pub base_amount: Decimal,
    /// Processing status.
    pub status: PaymentStatus,
    /// How the payment was made.
    pub method: PaymentMethod,
    /// Date the payment was made.
    pub payment_date: NaiveDate,
}

impl Payment {
    /// The paid amount as a displayable amount in the payment currency.
    #[must_use]
    pub fn amount_money(&self) -> Money {
        Money::new(self.original_amount, self.original_currency.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_success_counts() {
        assert!(PaymentStatus::Success.counts_toward_ledger());
        assert!(!PaymentStatus::Pending.counts_toward_ledger());
        assert!(!PaymentStatus::Failed.counts_toward_ledger());
        assert!(!PaymentStatus::Refunded.counts_toward_ledger());
    }

    #[test]
    fn test_payment_method_tagged_serialization() {
        let method = PaymentMethod::Card {
            brand: "visa".to_string(),
            last4: "4242".to_string(),
        };
        let json = serde_json::to_value(&method).unwrap();
        assert_eq!(json["method"], "card");
        assert_eq!(json["last4"], "4242");

        let parsed: PaymentMethod = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, method);
    }

    #[test]
    fn test_payment_method_unit_variant() {
        let json = serde_json::to_value(PaymentMethod::Cash).unwrap();
        assert_eq!(json["method"], "cash");
    }
}
