//! Recording payments and deriving the resulting invoice state.
//!
//! Concurrency contract: recording a payment reads the invoice's prior
//! payments, folds the ledger, and derives the new status. The persistence
//! layer must run read -> compute -> write-status inside a single serializable
//! transaction or an equivalent compare-and-set; otherwise two simultaneous
//! payments can race on stale totals and leave the invoice under-marked.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use finvo_shared::types::{round_rate, CurrencyCode, PaymentId};

use crate::currency::{convert_to_base, validate_exchange_rate};
use crate::invoice::{Invoice, InvoiceService, InvoiceStatus};

use super::error::PaymentError;
use super::ledger::{compute_outstanding, total_paid_base};
use super::types::{Payment, PaymentMethod, PaymentStatus};

/// Input for recording a new payment against an invoice.
#[derive(Debug, Clone)]
pub struct RecordPaymentInput {
    /// Amount in the currency the payment was made in.
    pub original_amount: Decimal,
    /// Currency the payment was made in.
    pub original_currency: CurrencyCode,
    /// Exchange rate to the organization base currency.
    pub exchange_rate: Decimal,
    /// Processing status reported by the payment provider.
    pub status: PaymentStatus,
    /// How the payment was made.
    pub method: PaymentMethod,
    /// Date the payment was made.
    pub payment_date: NaiveDate,
}

/// Result of recording a payment: the new payment plus the derived invoice state.
#[derive(Debug, Clone)]
pub struct PaymentOutcome {
    /// The newly recorded payment, with `base_amount` derived.
    pub payment: Payment,
    /// Total successfully paid in base currency, including the new payment.
    pub total_paid_base: Decimal,
    /// Outstanding balance in base currency, floored at zero.
    pub outstanding: Decimal,
    /// The invoice status derived from the updated ledger.
    pub status: InvoiceStatus,
}

/// Payment service: the only path that triggers status re-derivation.
pub struct PaymentService;

impl PaymentService {
    /// Records a payment against an invoice and derives the updated
    /// paid total, outstanding balance, and status.
    ///
    /// `prior_payments` are the invoice's already persisted payments; the
    /// new payment is validated, converted, and folded in. Non-Success
    /// payments are stored but never counted.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError` if a prior payment references a different
    /// invoice, the amount is not positive, or the exchange rate is invalid.
    /// Nothing is derived on failure.
    pub fn record(
        invoice: &Invoice,
        prior_payments: &[Payment],
        input: RecordPaymentInput,
        as_of: NaiveDate,
    ) -> Result<PaymentOutcome, PaymentError> {
        if let Some(stray) = prior_payments.iter().find(|p| p.invoice_id != invoice.id) {
            return Err(PaymentError::InvoiceMismatch {
                payment_invoice: stray.invoice_id,
                invoice: invoice.id,
            });
        }
        if input.original_amount <= Decimal::ZERO {
            return Err(PaymentError::NonPositiveAmount);
        }
        validate_exchange_rate(input.exchange_rate)?;

        let exchange_rate = round_rate(input.exchange_rate);
        let payment = Payment {
            id: PaymentId::new(),
            invoice_id: invoice.id,
            original_amount: input.original_amount,
            original_currency: input.original_currency,
            exchange_rate,
            base_amount: convert_to_base(input.original_amount, exchange_rate),
            status: input.status,
            method: input.method,
            payment_date: input.payment_date,
        };

        let mut all = prior_payments.to_vec();
        all.push(payment.clone());

        let total_paid = total_paid_base(&all);
        let outstanding = compute_outstanding(invoice.base_total, total_paid);
        let status = InvoiceService::status_after_payment(invoice, total_paid, as_of);

        tracing::debug!(
            invoice_id = %invoice.id,
            payment_id = %payment.id,
            base_amount = %payment.base_amount,
            total_paid = %total_paid,
            outstanding = %outstanding,
            ?status,
            "payment recorded"
        );

        Ok(PaymentOutcome {
            payment,
            total_paid_base: total_paid,
            outstanding,
            status,
        })
    }
}
