//! Invoice creation and explicit status actions.
//!
//! This service contains pure business logic with no database dependencies.
//! It produces fully computed financial snapshots for the persistence layer;
//! nothing downstream ever recomputes a stored total.

use rust_decimal::Decimal;

use finvo_shared::types::{round_rate, InvoiceId};

use crate::billing::{compute_line_items, compute_totals};
use crate::currency::{convert_to_base, validate_exchange_rate};

use super::error::InvoiceError;
use super::status::compute_invoice_status;
use super::types::{CreateInvoiceInput, Invoice, InvoiceStatus};

/// Invoice service for creation and explicit user actions.
pub struct InvoiceService;

impl InvoiceService {
    /// Validates input and builds an invoice with every derived monetary
    /// field pre-computed.
    ///
    /// Steps:
    /// 1. Validates the invoice number, dates, and exchange rate
    /// 2. Validates and computes line items
    /// 3. Aggregates totals (invoice discount is zero at creation)
    /// 4. Converts the total to the organization base currency
    ///
    /// # Errors
    ///
    /// Returns `InvoiceError` if validation fails; the operation is never
    /// partially applied.
    pub fn create(input: CreateInvoiceInput) -> Result<Invoice, InvoiceError> {
        if input.invoice_number.trim().is_empty() {
            return Err(InvoiceError::EmptyInvoiceNumber);
        }
        if input.due_date < input.issue_date {
            return Err(InvoiceError::DueBeforeIssue);
        }
        validate_exchange_rate(input.exchange_rate)?;

        let line_items = compute_line_items(&input.line_items)?;
        let totals = compute_totals(
            &line_items,
            input.shipping,
            input.shipping_tax_rate,
            Decimal::ZERO,
        )?;

        let exchange_rate = round_rate(input.exchange_rate);
        let base_total = convert_to_base(totals.total, exchange_rate);

        let invoice = Invoice {
            id: InvoiceId::new(),
            organization_id: input.organization_id,
            client_id: input.client_id,
            invoice_number: input.invoice_number,
            original_currency: input.original_currency,
            exchange_rate,
            totals,
            base_total,
            issue_date: input.issue_date,
            due_date: input.due_date,
            status: InvoiceStatus::Draft,
            line_items,
        };

        tracing::debug!(
            invoice_id = %invoice.id,
            organization_id = %invoice.organization_id,
            total = %invoice.totals.total,
            base_total = %invoice.base_total,
            "invoice created"
        );

        Ok(invoice)
    }

    /// Marks a draft invoice as sent.
    ///
    /// # Errors
    ///
    /// Returns `InvoiceError::InvalidStatusTransition` unless the invoice is
    /// currently a draft.
    pub fn mark_sent(status: InvoiceStatus) -> Result<InvoiceStatus, InvoiceError> {
        if status == InvoiceStatus::Draft {
            Ok(InvoiceStatus::Sent)
        } else {
            Err(InvoiceError::InvalidStatusTransition {
                from: status,
                to: InvoiceStatus::Sent,
            })
        }
    }

    /// Cancels an invoice by explicit user action.
    ///
    /// Reachable from any non-terminal state; cancelling twice is rejected.
    ///
    /// # Errors
    ///
    /// Returns `InvoiceError::InvalidStatusTransition` if already cancelled.
    pub fn cancel(status: InvoiceStatus) -> Result<InvoiceStatus, InvoiceError> {
        if status.is_terminal() {
            return Err(InvoiceError::InvalidStatusTransition {
                from: status,
                to: InvoiceStatus::Cancelled,
            });
        }
        Ok(InvoiceStatus::Cancelled)
    }

    /// Re-derives status after a payment event.
    ///
    /// Thin wrapper over [`compute_invoice_status`] taking the invoice itself;
    /// the persistence layer must run read-payments, this computation, and the
    /// status write inside a single serializable transaction (or an
    /// equivalent compare-and-set) so concurrent payments cannot lose updates.
    #[must_use]
    pub fn status_after_payment(
        invoice: &Invoice,
        total_paid_base: Decimal,
        as_of: chrono::NaiveDate,
    ) -> InvoiceStatus {
        compute_invoice_status(
            invoice.base_total,
            total_paid_base,
            invoice.due_date,
            as_of,
            invoice.status,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    use finvo_shared::types::{ClientId, CurrencyCode, OrganizationId};

    use crate::billing::{BillingError, LineItemInput};
    use crate::currency::CurrencyError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item(quantity: Decimal, unit_price: Decimal, tax_rate: Decimal) -> LineItemInput {
        LineItemInput {
            description: "Consulting".to_string(),
            quantity,
            unit_price,
            tax_rate,
            product_id: None,
        }
    }

    fn make_input() -> CreateInvoiceInput {
        CreateInvoiceInput {
            organization_id: OrganizationId::new(),
            client_id: ClientId::new(),
            invoice_number: "INV-2026-0001".to_string(),
            original_currency: CurrencyCode::from_str("EUR").unwrap(),
            exchange_rate: dec!(1.1),
            line_items: vec![item(dec!(3), dec!(10), dec!(10)), item(dec!(1), dec!(50), dec!(0))],
            shipping: dec!(5),
            shipping_tax_rate: dec!(0),
            issue_date: date(2026, 2, 1),
            due_date: date(2026, 3, 1),
        }
    }

    #[test]
    fn test_create_computes_snapshot() {
        let invoice = InvoiceService::create(make_input()).unwrap();

        assert_eq!(invoice.totals.subtotal, dec!(80));
        assert_eq!(invoice.totals.tax, dec!(3));
        assert_eq!(invoice.totals.total, dec!(88));
        assert_eq!(invoice.totals.discount, Decimal::ZERO);
        // 88 * 1.1
        assert_eq!(invoice.base_total, dec!(96.8000));
        assert_eq!(invoice.status, InvoiceStatus::Draft);
        assert_eq!(invoice.line_items.len(), 2);
    }

    #[test]
    fn test_total_money_display() {
        let invoice = InvoiceService::create(make_input()).unwrap();
        assert_eq!(invoice.total_money().to_string(), "88.0000 EUR");
    }

    #[test]
    fn test_create_rejects_empty_number() {
        let mut input = make_input();
        input.invoice_number = "  ".to_string();
        assert_eq!(
            InvoiceService::create(input).unwrap_err(),
            InvoiceError::EmptyInvoiceNumber
        );
    }

    #[test]
    fn test_create_rejects_due_before_issue() {
        let mut input = make_input();
        input.due_date = date(2026, 1, 1);
        assert_eq!(
            InvoiceService::create(input).unwrap_err(),
            InvoiceError::DueBeforeIssue
        );
    }

    #[test]
    fn test_create_rejects_bad_rate() {
        let mut input = make_input();
        input.exchange_rate = Decimal::ZERO;
        assert_eq!(
            InvoiceService::create(input).unwrap_err(),
            InvoiceError::Currency(CurrencyError::InvalidExchangeRate)
        );
    }

    #[test]
    fn test_create_rejects_empty_items() {
        let mut input = make_input();
        input.line_items.clear();
        assert_eq!(
            InvoiceService::create(input).unwrap_err(),
            InvoiceError::Billing(BillingError::NoLineItems)
        );
    }

    #[test]
    fn test_mark_sent() {
        assert_eq!(
            InvoiceService::mark_sent(InvoiceStatus::Draft),
            Ok(InvoiceStatus::Sent)
        );
        assert!(matches!(
            InvoiceService::mark_sent(InvoiceStatus::Paid),
            Err(InvoiceError::InvalidStatusTransition { .. })
        ));
    }

    #[test]
    fn test_cancel() {
        assert_eq!(
            InvoiceService::cancel(InvoiceStatus::Sent),
            Ok(InvoiceStatus::Cancelled)
        );
        assert_eq!(
            InvoiceService::cancel(InvoiceStatus::Paid),
            Ok(InvoiceStatus::Cancelled)
        );
        assert!(matches!(
            InvoiceService::cancel(InvoiceStatus::Cancelled),
            Err(InvoiceError::InvalidStatusTransition { .. })
        ));
    }
}
