//! Invoice domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finvo_shared::types::{ClientId, CurrencyCode, InvoiceId, Money, OrganizationId};

use crate::billing::{DocumentTotals, LineItem, LineItemInput};

/// Invoice lifecycle status.
///
/// `Draft -> Sent -> {PartiallyPaid, Paid, Overdue}`; `Cancelled` is reachable
/// from any non-terminal state by explicit user action and is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// Invoice is being drafted.
    Draft,
    /// Invoice has been sent to the client.
    Sent,
    /// Some, but not all, of the balance has been paid.
    PartiallyPaid,
    /// The full balance has been paid.
    Paid,
    /// Unpaid and past its due date.
    Overdue,
    /// Cancelled by explicit user action (terminal).
    Cancelled,
}

impl InvoiceStatus {
    /// Returns true if no further status changes are allowed.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Returns true if the invoice still carries a collectible balance.
    ///
    /// Open invoices are the population of accounts-receivable aging.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Sent | Self::PartiallyPaid | Self::Overdue)
    }
}

/// An invoice with its financial snapshot.
///
/// All monetary fields except `base_total` are in `original_currency`.
/// The snapshot is computed once at creation; only `status` mutates afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// The invoice ID.
    pub id: InvoiceId,
    /// The organization this invoice belongs to.
    pub organization_id: OrganizationId,
    /// The client being billed.
    pub client_id: ClientId,
    /// Invoice number, unique per organization (uniqueness enforced by the store).
    pub invoice_number: String,
    /// Currency the invoice was issued in.
    pub original_currency: CurrencyCode,
    /// Exchange rate to the organization base currency at issuance
    /// (base units per 1 original unit, 8 fractional digits).
    pub exchange_rate: Decimal,
    /// Totals snapshot in the original currency.
    pub totals: DocumentTotals,
    /// `totals.total` converted to the organization base currency.
    pub base_total: Decimal,
    /// Date the invoice was issued.
    pub issue_date: NaiveDate,
    /// Date payment is due.
    pub due_date: NaiveDate,
    /// Lifecycle status.
    pub status: InvoiceStatus,
    /// Owned line items, write-once at creation.
    pub line_items: Vec<LineItem>,
}

impl Invoice {
    /// The grand total as a displayable amount in the invoice currency.
    #[must_use]
    pub fn total_money(&self) -> Money {
        Money::new(self.totals.total, self.original_currency.clone())
    }
}

/// Input for creating a new invoice.
#[derive(Debug, Clone)]
pub struct CreateInvoiceInput {
    /// The organization the invoice belongs to.
    pub organization_id: OrganizationId,
    /// The client being billed.
    pub client_id: ClientId,
    /// Invoice number (must be non-empty; uniqueness per org is enforced
    /// by the persistence layer).
    pub invoice_number: String,
    /// Currency the invoice is issued in.
    pub original_currency: CurrencyCode,
    /// Exchange rate to the organization base currency.
    pub exchange_rate: Decimal,
    /// Raw line items.
    pub line_items: Vec<LineItemInput>,
    /// Shipping charge in the original currency.
    pub shipping: Decimal,
    /// Tax rate applied to the shipping charge (percent).
    pub shipping_tax_rate: Decimal,
    /// Date the invoice is issued.
    pub issue_date: NaiveDate,
    /// Date payment is due.
    pub due_date: NaiveDate,
}
