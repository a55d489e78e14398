//! Quote domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finvo_shared::types::{ClientId, CurrencyCode, InvoiceId, OrganizationId, QuoteId};

use crate::billing::{DocumentTotals, LineItem, LineItemInput};

/// Quote lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    /// Quote is being drafted.
    Draft,
    /// Quote has been sent to the client.
    Sent,
    /// Client approved the quote.
    Approved,
    /// Client rejected the quote.
    Rejected,
    /// Quote lapsed past its validity date.
    Expired,
    /// Quote was converted into an invoice (terminal).
    Converted,
}

/// A quote with its financial snapshot.
///
/// Structurally an invoice minus payment semantics, plus an explicit
/// discount and the one-way conversion link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// The quote ID.
    pub id: QuoteId,
    /// The organization this quote belongs to.
    pub organization_id: OrganizationId,
    /// The client the quote is addressed to.
    pub client_id: ClientId,
    /// Quote number, unique per organization.
    pub quote_number: String,
    /// Currency the quote was issued in.
    pub original_currency: CurrencyCode,
    /// Exchange rate to the organization base currency at issuance.
    pub exchange_rate: Decimal,
    /// Totals snapshot in the original currency (includes the discount).
    pub totals: DocumentTotals,
    /// `totals.total` converted to the organization base currency.
    pub base_total: Decimal,
    /// Date the quote was issued.
    pub issue_date: NaiveDate,
    /// Last date the quote remains valid.
    pub valid_until: NaiveDate,
    /// Lifecycle status.
    pub status: QuoteStatus,
    /// Set once when the quote is converted; guards against re-conversion.
    pub converted_invoice_id: Option<InvoiceId>,
    /// Owned line items, write-once at creation.
    pub line_items: Vec<LineItem>,
}

/// Input for creating a new quote.
#[derive(Debug, Clone)]
pub struct CreateQuoteInput {
    /// The organization the quote belongs to.
    pub organization_id: OrganizationId,
    /// The client the quote is addressed to.
    pub client_id: ClientId,
    /// Quote number (must be non-empty).
    pub quote_number: String,
    /// Currency the quote is issued in.
    pub original_currency: CurrencyCode,
    /// Exchange rate to the organization base currency.
    pub exchange_rate: Decimal,
    /// Raw line items.
    pub line_items: Vec<LineItemInput>,
    /// Shipping charge in the original currency.
    pub shipping: Decimal,
    /// Tax rate applied to the shipping charge (percent).
    pub shipping_tax_rate: Decimal,
    /// Explicit discount subtracted from the total.
    pub discount: Decimal,
    /// Date the quote is issued.
    pub issue_date: NaiveDate,
    /// Last date the quote remains valid.
    pub valid_until: NaiveDate,
}
