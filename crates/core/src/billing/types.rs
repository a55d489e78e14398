//! Line-item and totals types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finvo_shared::types::ProductId;

/// Input for a single line item on an invoice or quote.
///
/// Derived fields are computed by the calculator; callers supply only the
/// raw quantity, unit price, and tax rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemInput {
    /// Free-form description of the item.
    pub description: String,
    /// Quantity (decimal, fractional quantities allowed).
    pub quantity: Decimal,
    /// Price per unit in the document's original currency.
    pub unit_price: Decimal,
    /// Tax rate as a percentage (e.g. `10` for 10%).
    pub tax_rate: Decimal,
    /// Optional product this line refers to (for revenue rankings).
    pub product_id: Option<ProductId>,
}

/// A line item with its derived amounts.
///
/// Write-once: computed at document creation and owned exclusively by the
/// parent document. Amounts are stored at 4 fractional digits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Free-form description of the item.
    pub description: String,
    /// Quantity.
    pub quantity: Decimal,
    /// Price per unit in the document's original currency.
    pub unit_price: Decimal,
    /// Tax rate as a percentage.
    pub tax_rate: Decimal,
    /// Optional product this line refers to.
    pub product_id: Option<ProductId>,
    /// Derived: `quantity * unit_price`.
    pub amount: Decimal,
    /// Derived: `amount * tax_rate / 100`.
    pub tax_amount: Decimal,
}

/// Financial totals snapshot of an invoice or quote, in its original currency.
///
/// Invariant: `total == subtotal + shipping + shipping_tax + items_tax - discount`,
/// computed once at creation and never silently recomputed from stale items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTotals {
    /// Sum of line-item amounts.
    pub subtotal: Decimal,
    /// Sum of line-item tax amounts.
    pub items_tax: Decimal,
    /// Shipping charge.
    pub shipping: Decimal,
    /// Tax on the shipping charge.
    pub shipping_tax: Decimal,
    /// Total tax (`items_tax + shipping_tax`).
    pub tax: Decimal,
    /// Discount subtracted from the total (zero for invoices at creation).
    pub discount: Decimal,
    /// Grand total.
    pub total: Decimal,
}
