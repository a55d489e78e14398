//! Report row types.
//!
//! All monetary fields are in the organization base currency.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finvo_shared::types::{ClientId, ProductId};

/// Income vs expense for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCashFlowRow {
    /// Month key in `YYYY-MM` form.
    pub month: String,
    /// Sum of income transactions.
    pub income: Decimal,
    /// Sum of expense transactions.
    pub expense: Decimal,
    /// `income - expense`.
    pub net: Decimal,
}

/// Invoiced vs collected amounts for one calendar month (by issue date).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyInvoiceRow {
    /// Month key in `YYYY-MM` form.
    pub month: String,
    /// Sum of invoice base totals issued this month.
    pub invoiced: Decimal,
    /// Sum collected against those invoices.
    pub paid: Decimal,
    /// Sum still outstanding on those invoices.
    pub outstanding: Decimal,
}

/// Sum and count for one resolved label (category, provider, method).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownRow {
    /// Resolved display label.
    pub label: String,
    /// Sum of base amounts under this label.
    pub total: Decimal,
    /// Number of entries under this label.
    pub count: usize,
}

/// Revenue attributed to one client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRevenueRow {
    /// The client.
    pub client_id: ClientId,
    /// Total invoiced revenue in base currency.
    pub revenue: Decimal,
}

/// A line-level revenue observation for product rankings.
///
/// `base_amount` is the line amount already converted to base currency by
/// the caller; the aggregator only groups and sums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRevenue {
    /// The product the line refers to.
    pub product_id: ProductId,
    /// Line amount in base currency.
    pub base_amount: Decimal,
}

/// Revenue attributed to one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRevenueRow {
    /// The product.
    pub product_id: ProductId,
    /// Total revenue in base currency.
    pub revenue: Decimal,
}
