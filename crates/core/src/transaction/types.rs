//! Standalone transaction domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finvo_shared::types::{CategoryId, CurrencyCode, OrganizationId, TransactionId};

/// Direction of a standalone transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Money coming into the organization.
    Income,
    /// Money leaving the organization.
    Expense,
}

/// A standalone income or expense entry.
///
/// Created once with a fully computed snapshot; `base_amount` is derived at
/// creation and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// The transaction ID.
    pub id: TransactionId,
    /// The organization this entry belongs to.
    pub organization_id: OrganizationId,
    /// Income or expense.
    pub transaction_type: TransactionType,
    /// Description of the entry.
    pub description: String,
    /// Amount in the currency the entry was recorded in.
    pub original_amount: Decimal,
    /// Currency the entry was recorded in.
    pub original_currency: CurrencyCode,
    /// Exchange rate to the organization base currency.
    pub exchange_rate: Decimal,
    /// `original_amount` converted to the organization base currency.
    pub base_amount: Decimal,
    /// Date of the entry.
    pub date: NaiveDate,
    /// Optional category for breakdown reports.
    pub category_id: Option<CategoryId>,
}

/// Input for creating a standalone transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    /// The organization the entry belongs to.
    pub organization_id: OrganizationId,
    /// Income or expense.
    pub transaction_type: TransactionType,
    /// Description (must be non-empty).
    pub description: String,
    /// Amount in the original currency (must be positive).
    pub original_amount: Decimal,
    /// Currency the entry is recorded in.
    pub original_currency: CurrencyCode,
    /// Exchange rate to the organization base currency.
    pub exchange_rate: Decimal,
    /// Date of the entry.
    pub date: NaiveDate,
    /// Optional category.
    pub category_id: Option<CategoryId>,
}
