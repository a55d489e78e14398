//! Aging report types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finvo_shared::types::InvoiceId;

use crate::invoice::{Invoice, InvoiceStatus};
use crate::payment::{compute_outstanding, total_paid_base, Payment};

/// Days-past-due range an unpaid invoice falls into.
///
/// Buckets are mutually exclusive; an invoice contributes to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgingBucket {
    /// Not yet past due.
    Current,
    /// 1 to 30 days past due.
    Days1To30,
    /// 31 to 60 days past due.
    Days31To60,
    /// 61 to 90 days past due.
    Days61To90,
    /// More than 90 days past due.
    Over90,
}

impl AgingBucket {
    /// Human-readable bucket label for AR reports.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Current => "Current",
            Self::Days1To30 => "1-30 days",
            Self::Days31To60 => "31-60 days",
            Self::Days61To90 => "61-90 days",
            Self::Over90 => "90+ days",
        }
    }
}

/// An open invoice prepared for aging classification.
///
/// Carries the pre-computed outstanding balance in base currency so the
/// classifier stays a pure summation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenInvoice {
    /// The invoice ID.
    pub invoice_id: InvoiceId,
    /// Stored invoice status at read time.
    pub status: InvoiceStatus,
    /// Date payment was due.
    pub due_date: NaiveDate,
    /// Outstanding balance in base currency, floored at zero.
    pub outstanding: Decimal,
}

impl OpenInvoice {
    /// Builds the aging row for an invoice from its payment ledger.
    #[must_use]
    pub fn from_ledger(invoice: &Invoice, payments: &[Payment]) -> Self {
        let paid = total_paid_base(payments);
        Self {
            invoice_id: invoice.id,
            status: invoice.status,
            due_date: invoice.due_date,
            outstanding: compute_outstanding(invoice.base_total, paid),
        }
    }
}

/// AR aging report: outstanding totals per bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingReport {
    /// Outstanding not yet past due.
    pub current: Decimal,
    /// Outstanding 1-30 days past due.
    pub days_1_30: Decimal,
    /// Outstanding 31-60 days past due.
    pub days_31_60: Decimal,
    /// Outstanding 61-90 days past due.
    pub days_61_90: Decimal,
    /// Outstanding more than 90 days past due.
    pub over_90: Decimal,
    /// Total outstanding across all buckets.
    pub total: Decimal,
}

impl AgingReport {
    /// Adds an outstanding amount to the given bucket.
    pub fn add(&mut self, bucket: AgingBucket, amount: Decimal) {
        match bucket {
            AgingBucket::Current => self.current += amount,
            AgingBucket::Days1To30 => self.days_1_30 += amount,
            AgingBucket::Days31To60 => self.days_31_60 += amount,
            AgingBucket::Days61To90 => self.days_61_90 += amount,
            AgingBucket::Over90 => self.over_90 += amount,
        }
        self.total += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_labels() {
        assert_eq!(AgingBucket::Current.label(), "Current");
        assert_eq!(AgingBucket::Days1To30.label(), "1-30 days");
        assert_eq!(AgingBucket::Days31To60.label(), "31-60 days");
        assert_eq!(AgingBucket::Days61To90.label(), "61-90 days");
        assert_eq!(AgingBucket::Over90.label(), "90+ days");
    }
}
