//! Pure aging classification over open invoices.

use chrono::NaiveDate;

use super::types::{AgingBucket, AgingReport, OpenInvoice};

/// Whole days an invoice is past due, floored at zero.
///
/// An invoice due exactly on `as_of` is zero days past due.
#[must_use]
pub fn days_past_due(due_date: NaiveDate, as_of: NaiveDate) -> i64 {
    (as_of - due_date).num_days().max(0)
}

/// Maps days past due to its aging bucket.
///
/// Ranges are evaluated in order and mutually exclusive.
#[must_use]
pub fn bucket_for_days(days: i64) -> AgingBucket {
    match days {
        0 => AgingBucket::Current,
        1..=30 => AgingBucket::Days1To30,
        31..=60 => AgingBucket::Days31To60,
        61..=90 => AgingBucket::Days61To90,
        _ => AgingBucket::Over90,
    }
}

/// Sums outstanding balances into aging buckets.
///
/// Only open invoices participate: paid, cancelled, and draft invoices are
/// skipped by status. Each included invoice contributes its outstanding
/// amount to exactly one bucket. Idempotent: classifying the same rows
/// twice yields identical sums.
#[must_use]
pub fn compute_aging(invoices: &[OpenInvoice], as_of: NaiveDate) -> AgingReport {
    let mut report = AgingReport::default();

    for invoice in invoices {
        if !invoice.status.is_open() {
            continue;
        }
        let bucket = bucket_for_days(days_past_due(invoice.due_date, as_of));
        report.add(bucket, invoice.outstanding);
    }

    report
}
