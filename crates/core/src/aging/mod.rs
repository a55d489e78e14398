//! Accounts-receivable aging buckets.
//!
//! A pure read-time projection: it classifies open invoices by days past
//! due and never mutates invoice status. Status transitions belong to the
//! invoice state machine, invoked on payment events only, so an invoice's
//! stored status and its aging bucket can transiently disagree.

pub mod classifier;
pub mod types;

pub use classifier::{bucket_for_days, compute_aging, days_past_due};
pub use types::{AgingBucket, AgingReport, OpenInvoice};
