//! Payment ledger: total paid and outstanding balance.
//!
//! Only `Success` payments count toward the ledger; every other status is
//! excluded from all aggregations.

pub mod error;
pub mod ledger;
pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use error::PaymentError;
pub use ledger::{compute_outstanding, total_paid_base, total_paid_original};
pub use service::{PaymentOutcome, PaymentService, RecordPaymentInput};
pub use types::{Payment, PaymentMethod, PaymentStatus};
