//! Line-item math and document totals for invoices and quotes.
//!
//! This module is the single place where per-item amounts, tax, and
//! document totals are computed. Documents store the resulting snapshot
//! at creation and never recompute it from their items afterwards.

pub mod calculator;
pub mod error;
pub mod types;

#[cfg(test)]
mod props;

pub use calculator::{compute_line_item, compute_line_items, compute_totals};
pub use error::BillingError;
pub use types::{DocumentTotals, LineItem, LineItemInput};
