//! Invoice status state machine.
//!
//! [`compute_invoice_status`] is the single writer of payment-derived status.
//! It runs when a successful payment is recorded, never on read paths, so an
//! invoice's stored status and its aging classification can transiently
//! disagree until the next payment event.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use finvo_shared::types::MIN_AMOUNT_UNIT;

use super::types::InvoiceStatus;

/// Derives the invoice status from its balance and due date.
///
/// Rules, evaluated in order:
/// 1. `Cancelled` is absorbing and never changes.
/// 2. Outstanding below one representable unit (`0.0001`) counts as fully
///    paid, so rounding noise cannot reopen a paid invoice.
/// 3. Any positive paid amount short of the total is `PartiallyPaid`
///    (payment takes precedence over overdue).
/// 4. Unpaid and strictly past due is `Overdue`.
/// 5. Otherwise the current status is kept (typically `Draft`/`Sent`).
///
/// Pure and total: never fails, for any decimal inputs. Callers with no
/// recorded payments pass `total_paid = 0`.
#[must_use]
pub fn compute_invoice_status(
    base_total: Decimal,
    total_paid: Decimal,
    due_date: NaiveDate,
    as_of: NaiveDate,
    current: InvoiceStatus,
) -> InvoiceStatus {
    if current == InvoiceStatus::Cancelled {
        return InvoiceStatus::Cancelled;
    }

    let outstanding = base_total - total_paid;

    if outstanding < MIN_AMOUNT_UNIT {
        InvoiceStatus::Paid
    } else if total_paid > Decimal::ZERO {
        InvoiceStatus::PartiallyPaid
    } else if as_of > due_date {
        InvoiceStatus::Overdue
    } else {
        current
    }
}
