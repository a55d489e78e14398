//! Aggregation of successful payments into paid totals and outstanding balance.

use rust_decimal::Decimal;

use finvo_shared::types::round_amount;

use super::types::Payment;

/// Sums `original_amount` across successful payments.
///
/// This is the invoice-level "paid" figure, displayed in the invoice's own
/// currency. It must never be mixed with base-currency totals; org-level
/// aggregation uses [`total_paid_base`] instead.
///
/// Total: non-Success payments are ignored, an empty slice sums to zero.
#[must_use]
pub fn total_paid_original(payments: &[Payment]) -> Decimal {
    round_amount(
        payments
            .iter()
            .filter(|p| p.status.counts_toward_ledger())
            .map(|p| p.original_amount)
            .sum(),
    )
}

/// Sums `base_amount` across successful payments.
///
/// This is the figure compared against `Invoice::base_total` for status
/// derivation and org-level dashboards.
#[must_use]
pub fn total_paid_base(payments: &[Payment]) -> Decimal {
    round_amount(
        payments
            .iter()
            .filter(|p| p.status.counts_toward_ledger())
            .map(|p| p.base_amount)
            .sum(),
    )
}

/// Remaining unpaid balance in base currency, floored at zero.
///
/// An overpayment still reports zero outstanding; handling beyond the zero
/// floor is out of scope.
#[must_use]
pub fn compute_outstanding(base_total: Decimal, total_paid_in_base: Decimal) -> Decimal {
    (base_total - total_paid_in_base).max(Decimal::ZERO)
}
