//! Property-based tests for the payment ledger and status derivation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use finvo_shared::types::{CurrencyCode, InvoiceId, PaymentId};

use crate::invoice::{compute_invoice_status, InvoiceStatus};

use super::ledger::{compute_outstanding, total_paid_base};
use super::types::{Payment, PaymentMethod, PaymentStatus};

fn make_payment(base_amount: Decimal, status: PaymentStatus) -> Payment {
    Payment {
        id: PaymentId::new(),
        invoice_id: InvoiceId::new(),
        original_amount: base_amount,
        original_currency: CurrencyCode::from_str("USD").unwrap(),
        exchange_rate: Decimal::ONE,
        base_amount,
        status,
        method: PaymentMethod::Cash,
        payment_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
    }
}

/// Strategy to generate a positive base amount (0.0001 to 10,000.0000).
fn base_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|units| Decimal::new(units, 4))
}

/// Strategy to generate any payment status.
fn any_status() -> impl Strategy<Value = PaymentStatus> {
    prop_oneof![
        Just(PaymentStatus::Pending),
        Just(PaymentStatus::Success),
        Just(PaymentStatus::Failed),
        Just(PaymentStatus::Refunded),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Outstanding is never negative, whatever the paid total.
    #[test]
    fn prop_outstanding_never_negative(
        base_total in base_amount(),
        total_paid in base_amount(),
    ) {
        prop_assert!(compute_outstanding(base_total, total_paid) >= Decimal::ZERO);
    }

    /// Non-Success payments never contribute to the paid total.
    #[test]
    fn prop_only_success_counts(
        amounts in prop::collection::vec((base_amount(), any_status()), 0..20),
    ) {
        let payments: Vec<Payment> = amounts
            .iter()
            .map(|(amount, status)| make_payment(*amount, *status))
            .collect();

        let expected: Decimal = amounts
            .iter()
            .filter(|(_, status)| *status == PaymentStatus::Success)
            .map(|(amount, _)| *amount)
            .sum();

        prop_assert_eq!(total_paid_base(&payments), expected);
    }

    /// As successful payments accumulate, status never regresses from Paid.
    #[test]
    fn prop_status_monotonic_under_payments(
        base_total in base_amount(),
        increments in prop::collection::vec(base_amount(), 1..15),
    ) {
        let due = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let as_of = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();

        let mut status = InvoiceStatus::Sent;
        let mut paid = Decimal::ZERO;
        let mut seen_paid = false;

        for increment in increments {
            paid += increment;
            status = compute_invoice_status(base_total, paid, due, as_of, status);
            if status == InvoiceStatus::Paid {
                seen_paid = true;
            }
            if seen_paid {
                prop_assert_eq!(status, InvoiceStatus::Paid, "status regressed after Paid");
            }
        }
    }

    /// Folding the same payment set twice produces identical totals.
    #[test]
    fn prop_total_paid_deterministic(
        amounts in prop::collection::vec(base_amount(), 0..20),
    ) {
        let payments: Vec<Payment> = amounts
            .iter()
            .map(|amount| make_payment(*amount, PaymentStatus::Success))
            .collect();

        prop_assert_eq!(total_paid_base(&payments), total_paid_base(&payments));
    }
}
