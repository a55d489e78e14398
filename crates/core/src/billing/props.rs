//! Property-based tests for the line-item calculator.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::calculator::{compute_line_items, compute_totals};
use super::types::LineItemInput;

/// Strategy to generate a non-negative amount-scaled decimal.
fn amount(max_units: i64) -> impl Strategy<Value = Decimal> {
    (0i64..max_units).prop_map(|units| Decimal::new(units, 4))
}

/// Strategy to generate a tax rate between 0% and 50%.
fn tax_rate() -> impl Strategy<Value = Decimal> {
    (0i64..5000).prop_map(|units| Decimal::new(units, 2))
}

/// Strategy to generate 1 to 20 valid line items.
fn line_items() -> impl Strategy<Value = Vec<LineItemInput>> {
    prop::collection::vec(
        (amount(1_000_000), amount(10_000_000), tax_rate()).prop_map(
            |(quantity, unit_price, tax_rate)| LineItemInput {
                description: "item".to_string(),
                quantity,
                unit_price,
                tax_rate,
                product_id: None,
            },
        ),
        1..20,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// total == subtotal + shipping + shipping_tax + items_tax - discount,
    /// exactly, for any valid document.
    #[test]
    fn prop_total_invariant(
        inputs in line_items(),
        shipping in amount(1_000_000),
        shipping_tax_rate in tax_rate(),
        discount in amount(100_000),
    ) {
        let items = compute_line_items(&inputs).unwrap();
        let totals = compute_totals(&items, shipping, shipping_tax_rate, discount).unwrap();

        prop_assert_eq!(
            totals.total,
            totals.subtotal + totals.shipping + totals.shipping_tax + totals.items_tax
                - totals.discount
        );
    }

    /// Subtotal equals the sum of the stored per-item amounts.
    #[test]
    fn prop_subtotal_matches_items(inputs in line_items()) {
        let items = compute_line_items(&inputs).unwrap();
        let totals = compute_totals(&items, Decimal::ZERO, Decimal::ZERO, Decimal::ZERO).unwrap();

        let item_sum: Decimal = items.iter().map(|i| i.amount).sum();
        prop_assert_eq!(totals.subtotal, item_sum);
    }

    /// All stored monetary fields are at the 4-digit storage scale.
    #[test]
    fn prop_totals_are_scale_stable(
        inputs in line_items(),
        shipping in amount(1_000_000),
        shipping_tax_rate in tax_rate(),
    ) {
        let items = compute_line_items(&inputs).unwrap();
        let totals = compute_totals(&items, shipping, shipping_tax_rate, Decimal::ZERO).unwrap();

        for value in [totals.subtotal, totals.items_tax, totals.shipping_tax, totals.total] {
            let scaled = value * Decimal::from(10_000);
            prop_assert_eq!(scaled, scaled.round(), "value {} exceeds storage scale", value);
        }
    }
}
