//! Property-based tests for currency conversion.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::convert_to_base;
use finvo_shared::types::round_amount;

/// Strategy to generate positive decimal amounts (0.0001 to 100,000.0000).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|units| Decimal::new(units, 4))
}

/// Strategy to generate positive exchange rates (0.00000001 to 100.00000000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000_000i64).prop_map(|units| Decimal::new(units, 8))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Conversion result always has at most 4 fractional digits.
    #[test]
    fn prop_convert_rounds_to_4_decimals(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let result = convert_to_base(amount, rate);
        let scaled = result * Decimal::from(10_000);
        prop_assert_eq!(
            scaled,
            scaled.round(),
            "Result {} should have at most 4 decimal places",
            result
        );
    }

    /// Conversion is deterministic: repeated reads are byte-stable.
    #[test]
    fn prop_convert_is_deterministic(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        prop_assert_eq!(convert_to_base(amount, rate), convert_to_base(amount, rate));
    }

    /// Converting with rate 1 preserves the amount (at storage scale).
    #[test]
    fn prop_rate_one_preserves_amount(amount in positive_amount()) {
        prop_assert_eq!(convert_to_base(amount, Decimal::ONE), round_amount(amount));
    }

    /// Positive inputs produce a non-negative result.
    #[test]
    fn prop_positive_inputs_non_negative(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        prop_assert!(convert_to_base(amount, rate) >= Decimal::ZERO);
    }
}
