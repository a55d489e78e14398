//! Currency conversion logic.
//!
//! CRITICAL: Rounding strategy for multi-currency:
//! - Always round converted amounts to the 4-digit storage scale
//! - Use banker's rounding (round half to even)
//! - Store both original and converted amounts

use rust_decimal::Decimal;
use finvo_shared::types::round_amount;

use super::error::CurrencyError;

/// Converts an amount in its original currency to the organization base
/// currency using the supplied exchange rate (base units per 1 original unit).
///
/// Pure and total: a non-positive rate is a caller precondition, enforced at
/// every creation boundary via [`validate_exchange_rate`], never here.
/// Uses banker's rounding (round half to even) to minimize cumulative errors.
#[must_use]
pub fn convert_to_base(amount: Decimal, rate: Decimal) -> Decimal {
    round_amount(amount * rate)
}

/// Validates an externally supplied exchange rate before it enters the ledger.
///
/// # Errors
///
/// Returns [`CurrencyError::InvalidExchangeRate`] if the rate is zero or negative.
pub fn validate_exchange_rate(rate: Decimal) -> Result<(), CurrencyError> {
    if rate <= Decimal::ZERO {
        return Err(CurrencyError::InvalidExchangeRate);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_convert_to_base() {
        // 100 EUR * 1.5 = 150.0000 in base
        let result = convert_to_base(dec!(100), dec!(1.5));
        assert_eq!(result, dec!(150.0000));
    }

    #[test]
    fn test_convert_same_currency_rate_one() {
        let result = convert_to_base(dec!(100.50), Decimal::ONE);
        assert_eq!(result, dec!(100.5000));
    }

    #[test]
    fn test_convert_rounds_to_4_decimals() {
        // 100 * 1.23456789 = 123.456789 -> 123.4568
        let result = convert_to_base(dec!(100), dec!(1.23456789));
        assert_eq!(result, dec!(123.4568));
    }

    #[test]
    fn test_convert_bankers_rounding() {
        // Half to even at the 4th digit
        assert_eq!(convert_to_base(dec!(0.00005), Decimal::ONE), dec!(0.0000));
        assert_eq!(convert_to_base(dec!(0.00015), Decimal::ONE), dec!(0.0002));
    }

    #[test]
    fn test_validate_exchange_rate() {
        assert!(validate_exchange_rate(dec!(1.5)).is_ok());
        assert!(validate_exchange_rate(dec!(0.00000001)).is_ok());
        assert_eq!(
            validate_exchange_rate(Decimal::ZERO),
            Err(CurrencyError::InvalidExchangeRate)
        );
        assert_eq!(
            validate_exchange_rate(dec!(-1)),
            Err(CurrencyError::InvalidExchangeRate)
        );
    }
}
