//! Money and currency types with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All monetary values wrap `rust_decimal::Decimal`: amounts are stored at
//! 4 fractional digits, exchange rates at 8.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Fractional digits for stored monetary amounts.
pub const AMOUNT_SCALE: u32 = 4;

/// Fractional digits for stored exchange rates.
pub const RATE_SCALE: u32 = 8;

/// The smallest representable monetary unit (`0.0001`).
///
/// Balances smaller than this are indistinguishable from zero after
/// rounding, so ledger comparisons treat them as zero.
pub const MIN_AMOUNT_UNIT: Decimal = Decimal::from_parts(1, 0, 0, false, AMOUNT_SCALE);

/// Rounds a monetary amount to the storage scale.
///
/// Uses banker's rounding (round half to even) so repeated aggregation does
/// not drift in one direction.
#[must_use]
pub fn round_amount(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointNearestEven)
}

/// Rounds an exchange rate to the storage scale.
#[must_use]
pub fn round_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(RATE_SCALE, RoundingStrategy::MidpointNearestEven)
}

/// ISO 4217-style currency code (three ASCII uppercase letters).
///
/// Stored as a validated string rather than a closed enum: organizations
/// record documents in arbitrary currencies and the ledger core treats the
/// code as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        if code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()) {
            Ok(Self(code))
        } else {
            Err(format!("Invalid currency code: {s}"))
        }
    }
}

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount at [`AMOUNT_SCALE`] fractional digits.
    pub amount: Decimal,
    /// The currency the amount is denominated in.
    pub currency: CurrencyCode,
}

impl Money {
    /// Creates a new Money instance, rounding to the storage scale.
    #[must_use]
    pub fn new(amount: Decimal, currency: CurrencyCode) -> Self {
        Self {
            amount: round_amount(amount),
            currency,
        }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: CurrencyCode) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4} {}", self.amount, self.currency)
    }
}
