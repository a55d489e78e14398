//! Common types used across the application.

pub mod id;
pub mod money;

pub use id::*;
pub use money::{
    round_amount, round_rate, CurrencyCode, Money, AMOUNT_SCALE, MIN_AMOUNT_UNIT, RATE_SCALE,
};
