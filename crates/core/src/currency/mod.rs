//! Conversion of original-currency amounts to the organization base currency.

pub mod conversion;
pub mod error;

#[cfg(test)]
mod props;

pub use conversion::{convert_to_base, validate_exchange_rate};
pub use error::CurrencyError;
