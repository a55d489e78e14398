//! Standalone transaction creation.

use rust_decimal::Decimal;

use finvo_shared::types::{round_amount, round_rate, TransactionId};

use crate::currency::{convert_to_base, validate_exchange_rate};

use super::error::TransactionError;
use super::types::{CreateTransactionInput, Transaction};

/// Service for standalone income/expense entries.
pub struct TransactionService;

impl TransactionService {
    /// Validates input and builds a transaction with `base_amount` derived.
    ///
    /// # Errors
    ///
    /// Returns `TransactionError` if the description is empty, the amount is
    /// not positive, or the exchange rate is invalid.
    pub fn create(input: CreateTransactionInput) -> Result<Transaction, TransactionError> {
        if input.description.trim().is_empty() {
            return Err(TransactionError::EmptyDescription);
        }
        if input.original_amount <= Decimal::ZERO {
            return Err(TransactionError::NonPositiveAmount);
        }
        validate_exchange_rate(input.exchange_rate)?;

        let exchange_rate = round_rate(input.exchange_rate);
        let original_amount = round_amount(input.original_amount);

        let transaction = Transaction {
            id: TransactionId::new(),
            organization_id: input.organization_id,
            transaction_type: input.transaction_type,
            description: input.description,
            original_amount,
            original_currency: input.original_currency,
            exchange_rate,
            base_amount: convert_to_base(original_amount, exchange_rate),
            date: input.date,
            category_id: input.category_id,
        };

        tracing::debug!(
            transaction_id = %transaction.id,
            organization_id = %transaction.organization_id,
            base_amount = %transaction.base_amount,
            "transaction created"
        );

        Ok(transaction)
    }
}
