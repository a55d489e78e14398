//! Standalone income/expense entries not tied to an invoice.

pub mod error;
pub mod service;
pub mod types;

pub use error::TransactionError;
pub use service::TransactionService;
pub use types::{CreateTransactionInput, Transaction, TransactionType};
