//! Core billing and ledger logic for Finvo.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `currency` - Conversion of original-currency amounts to the organization base currency
//! - `billing` - Line-item math and document totals for invoices and quotes
//! - `invoice` - Invoice entity, creation, and lifecycle status derivation
//! - `quote` - Quote entity and one-way conversion into an invoice
//! - `payment` - Payment ledger: total paid and outstanding balance
//! - `aging` - Accounts-receivable aging buckets
//! - `transaction` - Standalone income/expense entries
//! - `reports` - Read-time grouping and summation for dashboards

pub mod aging;
pub mod billing;
pub mod currency;
pub mod invoice;
pub mod payment;
pub mod quote;
pub mod reports;
pub mod transaction;
