//! Quote entity and one-way conversion into an invoice.
//!
//! A quote is converted at most once: conversion copies its financial
//! snapshot into a new invoice and permanently links the two. A second
//! conversion attempt fails loudly and creates nothing.

pub mod error;
pub mod service;
pub mod types;

pub use error::QuoteError;
pub use service::{ConvertQuoteInput, QuoteService};
pub use types::{CreateQuoteInput, Quote, QuoteStatus};
