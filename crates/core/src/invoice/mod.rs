//! Invoice entity, creation, and lifecycle status derivation.
//!
//! Status is written in exactly one place: the state machine in [`status`],
//! invoked on payment events and explicit user actions. Read paths (aging,
//! reports) never mutate status.

pub mod error;
pub mod service;
pub mod status;
pub mod types;

pub use error::InvoiceError;
pub use service::InvoiceService;
pub use status::compute_invoice_status;
pub use types::{CreateInvoiceInput, Invoice, InvoiceStatus};
