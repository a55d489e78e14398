//! Read-time grouping and summation for dashboards and reports.
//!
//! Every function here is a pure projection over already-loaded entities.
//! All sums are over values already converted to base currency at creation
//! time; the aggregator never converts currencies itself, which keeps
//! double-conversion bugs structurally impossible.

pub mod service;
pub mod types;


pub use service::ReportService;
pub use types::{
    BreakdownRow, ClientRevenueRow, MonthlyCashFlowRow, MonthlyInvoiceRow, ProductRevenue,
    ProductRevenueRow,
};
