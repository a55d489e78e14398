//! Report generation service.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;

use finvo_shared::types::{CategoryId, InvoiceId};

use crate::invoice::Invoice;
use crate::payment::{compute_outstanding, total_paid_base, Payment};
use crate::transaction::{Transaction, TransactionType};

use super::types::{
    BreakdownRow, ClientRevenueRow, MonthlyCashFlowRow, MonthlyInvoiceRow, ProductRevenue,
    ProductRevenueRow,
};

/// Month key (`YYYY-MM`) for a date.
fn month_key(date: chrono::NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Service for dashboard and report aggregation.
pub struct ReportService;

impl ReportService {
    /// Groups standalone transactions by calendar month, summing base
    /// amounts split by income and expense. Rows are sorted by month.
    #[must_use]
    pub fn monthly_cash_flow(transactions: &[Transaction]) -> Vec<MonthlyCashFlowRow> {
        let mut months: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();

        for transaction in transactions {
            let entry = months.entry(month_key(transaction.date)).or_default();
            match transaction.transaction_type {
                TransactionType::Income => entry.0 += transaction.base_amount,
                TransactionType::Expense => entry.1 += transaction.base_amount,
            }
        }

        months
            .into_iter()
            .map(|(month, (income, expense))| MonthlyCashFlowRow {
                month,
                income,
                expense,
                net: income - expense,
            })
            .collect()
    }

    /// Groups invoices by issue month, splitting the invoiced base total
    /// into collected and outstanding. Cancelled invoices are skipped;
    /// payments are matched to invoices by back-reference.
    #[must_use]
    pub fn monthly_invoice_totals(
        invoices: &[Invoice],
        payments: &[Payment],
    ) -> Vec<MonthlyInvoiceRow> {
        let mut by_invoice: HashMap<InvoiceId, Vec<Payment>> = HashMap::new();
        for payment in payments {
            by_invoice
                .entry(payment.invoice_id)
                .or_default()
                .push(payment.clone());
        }

        let mut months: BTreeMap<String, (Decimal, Decimal, Decimal)> = BTreeMap::new();

        for invoice in invoices {
            if invoice.status.is_terminal() {
                continue;
            }
            let paid = by_invoice
                .get(&invoice.id)
                .map_or(Decimal::ZERO, |p| total_paid_base(p));
            let outstanding = compute_outstanding(invoice.base_total, paid);

            let entry = months.entry(month_key(invoice.issue_date)).or_default();
            entry.0 += invoice.base_total;
            entry.1 += paid.min(invoice.base_total);
            entry.2 += outstanding;
        }

        months
            .into_iter()
            .map(|(month, (invoiced, paid, outstanding))| MonthlyInvoiceRow {
                month,
                invoiced,
                paid,
                outstanding,
            })
            .collect()
    }

    /// Groups standalone transactions by a resolved label, summing base
    /// amounts and counting entries. The caller supplies the foreign-key
    /// label resolution; rows are sorted by total descending, then label.
    #[must_use]
    pub fn category_breakdown<F>(transactions: &[Transaction], resolve_label: F) -> Vec<BreakdownRow>
    where
        F: Fn(Option<CategoryId>) -> String,
    {
        let mut labels: BTreeMap<String, (Decimal, usize)> = BTreeMap::new();

        for transaction in transactions {
            let entry = labels
                .entry(resolve_label(transaction.category_id))
                .or_default();
            entry.0 += transaction.base_amount;
            entry.1 += 1;
        }

        let mut rows: Vec<BreakdownRow> = labels
            .into_iter()
            .map(|(label, (total, count))| BreakdownRow { label, total, count })
            .collect();
        rows.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.label.cmp(&b.label)));
        rows
    }

    /// Ranks clients by invoiced revenue (base totals of non-cancelled
    /// invoices), descending. `limit` truncates the ranking; `None` returns
    /// the full, still ordered, list.
    #[must_use]
    pub fn top_clients(invoices: &[Invoice], limit: Option<usize>) -> Vec<ClientRevenueRow> {
        let mut revenue: HashMap<finvo_shared::types::ClientId, Decimal> = HashMap::new();

        for invoice in invoices {
            if invoice.status.is_terminal() {
                continue;
            }
            *revenue.entry(invoice.client_id).or_default() += invoice.base_total;
        }

        let mut rows: Vec<ClientRevenueRow> = revenue
            .into_iter()
            .map(|(client_id, revenue)| ClientRevenueRow { client_id, revenue })
            .collect();
        rows.sort_by(|a, b| {
            b.revenue
                .cmp(&a.revenue)
                .then_with(|| a.client_id.into_inner().cmp(&b.client_id.into_inner()))
        });
        if let Some(limit) = limit {
            rows.truncate(limit);
        }
        rows
    }

    /// Ranks products by revenue from caller-prepared, base-converted line
    /// observations, descending. `limit` as in [`Self::top_clients`].
    #[must_use]
    pub fn top_products(entries: &[ProductRevenue], limit: Option<usize>) -> Vec<ProductRevenueRow> {
        let mut revenue: HashMap<finvo_shared::types::ProductId, Decimal> = HashMap::new();

        for entry in entries {
            *revenue.entry(entry.product_id).or_default() += entry.base_amount;
        }

        let mut rows: Vec<ProductRevenueRow> = revenue
            .into_iter()
            .map(|(product_id, revenue)| ProductRevenueRow { product_id, revenue })
            .collect();
        rows.sort_by(|a, b| {
            b.revenue
                .cmp(&a.revenue)
                .then_with(|| a.product_id.into_inner().cmp(&b.product_id.into_inner()))
        });
        if let Some(limit) = limit {
            rows.truncate(limit);
        }
        rows
    }
}
