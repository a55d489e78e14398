//! Quote creation and one-way conversion into an invoice.

use chrono::NaiveDate;

use finvo_shared::types::{round_rate, InvoiceId, QuoteId};

use crate::billing::{compute_line_items, compute_totals};
use crate::currency::{convert_to_base, validate_exchange_rate};
use crate::invoice::{Invoice, InvoiceError, InvoiceStatus};

use super::error::QuoteError;
use super::types::{CreateQuoteInput, Quote, QuoteStatus};

/// Input for converting an approved quote into an invoice.
#[derive(Debug, Clone)]
pub struct ConvertQuoteInput {
    /// Invoice number to assign (must be non-empty).
    pub invoice_number: String,
    /// Issue date of the new invoice.
    pub issue_date: NaiveDate,
    /// Due date of the new invoice.
    pub due_date: NaiveDate,
}

/// Quote service for creation and conversion.
pub struct QuoteService;

impl QuoteService {
    /// Validates input and builds a quote with every derived monetary field
    /// pre-computed. Unlike invoices, quotes carry an explicit discount at
    /// creation.
    ///
    /// # Errors
    ///
    /// Returns `QuoteError` if validation fails; the operation is never
    /// partially applied.
    pub fn create(input: CreateQuoteInput) -> Result<Quote, QuoteError> {
        if input.quote_number.trim().is_empty() {
            return Err(QuoteError::EmptyQuoteNumber);
        }
        if input.valid_until < input.issue_date {
            return Err(QuoteError::ValidUntilBeforeIssue);
        }
        validate_exchange_rate(input.exchange_rate)?;

        let line_items = compute_line_items(&input.line_items)?;
        let totals = compute_totals(
            &line_items,
            input.shipping,
            input.shipping_tax_rate,
            input.discount,
        )?;

        let exchange_rate = round_rate(input.exchange_rate);
        let base_total = convert_to_base(totals.total, exchange_rate);

        let quote = Quote {
            id: QuoteId::new(),
            organization_id: input.organization_id,
            client_id: input.client_id,
            quote_number: input.quote_number,
            original_currency: input.original_currency,
            exchange_rate,
            totals,
            base_total,
            issue_date: input.issue_date,
            valid_until: input.valid_until,
            status: QuoteStatus::Draft,
            converted_invoice_id: None,
            line_items,
        };

        tracing::debug!(
            quote_id = %quote.id,
            organization_id = %quote.organization_id,
            total = %quote.totals.total,
            "quote created"
        );

        Ok(quote)
    }

    /// Converts a quote into a new invoice, at most once.
    ///
    /// Copies the quote's financial snapshot (totals, base total, exchange
    /// rate, line items) into the invoice rather than referencing live items,
    /// marks the quote `Converted`, and links it to the created invoice.
    /// The returned pair must be persisted together; re-running the
    /// conversion on the updated quote fails without creating a duplicate.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::AlreadyConverted`] if the quote was converted
    /// before (status or link already set), or a validation error for the
    /// invoice parameters.
    pub fn convert_to_invoice(
        quote: &Quote,
        input: ConvertQuoteInput,
    ) -> Result<(Quote, Invoice), QuoteError> {
        if quote.status == QuoteStatus::Converted || quote.converted_invoice_id.is_some() {
            return Err(QuoteError::AlreadyConverted(quote.id));
        }
        if input.invoice_number.trim().is_empty() {
            return Err(QuoteError::Invoice(InvoiceError::EmptyInvoiceNumber));
        }
        if input.due_date < input.issue_date {
            return Err(QuoteError::Invoice(InvoiceError::DueBeforeIssue));
        }

        let invoice = Invoice {
            id: InvoiceId::new(),
            organization_id: quote.organization_id,
            client_id: quote.client_id,
            invoice_number: input.invoice_number,
            original_currency: quote.original_currency.clone(),
            exchange_rate: quote.exchange_rate,
            totals: quote.totals.clone(),
            base_total: quote.base_total,
            issue_date: input.issue_date,
            due_date: input.due_date,
            status: InvoiceStatus::Draft,
            line_items: quote.line_items.clone(),
        };

        let mut converted = quote.clone();
        converted.status = QuoteStatus::Converted;
        converted.converted_invoice_id = Some(invoice.id);

        tracing::info!(
            quote_id = %quote.id,
            invoice_id = %invoice.id,
            "quote converted to invoice"
        );

        Ok((converted, invoice))
    }
}
