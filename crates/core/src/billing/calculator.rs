//! Pure line-item and document totals calculations.

use rust_decimal::Decimal;

use finvo_shared::types::round_amount;

use super::error::BillingError;
use super::types::{DocumentTotals, LineItem, LineItemInput};

/// Computes the derived amounts for a single line item.
///
/// `amount = quantity * unit_price`, `tax_amount = amount * tax_rate / 100`,
/// both rounded to the 4-digit storage scale so repeated reads are byte-stable.
#[must_use]
pub fn compute_line_item(input: &LineItemInput) -> LineItem {
    let amount = round_amount(input.quantity * input.unit_price);
    let tax_amount = round_amount(amount * input.tax_rate / Decimal::ONE_HUNDRED);

    LineItem {
        description: input.description.clone(),
        quantity: input.quantity,
        unit_price: input.unit_price,
        tax_rate: input.tax_rate,
        product_id: input.product_id,
        amount,
        tax_amount,
    }
}

/// Validates and computes all line items of a document.
///
/// # Errors
///
/// Returns a [`BillingError`] if the list is empty or any item carries a
/// negative quantity, unit price, or tax rate. Validation happens before any
/// amount is derived; the operation is never partially applied.
pub fn compute_line_items(inputs: &[LineItemInput]) -> Result<Vec<LineItem>, BillingError> {
    if inputs.is_empty() {
        return Err(BillingError::NoLineItems);
    }

    for (index, input) in inputs.iter().enumerate() {
        if input.quantity < Decimal::ZERO {
            return Err(BillingError::NegativeQuantity { index });
        }
        if input.unit_price < Decimal::ZERO {
            return Err(BillingError::NegativeUnitPrice { index });
        }
        if input.tax_rate < Decimal::ZERO {
            return Err(BillingError::NegativeTaxRate { index });
        }
    }

    Ok(inputs.iter().map(compute_line_item).collect())
}

/// Aggregates computed line items and document-level charges into totals.
///
/// `subtotal = Σ amount`, `items_tax = Σ tax_amount`,
/// `shipping_tax = shipping * shipping_tax_rate / 100`,
/// `total = subtotal + shipping + shipping_tax + items_tax - discount`.
///
/// Invoices pass `discount = 0` at creation; quotes pass their explicit
/// discount.
///
/// # Errors
///
/// Returns a [`BillingError`] if shipping, the shipping tax rate, or the
/// discount is negative.
pub fn compute_totals(
    items: &[LineItem],
    shipping: Decimal,
    shipping_tax_rate: Decimal,
    discount: Decimal,
) -> Result<DocumentTotals, BillingError> {
    if shipping < Decimal::ZERO {
        return Err(BillingError::NegativeShipping);
    }
    if shipping_tax_rate < Decimal::ZERO {
        return Err(BillingError::NegativeShippingTaxRate);
    }
    if discount < Decimal::ZERO {
        return Err(BillingError::NegativeDiscount);
    }

    let subtotal = round_amount(items.iter().map(|i| i.amount).sum());
    let items_tax = round_amount(items.iter().map(|i| i.tax_amount).sum());
    let shipping = round_amount(shipping);
    let shipping_tax = round_amount(shipping * shipping_tax_rate / Decimal::ONE_HUNDRED);
    let tax = items_tax + shipping_tax;
    let discount = round_amount(discount);
    let total = subtotal + shipping + tax - discount;

    Ok(DocumentTotals {
        subtotal,
        items_tax,
        shipping,
        shipping_tax,
        tax,
        discount,
        total,
    })
}
