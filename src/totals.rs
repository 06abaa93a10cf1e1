//! Line item aggregation.
//!
//! Pure reduction of line items plus a flat discount into the monetary
//! fields persisted on an invoice. No rounding happens here: stored totals
//! keep full precision, and only the display layer rounds.

use crate::error::AppError;
use crate::models::LineItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monetary aggregates frozen onto an invoice at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub subtotal: Decimal,
    pub total_tax: Decimal,
    /// `subtotal + total_tax - discount`. Not clamped: a discount larger
    /// than subtotal plus tax yields a negative total.
    pub total: Decimal,
}

/// Reduce line items and a flat discount into invoice totals.
///
/// Summation is order-independent and an empty list yields zero subtotal and
/// tax (so `total == -discount`).
pub fn aggregate(line_items: &[LineItem], discount: Decimal) -> InvoiceTotals {
    let subtotal: Decimal = line_items
        .iter()
        .map(|item| item.quantity * item.unit_price)
        .sum();
    let total_tax: Decimal = line_items
        .iter()
        .map(|item| item.quantity * item.unit_price * item.tax_rate / Decimal::ONE_HUNDRED)
        .sum();

    InvoiceTotals {
        subtotal,
        total_tax,
        total: subtotal + total_tax - discount,
    }
}

/// Validate line items and discount, then aggregate.
///
/// Quantity, price, and tax bounds are submission constraints; a violation
/// rejects the single invoice being created and names the offending field.
pub fn validate_and_aggregate(
    line_items: &[LineItem],
    discount: Decimal,
) -> Result<InvoiceTotals, AppError> {
    for item in line_items {
        item.validate()?;
    }
    if discount < Decimal::ZERO {
        return Err(AppError::validation(
            "discount",
            format!("discount must not be negative, got {discount}"),
        ));
    }
    Ok(aggregate(line_items, discount))
}
