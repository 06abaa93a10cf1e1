//! Line item model for invoicing-core.

use crate::error::AppError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One billable row of an invoice.
///
/// Monetary aggregates are derived by [`crate::totals::aggregate`]; nothing on
/// the line item itself is computed or cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quantity: Decimal,
    #[serde(default)]
    pub unit_price: Decimal,
    /// Tax percentage in `[0, 100]`.
    #[serde(default)]
    pub tax_rate: Decimal,
}

impl LineItem {
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            tax_rate,
        }
    }

    /// Tax-inclusive total for this row alone. Derived, never persisted.
    pub fn line_total(&self) -> Decimal {
        self.quantity * self.unit_price * (Decimal::ONE + self.tax_rate / Decimal::ONE_HUNDRED)
    }

    /// Validate submission constraints. The first violation wins and names
    /// the offending field.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.description.trim().is_empty() {
            return Err(AppError::validation(
                "description",
                "description must not be empty",
            ));
        }
        if self.quantity < Decimal::ZERO {
            return Err(AppError::validation(
                "quantity",
                format!("quantity must not be negative, got {}", self.quantity),
            ));
        }
        if self.unit_price < Decimal::ZERO {
            return Err(AppError::validation(
                "unit_price",
                format!("unit price must not be negative, got {}", self.unit_price),
            ));
        }
        if self.tax_rate < Decimal::ZERO || self.tax_rate > Decimal::ONE_HUNDRED {
            return Err(AppError::validation(
                "tax_rate",
                format!("tax rate must be between 0 and 100, got {}", self.tax_rate),
            ));
        }
        Ok(())
    }
}
