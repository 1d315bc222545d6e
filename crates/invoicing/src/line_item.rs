//! Line items as edited on an invoice form.
//!
//! Quantity and unit price are kept exactly as typed so a half-typed value
//! (`""`, `"1."`, `"abc"`) survives editing; the numeric total is derived from
//! them and is never set on its own.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use invoicer_core::parse_number;

/// Editable field of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemField {
    Description,
    Quantity,
    UnitPrice,
}

/// Invoice line item under edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    description: String,
    quantity: String,
    unit_price: String,
    #[serde(with = "rust_decimal::serde::float")]
    total: Decimal,
}

impl LineItem {
    pub fn new(
        description: impl Into<String>,
        quantity: impl Into<String>,
        unit_price: impl Into<String>,
    ) -> Self {
        let quantity = quantity.into();
        let unit_price = unit_price.into();
        let total = line_total(&quantity, &unit_price);
        Self {
            description: description.into(),
            quantity,
            unit_price,
            total,
        }
    }

    /// The line a new form row starts with: no description, one unit at zero.
    pub fn blank() -> Self {
        Self::new("", "1", "0")
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn unit_price(&self) -> &str {
        &self.unit_price
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Whether the line counts toward a submitted invoice.
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }

    /// Return a copy with one field replaced.
    pub fn with(&self, field: LineItemField, value: impl Into<String>) -> Self {
        update_item(self, field, value)
    }
}

impl Default for LineItem {
    fn default() -> Self {
        Self::blank()
    }
}

/// Set a field on a copy of `item`.
///
/// Changing quantity or unit price re-derives the total from the latest
/// values; unparsable text counts as zero.
pub fn update_item(item: &LineItem, field: LineItemField, value: impl Into<String>) -> LineItem {
    let mut updated = item.clone();
    let value = value.into();
    match field {
        LineItemField::Description => updated.description = value,
        LineItemField::Quantity => updated.quantity = value,
        LineItemField::UnitPrice => updated.unit_price = value,
    }
    if matches!(field, LineItemField::Quantity | LineItemField::UnitPrice) {
        updated.total = line_total(&updated.quantity, &updated.unit_price);
    }
    updated
}

/// Sum of line totals. An empty list totals zero.
pub fn invoice_total(items: &[LineItem]) -> Decimal {
    items
        .iter()
        .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.total))
}

fn line_total(quantity: &str, unit_price: &str) -> Decimal {
    let quantity = parse_number(quantity).unwrap_or(Decimal::ZERO);
    let unit_price = parse_number(unit_price).unwrap_or(Decimal::ZERO);
    quantity.saturating_mul(unit_price)
}
