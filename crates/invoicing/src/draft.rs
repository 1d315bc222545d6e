//! Invoice drafts and their submission payload.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use invoicer_clients::ClientDirectory;
use invoicer_core::{ClientId, Currency, DomainError, parse_number};

use crate::line_item::{LineItem, LineItemField, invoice_total, update_item};

/// Reasons a draft cannot be submitted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("please add at least one line item with a description")]
    EmptyInvoice,

    #[error("please select a client")]
    MissingClient,

    #[error("client {0} not found")]
    UnknownClient(ClientId),
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::validation(err.to_string())
    }
}

/// A line as sent to the store, with numeric quantity, price and line total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionItem {
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    /// `quantity * unit_price`, unrounded.
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl SubmissionItem {
    pub fn new(description: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            total: quantity.saturating_mul(unit_price),
        }
    }
}

/// Keep the lines that have a description and normalize their numbers.
///
/// A missing or unparsable quantity becomes 1, a missing or unparsable unit
/// price becomes 0.
pub fn prepare_submission(items: &[LineItem]) -> Result<Vec<SubmissionItem>, ValidationError> {
    let valid: Vec<SubmissionItem> = items
        .iter()
        .filter(|item| item.has_description())
        .map(|item| {
            SubmissionItem::new(
                item.description(),
                parse_number(item.quantity()).unwrap_or(Decimal::ONE),
                parse_number(item.unit_price()).unwrap_or(Decimal::ZERO),
            )
        })
        .collect();

    if valid.is_empty() {
        return Err(ValidationError::EmptyInvoice);
    }
    Ok(valid)
}

/// Payload for creating an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub client_id: ClientId,
    pub due_date: Option<NaiveDate>,
    pub currency: Currency,
    pub items: Vec<SubmissionItem>,
    /// Grand total, rounded to the currency's minor unit.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// An invoice being composed.
///
/// Always holds at least one line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDraft {
    items: Vec<LineItem>,
    pub client_id: Option<ClientId>,
    pub due_date: Option<NaiveDate>,
    pub currency: Currency,
}

impl InvoiceDraft {
    pub fn new() -> Self {
        Self {
            items: vec![LineItem::blank()],
            client_id: None,
            due_date: None,
            currency: Currency::default(),
        }
    }

    pub fn for_client(client_id: ClientId) -> Self {
        Self {
            client_id: Some(client_id),
            ..Self::new()
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Append a blank line.
    pub fn add_item(&mut self) -> &LineItem {
        self.items.push(LineItem::blank());
        &self.items[self.items.len() - 1]
    }

    /// Edit one field of the line at `index`. Returns `None` when there is no
    /// such line.
    pub fn update_item(
        &mut self,
        index: usize,
        field: LineItemField,
        value: impl Into<String>,
    ) -> Option<&LineItem> {
        let slot = self.items.get_mut(index)?;
        *slot = update_item(slot, field, value);
        Some(&*slot)
    }

    /// Remove the line at `index`.
    ///
    /// The last remaining line is never removed; that and an out-of-range
    /// index are no-ops reported as `false`.
    pub fn remove_item(&mut self, index: usize) -> bool {
        if self.items.len() <= 1 || index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        true
    }

    /// Running total shown while editing (unrounded).
    pub fn total(&self) -> Decimal {
        invoice_total(&self.items)
    }

    /// Validate the draft against the client snapshot and build the payload.
    ///
    /// Line totals are recomputed from the normalized quantity and price,
    /// which is what the store persists.
    pub fn submit(&self, clients: &ClientDirectory) -> Result<Submission, ValidationError> {
        let client_id = self.client_id.ok_or(ValidationError::MissingClient)?;
        if !clients.contains(client_id) {
            return Err(ValidationError::UnknownClient(client_id));
        }

        let items = prepare_submission(&self.items)?;
        let gross = items
            .iter()
            .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.total));

        tracing::debug!(
            client_id = %client_id,
            items = items.len(),
            dropped = self.items.len() - items.len(),
            "invoice draft submitted"
        );

        Ok(Submission {
            client_id,
            due_date: self.due_date,
            currency: self.currency.clone(),
            items,
            amount: self.currency.round(gross),
        })
    }
}

impl Default for InvoiceDraft {
    fn default() -> Self {
        Self::new()
    }
}
