use core::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use invoicer_core::{ClientId, Currency, DomainError, DomainResult, Entity, InvoiceId};

use crate::draft::Submission;

/// Invoice status lifecycle.
///
/// Any status may move to any other, but only through an explicit command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Unpaid,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 3] = [Self::Unpaid, Self::Paid, Self::Overdue];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unpaid => "unpaid",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
        }
    }
}

impl core::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "unpaid" => Ok(Self::Unpaid),
            "paid" => Ok(Self::Paid),
            "overdue" => Ok(Self::Overdue),
            other => Err(DomainError::validation(format!("unknown invoice status: {other}"))),
        }
    }
}

/// Invoice record as held by the store.
///
/// Decoding is lenient: a missing or malformed `amount` is zero, malformed
/// dates are `None`, and an unrecognized status decodes to `status: None`.
/// Such records still count toward invoice totals but not toward any status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    #[serde(default, deserialize_with = "invoicer_core::lenient::or_default")]
    pub number: String,
    #[serde(default, deserialize_with = "invoicer_core::lenient::or_none")]
    pub client_id: Option<ClientId>,
    #[serde(
        default,
        deserialize_with = "invoicer_core::lenient::amount",
        serialize_with = "rust_decimal::serde::float::serialize"
    )]
    pub amount: Decimal,
    #[serde(default, deserialize_with = "invoicer_core::lenient::or_default")]
    pub currency: Currency,
    #[serde(default, deserialize_with = "invoicer_core::lenient::or_none")]
    pub status: Option<InvoiceStatus>,
    #[serde(default, deserialize_with = "invoicer_core::lenient::timestamp")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "invoicer_core::lenient::date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "invoicer_core::lenient::or_default")]
    pub items_count: u32,
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> InvoiceId {
        self.id
    }
}

impl Invoice {
    /// Build the stored record for a submitted draft. New invoices are unpaid.
    pub fn issue(
        id: InvoiceId,
        number: impl Into<String>,
        submission: &Submission,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            number: number.into(),
            client_id: Some(submission.client_id),
            amount: submission.amount,
            currency: submission.currency.clone(),
            status: Some(InvoiceStatus::Unpaid),
            created_at: Some(created_at),
            due_date: submission.due_date,
            items_count: u32::try_from(submission.items.len()).unwrap_or(u32::MAX),
        }
    }

    /// Replace the financial content with a resubmitted draft.
    ///
    /// `id`, `number`, `created_at` and `status` are kept; the client must
    /// already have been checked by [`InvoiceDraft::submit`](crate::InvoiceDraft::submit).
    pub fn revise(&mut self, submission: &Submission) {
        self.client_id = Some(submission.client_id);
        self.due_date = submission.due_date;
        self.currency = submission.currency.clone();
        self.amount = submission.amount;
        self.items_count = u32::try_from(submission.items.len()).unwrap_or(u32::MAX);

        tracing::debug!(invoice_id = %self.id, amount = %self.amount, "invoice revised");
    }

    pub fn has_status(&self, status: InvoiceStatus) -> bool {
        self.status == Some(status)
    }

    pub fn is_paid(&self) -> bool {
        self.has_status(InvoiceStatus::Paid)
    }

    /// Unpaid with a due date strictly before `today`.
    pub fn is_past_due(&self, today: NaiveDate) -> bool {
        self.has_status(InvoiceStatus::Unpaid) && self.due_date.is_some_and(|due| due < today)
    }
}

/// Command: ChangeStatus (the "mark as paid / unpaid" action).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeStatus {
    pub invoice_id: InvoiceId,
    pub status: InvoiceStatus,
}

/// Command: MarkOverdue, issued by the overdue sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkOverdue {
    pub invoice_id: InvoiceId,
    pub as_of: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InvoiceCommand {
    ChangeStatus(ChangeStatus),
    MarkOverdue(MarkOverdue),
}

/// Event: StatusChanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChanged {
    pub invoice_id: InvoiceId,
    pub from: Option<InvoiceStatus>,
    pub to: InvoiceStatus,
}

impl Invoice {
    /// Decide the status change a command causes.
    ///
    /// Does not mutate; `apply` the returned event to change the record.
    pub fn handle(&self, command: &InvoiceCommand) -> DomainResult<StatusChanged> {
        match command {
            InvoiceCommand::ChangeStatus(cmd) => self.handle_change_status(cmd),
            InvoiceCommand::MarkOverdue(cmd) => self.handle_mark_overdue(cmd),
        }
    }

    pub fn apply(&mut self, event: &StatusChanged) {
        if event.invoice_id == self.id {
            self.status = Some(event.to);
        }
    }

    fn ensure_invoice_id(&self, invoice_id: InvoiceId) -> DomainResult<()> {
        if self.id != invoice_id {
            return Err(DomainError::invariant("invoice_id mismatch"));
        }
        Ok(())
    }

    fn handle_change_status(&self, cmd: &ChangeStatus) -> DomainResult<StatusChanged> {
        self.ensure_invoice_id(cmd.invoice_id)?;

        if cmd.status == InvoiceStatus::Overdue {
            return Err(DomainError::validation(
                "status must be \"paid\" or \"unpaid\"",
            ));
        }

        Ok(StatusChanged {
            invoice_id: self.id,
            from: self.status,
            to: cmd.status,
        })
    }

    fn handle_mark_overdue(&self, cmd: &MarkOverdue) -> DomainResult<StatusChanged> {
        self.ensure_invoice_id(cmd.invoice_id)?;

        if !self.is_past_due(cmd.as_of) {
            return Err(DomainError::invariant("invoice is not past due"));
        }

        Ok(StatusChanged {
            invoice_id: self.id,
            from: self.status,
            to: InvoiceStatus::Overdue,
        })
    }
}

/// Commands that move every past-due unpaid invoice to overdue.
///
/// This is the store-side overdue job; dashboard aggregation never calls it.
pub fn overdue_sweep(invoices: &[Invoice], today: NaiveDate) -> Vec<InvoiceCommand> {
    invoices
        .iter()
        .filter(|inv| inv.is_past_due(today))
        .map(|inv| {
            InvoiceCommand::MarkOverdue(MarkOverdue {
                invoice_id: inv.id(),
                as_of: today,
            })
        })
        .collect()
}

/// Number for the next invoice.
///
/// Invoice numbers are sequential decimal strings. The next one follows the
/// most recently created invoice (highest id); if that number is not numeric,
/// it follows the greatest numeric number instead.
pub fn next_invoice_number(invoices: &[Invoice]) -> String {
    let parse = |inv: &Invoice| inv.number.trim().parse::<u64>().ok();

    let last = invoices.iter().max_by_key(|inv| inv.id).and_then(parse);
    let base = last.or_else(|| invoices.iter().filter_map(parse).max());

    match base {
        Some(n) => n.saturating_add(1).to_string(),
        None => "1".to_string(),
    }
}
