//! Subcommand execution against a loaded snapshot.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use serde_json::{Value, json};

use invoicer_clients::ClientDirectory;
use invoicer_core::{DomainError, find_by_id};
use invoicer_dashboard::{
    DashboardView, filter_by_status, monthly_revenue, month_over_month_trends, summarize,
};
use invoicer_invoicing::{Invoice, next_invoice_number, overdue_sweep};

use crate::config::Command;
use crate::snapshot::Snapshot;

/// Invoice list row: the stored record plus the resolved client name.
#[derive(Debug, Serialize)]
struct InvoiceRow<'a> {
    #[serde(flatten)]
    invoice: &'a Invoice,
    client_name: &'a str,
}

impl<'a> InvoiceRow<'a> {
    fn new(invoice: &'a Invoice, directory: &'a ClientDirectory) -> Self {
        let client_name = invoice
            .client_id
            .map(|id| directory.name_of(id))
            .unwrap_or("");
        Self {
            invoice,
            client_name,
        }
    }
}

/// Run one subcommand and return its JSON output.
pub fn execute(command: &Command, snapshot: &Snapshot, as_of: NaiveDate) -> anyhow::Result<Value> {
    let invoices = snapshot.invoices.as_slice();
    tracing::debug!(?command, %as_of, invoices = invoices.len(), "executing command");

    let value = match command {
        Command::Summary => serde_json::to_value(summarize(invoices))?,
        Command::Invoices { status } => {
            let directory = snapshot.directory();
            let rows: Vec<InvoiceRow<'_>> = filter_by_status(invoices, *status)
                .map(|invoice| InvoiceRow::new(invoice, &directory))
                .collect();
            serde_json::to_value(rows)?
        }
        Command::Show { id } => {
            let invoice = find_by_id(invoices, *id)
                .ok_or_else(|| DomainError::not_found(format!("invoice {id}")))?;
            let directory = snapshot.directory();
            serde_json::to_value(InvoiceRow::new(invoice, &directory))?
        }
        Command::MonthlyRevenue { year } => {
            serde_json::to_value(monthly_revenue(invoices, year.unwrap_or(as_of.year())))?
        }
        Command::Trends => serde_json::to_value(month_over_month_trends(invoices, as_of))?,
        Command::Overdue => serde_json::to_value(overdue_sweep(invoices, as_of))?,
        Command::Dashboard => serde_json::to_value(DashboardView::build(invoices, as_of))?,
        Command::NextNumber => json!({ "next_number": next_invoice_number(invoices) }),
    };
    Ok(value)
}
