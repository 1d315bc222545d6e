//! Command-line configuration.
//!
//! Every option can also come from the environment (or a `.env` file loaded
//! at startup).

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use invoicer_core::InvoiceId;
use invoicer_invoicing::InvoiceStatus;

#[derive(Debug, Clone, Parser)]
#[command(name = "invoicer", version, about = "Dashboard figures from an invoice snapshot")]
pub struct Cli {
    /// JSON file with `invoices` and `clients` arrays.
    #[arg(long, env = "INVOICER_SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Reporting date (YYYY-MM-DD); defaults to today on the local clock.
    #[arg(long, env = "INVOICER_AS_OF")]
    pub as_of: Option<NaiveDate>,

    /// Pretty-print the JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Invoice counts by status and paid revenue.
    Summary,
    /// Invoice list, optionally filtered by status.
    Invoices {
        #[arg(long)]
        status: Option<InvoiceStatus>,
    },
    /// One invoice by id.
    Show { id: InvoiceId },
    /// Paid revenue per month of a year.
    MonthlyRevenue {
        /// Defaults to the year of the reporting date.
        #[arg(long)]
        year: Option<i32>,
    },
    /// Month-over-month trends relative to the reporting date.
    Trends,
    /// Status changes the overdue sweep would issue on the reporting date.
    Overdue,
    /// Summary, monthly revenue and trends together.
    Dashboard,
    /// Number the next invoice would get.
    NextNumber,
}
