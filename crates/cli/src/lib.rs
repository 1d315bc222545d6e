//! `invoicer` command-line front end.
//!
//! Loads an invoice/client snapshot exported from the store and prints the
//! dashboard figures derived from it as JSON.

pub mod commands;
pub mod config;
pub mod snapshot;

use chrono::Local;

pub use commands::execute;
pub use config::{Cli, Command};
pub use snapshot::Snapshot;

/// Load the snapshot named by `cli`, run its subcommand and render the output.
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let snapshot = Snapshot::load(&cli.snapshot)?;
    let as_of = cli.as_of.unwrap_or_else(|| Local::now().date_naive());

    let output = execute(&cli.command, &snapshot, as_of)?;
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    Ok(rendered)
}
