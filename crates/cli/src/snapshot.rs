//! Loading the invoice/client snapshot handed over by the store.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use invoicer_clients::{Client, ClientDirectory};
use invoicer_invoicing::Invoice;

/// Records fetched from the store, as one JSON document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default, deserialize_with = "records")]
    pub invoices: Vec<Invoice>,
    #[serde(default, deserialize_with = "records")]
    pub clients: Vec<Client>,
}

impl Snapshot {
    pub fn from_reader(reader: impl Read) -> anyhow::Result<Self> {
        serde_json::from_reader(reader).context("snapshot is not a valid JSON document")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open snapshot {}", path.display()))?;
        let snapshot = Self::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to read snapshot {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            invoices = snapshot.invoices.len(),
            clients = snapshot.clients.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    pub fn directory(&self) -> ClientDirectory {
        self.clients.iter().cloned().collect()
    }
}

/// Decode a record list, skipping records that cannot be decoded at all
/// (for instance a missing `id`).
fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(error) => {
                tracing::warn!(index, %error, "skipping malformed record");
                None
            }
        })
        .collect())
}
