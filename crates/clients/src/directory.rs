use std::collections::HashMap;

use invoicer_core::{ClientId, Entity};

use crate::client::Client;

/// Read-only lookup over a client snapshot.
///
/// Keeps the snapshot order for iteration. When the snapshot repeats an id,
/// the first record wins.
#[derive(Debug, Clone, Default)]
pub struct ClientDirectory {
    clients: Vec<Client>,
    index: HashMap<ClientId, usize>,
}

impl ClientDirectory {
    pub fn new(clients: impl IntoIterator<Item = Client>) -> Self {
        let mut directory = Self::default();
        for client in clients {
            let id = client.id();
            if directory.index.contains_key(&id) {
                tracing::debug!(client_id = %id, "duplicate client record ignored");
                continue;
            }
            directory.index.insert(id, directory.clients.len());
            directory.clients.push(client);
        }
        directory
    }

    pub fn get(&self, id: ClientId) -> Option<&Client> {
        self.index.get(&id).map(|&i| &self.clients[i])
    }

    pub fn contains(&self, id: ClientId) -> bool {
        self.index.contains_key(&id)
    }

    /// Display name for an invoice row; empty when the client is unknown.
    pub fn name_of(&self, id: ClientId) -> &str {
        self.get(id).map(|c| c.name.as_str()).unwrap_or("")
    }

    pub fn iter(&self) -> impl Iterator<Item = &Client> {
        self.clients.iter()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

impl FromIterator<Client> for ClientDirectory {
    fn from_iter<I: IntoIterator<Item = Client>>(iter: I) -> Self {
        Self::new(iter)
    }
}
