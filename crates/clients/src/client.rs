use serde::{Deserialize, Serialize};

use invoicer_core::{ClientId, DomainError, DomainResult, Entity};

/// A customer that invoices are issued to.
///
/// `ice` (common company identifier) and `if_number` (tax identifier) are the
/// Moroccan business registration numbers printed on invoices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ice: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub if_number: Option<String>,
}

impl Entity for Client {
    type Id = ClientId;

    fn id(&self) -> ClientId {
        self.id
    }
}

/// Command: RegisterClient.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegisterClient {
    pub name: String,
    pub phone: Option<String>,
    pub ice: Option<String>,
    pub if_number: Option<String>,
}

/// Command: UpdateClient. `None` keeps the current value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateClient {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub ice: Option<String>,
    pub if_number: Option<String>,
}

impl Client {
    /// Build a client record for an identifier assigned by the store.
    pub fn register(id: ClientId, cmd: RegisterClient) -> DomainResult<Self> {
        ensure_name(&cmd.name)?;
        Ok(Self {
            id,
            name: cmd.name.trim().to_string(),
            phone: non_blank(cmd.phone),
            ice: non_blank(cmd.ice),
            if_number: non_blank(cmd.if_number),
        })
    }

    /// Return the client with the provided fields replaced.
    pub fn updated(&self, cmd: UpdateClient) -> DomainResult<Self> {
        let name = match cmd.name {
            Some(name) => {
                ensure_name(&name)?;
                name.trim().to_string()
            }
            None => self.name.clone(),
        };

        Ok(Self {
            id: self.id,
            name,
            phone: cmd.phone.map_or_else(|| self.phone.clone(), |v| non_blank(Some(v))),
            ice: cmd.ice.map_or_else(|| self.ice.clone(), |v| non_blank(Some(v))),
            if_number: cmd
                .if_number
                .map_or_else(|| self.if_number.clone(), |v| non_blank(Some(v))),
        })
    }
}

fn ensure_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("client name cannot be empty"));
    }
    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
