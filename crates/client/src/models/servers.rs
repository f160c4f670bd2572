//! Server models used by the merge-update of `servers/{id}.json`.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::u64_from_string_or_number;

/// A server as returned by `servers/{id}.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Server {
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub id: u64,
    pub name: String,
}

/// Fields to change on a server. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct ServerUpdate {
    pub name: Option<String>,
}

/// Write body for `PUT servers/{id}.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerBody {
    pub name: String,
}

#[derive(Serialize)]
pub(crate) struct ServerEnvelope<'a> {
    pub server: &'a ServerBody,
}

impl ServerBody {
    /// Overlay `update` onto the fetched server.
    pub fn merge(existing: Server, update: ServerUpdate) -> Self {
        Self {
            name: update.name.unwrap_or(existing.name),
        }
    }
}
