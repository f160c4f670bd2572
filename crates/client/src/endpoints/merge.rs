//! Lookup helpers for the read-modify-write update pattern.
//!
//! Invariants:
//! - Ids are compared as integers; `"100"` and `100` match the same entity.
//! - A missing entity is reported as `Ok(None)` so the caller can raise
//!   `NotFound` before any write is issued.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::endpoints::request::Envelope;
use crate::error::{ClientError, Result};

/// Integer id of a JSON entity, accepting numbers or numeric strings.
pub(crate) fn entity_id(entity: &Value) -> Option<u64> {
    match entity.get("id")? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Find the entity with `id` in `envelope[collection]` and decode it.
pub(crate) fn find_entity<T: DeserializeOwned>(
    envelope: &Envelope,
    collection: &str,
    id: u64,
) -> Result<Option<T>> {
    let items = envelope
        .get(collection)
        .and_then(Value::as_array)
        .ok_or_else(|| {
            ClientError::InvalidResponse(format!("missing '{}' array in response", collection))
        })?;

    let Some(entity) = items.iter().find(|item| entity_id(item) == Some(id)) else {
        tracing::debug!(collection, id, "Entity not present in fetched collection");
        return Ok(None);
    };

    tracing::debug!(collection, id, "Found entity for merge-update");
    serde_json::from_value(entity.clone())
        .map(Some)
        .map_err(|e| ClientError::InvalidResponse(format!("failed to parse {}: {}", collection, e)))
}

/// Decode the single entity under `envelope[key]` (a `show` response).
pub(crate) fn take_entity<T: DeserializeOwned>(mut envelope: Envelope, key: &str) -> Result<T> {
    let entity = envelope
        .remove(key)
        .ok_or_else(|| ClientError::InvalidResponse(format!("missing '{}' in response", key)))?;

    serde_json::from_value(entity)
        .map_err(|e| ClientError::InvalidResponse(format!("failed to parse {}: {}", key, e)))
}
