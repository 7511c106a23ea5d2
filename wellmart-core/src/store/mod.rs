//! Client state stores.
//!
//! Each store owns its collections in memory and mirrors every mutation to
//! a durable slot: compute the new collection, replace the in-memory copy,
//! then serialize and write the whole collection. Slots are read once, when
//! the store is hydrated.

mod cart;
mod wellness;

pub use cart::CartStore;
pub use wellness::WellnessStore;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::{SlotKey, SlotStore, StorageError};

/// Reads and decodes a slot.
///
/// Missing, unreadable and malformed slots all come back as `None`.
fn load_slot<S, T>(slots: &S, key: SlotKey) -> Option<T>
where
    S: SlotStore,
    T: DeserializeOwned,
{
    let raw = match slots.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(slot = %key, "slot empty, using default");
            return None;
        }
        Err(e) => {
            tracing::warn!(slot = %key, error = %e, "slot unreadable, using default");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(slot = %key, error = %e, "discarding malformed slot");
            None
        }
    }
}

/// Serializes `value` and replaces the slot with it.
fn save_slot<S, T>(slots: &S, key: SlotKey, value: &T) -> Result<(), StorageError>
where
    S: SlotStore,
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string(value).map_err(|e| StorageError::Serialize(key, e))?;
    slots.set(key, &json).map_err(|e| {
        tracing::error!(slot = %key, error = %e, "failed to persist slot");
        e
    })?;
    tracing::debug!(slot = %key, bytes = json.len(), "slot written");
    Ok(())
}
