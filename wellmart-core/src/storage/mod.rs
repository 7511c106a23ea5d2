//! Durable key-value slots.
//!
//! A slot is a named location holding one serialized JSON value that
//! survives across sessions. Stores mirror their collections into slots;
//! the slots themselves have no lifecycle of their own.
//!
//! # Backends
//!
//! - [`FileSlotStore`]: one `<key>.json` file per slot in a data directory
//! - [`MemorySlotStore`]: process-local map, used by tests and throwaway
//!   sessions

mod file_store;
mod memory_store;
mod slot_key;

pub use file_store::FileSlotStore;
pub use memory_store::MemorySlotStore;
pub use slot_key::SlotKey;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a slot backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error for {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] io::Error),
    #[error("Failed to serialize slot '{0}': {1}")]
    Serialize(SlotKey, #[source] serde_json::Error),
}

/// Read/write access to durable slots.
///
/// Writes replace the whole slot; whoever writes last wins.
pub trait SlotStore {
    /// Returns the raw payload, or `None` if the slot was never written.
    fn get(&self, key: SlotKey) -> Result<Option<String>, StorageError>;

    /// Replaces the slot's payload.
    fn set(&self, key: SlotKey, value: &str) -> Result<(), StorageError>;

    /// Deletes the slot. Removing a missing slot is not an error.
    fn remove(&self, key: SlotKey) -> Result<(), StorageError>;
}

impl<S: SlotStore + ?Sized> SlotStore for &S {
    fn get(&self, key: SlotKey) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: SlotKey, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: SlotKey) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
