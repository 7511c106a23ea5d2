use std::cell::RefCell;
use std::collections::HashMap;

use super::{SlotKey, SlotStore, StorageError};

/// In-process slot storage. Contents are lost when the value is dropped.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: RefCell<HashMap<SlotKey, String>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a slot with a raw payload, bypassing serialization.
    pub fn with_slot(self, key: SlotKey, value: impl Into<String>) -> Self {
        self.slots.borrow_mut().insert(key, value.into());
        self
    }

    pub fn contains(&self, key: SlotKey) -> bool {
        self.slots.borrow().contains_key(&key)
    }
}

impl SlotStore for MemorySlotStore {
    fn get(&self, key: SlotKey) -> Result<Option<String>, StorageError> {
        Ok(self.slots.borrow().get(&key).cloned())
    }

    fn set(&self, key: SlotKey, value: &str) -> Result<(), StorageError> {
        self.slots.borrow_mut().insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: SlotKey) -> Result<(), StorageError> {
        self.slots.borrow_mut().remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get_remove() {
        let store = MemorySlotStore::new();
        assert!(store.get(SlotKey::Goals).unwrap().is_none());

        store.set(SlotKey::Goals, "[]").unwrap();
        assert_eq!(store.get(SlotKey::Goals).unwrap().as_deref(), Some("[]"));

        store.remove(SlotKey::Goals).unwrap();
        assert!(!store.contains(SlotKey::Goals));
    }

    #[test]
    fn test_with_slot_seeds_payload() {
        let store = MemorySlotStore::new().with_slot(SlotKey::UserProfile, "not json");
        assert_eq!(
            store.get(SlotKey::UserProfile).unwrap().as_deref(),
            Some("not json")
        );
    }
}
