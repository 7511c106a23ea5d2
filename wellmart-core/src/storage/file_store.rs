use std::fs;
use std::io;
use std::path::PathBuf;

use super::{SlotKey, SlotStore, StorageError};

/// Slot storage backed by one JSON file per slot.
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    data_dir: PathBuf,
}

impl FileSlotStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Returns the full path for a slot.
    pub fn path(&self, key: SlotKey) -> PathBuf {
        self.data_dir.join(key.filename())
    }

    pub fn exists(&self, key: SlotKey) -> bool {
        self.path(key).exists()
    }
}

impl SlotStore for FileSlotStore {
    fn get(&self, key: SlotKey) -> Result<Option<String>, StorageError> {
        let path = self.path(key);

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(path, e)),
        }
    }

    /// Creates the data directory on first write.
    fn set(&self, key: SlotKey, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir)
            .map_err(|e| StorageError::Io(self.data_dir.clone(), e))?;

        let path = self.path(key);
        fs::write(&path, value).map_err(|e| StorageError::Io(path, e))
    }

    fn remove(&self, key: SlotKey) -> Result<(), StorageError> {
        let path = self.path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(path, e)),
        }
    }
}
