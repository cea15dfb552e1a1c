use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::backend::interface::{Result, StorageBackend, StoreError};

/// In-process key-value store. Clones share the same underlying map,
/// which lets a test hand the store to the gateway and inspect what was
/// written afterwards.
#[derive(Clone, Default)]
pub struct MemoryStore {
    cells: Arc<Mutex<HashMap<String, String>>>
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        return MemoryStore::default();
    }
}

impl StorageBackend for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let cells = self
            .cells
            .lock()
            .map_err(|_| StoreError::Unavailable("store mutex poisoned".to_owned()))?;
        return Ok(cells.get(key).cloned());
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut cells = self
            .cells
            .lock()
            .map_err(|_| StoreError::Unavailable("store mutex poisoned".to_owned()))?;
        cells.insert(key.to_owned(), value.to_owned());
        return Ok(());
    }
}
