//! In-process [`SettingsStore`] used by tests and embedders without a disk.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::{DbError, SettingsStore, StoredValue};

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, StoredValue>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.lock().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values
            .lock()
            .map(|v| v.contains_key(key))
            .unwrap_or(false)
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<StoredValue>, DbError> {
        let values = self.values.lock().map_err(|_| DbError::LockPoisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &StoredValue) -> Result<(), DbError> {
        let mut values = self.values.lock().map_err(|_| DbError::LockPoisoned)?;
        values.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), DbError> {
        let mut values = self.values.lock().map_err(|_| DbError::LockPoisoned)?;
        values.remove(key);
        Ok(())
    }
}
