//! SQLite-backed [`SettingsStore`] bound to one suite.

use crate::{Database, DbError, SettingsStore, StoredValue};

/// A view of the settings table restricted to a single suite name.
#[derive(Clone)]
pub struct SuiteStore {
    db: Database,
    suite: String,
}

impl SuiteStore {
    pub fn new(db: Database, suite: impl Into<String>) -> Self {
        Self {
            db,
            suite: suite.into(),
        }
    }

    pub fn suite(&self) -> &str {
        &self.suite
    }

    pub fn keys(&self) -> Result<Vec<String>, DbError> {
        self.db.list_keys(&self.suite)
    }

    /// Drop every stored key of this suite.
    pub fn clear(&self) -> Result<usize, DbError> {
        let deleted = self.db.clear_suite(&self.suite)?;
        tracing::info!(suite = %self.suite, deleted, "Cleared settings suite");
        Ok(deleted)
    }
}

impl SettingsStore for SuiteStore {
    fn get(&self, key: &str) -> Result<Option<StoredValue>, DbError> {
        self.db.get_value(&self.suite, key)
    }

    fn set(&self, key: &str, value: &StoredValue) -> Result<(), DbError> {
        self.db.set_value(&self.suite, key, value)
    }

    fn remove(&self, key: &str) -> Result<(), DbError> {
        self.db.delete_value(&self.suite, key)
    }
}
