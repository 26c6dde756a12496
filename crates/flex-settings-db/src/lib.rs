//! Key-value backing store for the flex settings model.
//!
//! Values live in a single SQLite table keyed by `(suite, key)`. A suite is the
//! shared group name under which every app of the suite keeps its settings.

pub mod memory;
pub mod schema;
pub mod settings;
pub mod store;
pub mod suite;

pub use memory::MemoryStore;
pub use store::{SettingsStore, StoredKind, StoredValue};
pub use suite::SuiteStore;

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::Connection;

/// Shared handle to the settings database.
///
/// Every clone goes through one connection behind a mutex, so writes from
/// the apps' threads are applied one at a time and a key never holds a
/// half-written value. Other processes are held off by SQLite's own locking
/// (WAL plus a busy timeout).
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Open the settings database at `path`, creating the file and table if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DbError> {
        Self::prepare(Connection::open(path)?)
    }

    /// A private database that disappears with the handle.
    pub fn open_in_memory() -> Result<Self, DbError> {
        Self::prepare(Connection::open_in_memory()?)
    }

    fn prepare(conn: Connection) -> Result<Self, DbError> {
        conn.execute_batch(
            "PRAGMA journal_mode=WAL;
             PRAGMA busy_timeout=5000;",
        )?;
        schema::run_migrations(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run `f` while holding the connection.
    pub fn with_conn<F, R>(&self, f: F) -> Result<R, DbError>
    where
        F: FnOnce(&Connection) -> Result<R, DbError>,
    {
        let conn = self.conn.lock().map_err(|_| DbError::LockPoisoned)?;
        f(&conn)
    }

    /// Like [`with_conn`](Self::with_conn), for work that needs a transaction.
    pub fn with_conn_mut<F, R>(&self, f: F) -> Result<R, DbError>
    where
        F: FnOnce(&mut Connection) -> Result<R, DbError>,
    {
        let mut conn = self.conn.lock().map_err(|_| DbError::LockPoisoned)?;
        f(&mut conn)
    }
}

/// Database error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Database lock poisoned")]
    LockPoisoned,

    #[error("Type mismatch for {key}: expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: StoredKind,
        found: StoredKind,
    },

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

#[cfg(test)]
mod tests;
