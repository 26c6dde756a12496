//! Database schema definitions.

use rusqlite::Connection;

use crate::DbError;

pub fn run_migrations(conn: &Connection) -> Result<(), DbError> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

// `value` is declared without a type so SQLite keeps whatever storage class
// was written; `kind` records which one the caller meant.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS settings (
    suite TEXT NOT NULL,
    key TEXT NOT NULL,
    kind TEXT NOT NULL,
    value,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    PRIMARY KEY (suite, key)
);

CREATE INDEX IF NOT EXISTS idx_settings_suite ON settings(suite);
"#;
