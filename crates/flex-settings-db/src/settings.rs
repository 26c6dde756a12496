//! Suite-scoped settings key-value table.

use rusqlite::OptionalExtension;
use rusqlite::types::Value;

use crate::{Database, DbError, StoredKind, StoredValue};

impl Database {
    pub fn get_value(&self, suite: &str, key: &str) -> Result<Option<StoredValue>, DbError> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT kind, value FROM settings WHERE suite = ?1 AND key = ?2")?;
            let row = stmt
                .query_row([suite, key], |row| {
                    Ok((row.get::<_, String>(0)?, row.get::<_, Value>(1)?))
                })
                .optional()?;
            match row {
                Some((kind, value)) => decode_row(key, &kind, value).map(Some),
                None => Ok(None),
            }
        })
    }

    pub fn set_value(&self, suite: &str, key: &str, value: &StoredValue) -> Result<(), DbError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO settings (suite, key, kind, value, updated_at)
                 VALUES (?1, ?2, ?3, ?4, CURRENT_TIMESTAMP)
                 ON CONFLICT(suite, key) DO UPDATE SET
                    kind = excluded.kind,
                    value = excluded.value,
                    updated_at = CURRENT_TIMESTAMP",
                rusqlite::params![suite, key, value.kind().as_str(), encode_value(value)],
            )?;
            Ok(())
        })
    }

    pub fn delete_value(&self, suite: &str, key: &str) -> Result<(), DbError> {
        self.with_conn(|conn| {
            conn.execute(
                "DELETE FROM settings WHERE suite = ?1 AND key = ?2",
                [suite, key],
            )?;
            Ok(())
        })
    }

    /// All keys stored for a suite, sorted.
    pub fn list_keys(&self, suite: &str) -> Result<Vec<String>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT key FROM settings WHERE suite = ?1 ORDER BY key")?;
            let keys = stmt
                .query_map([suite], |row| row.get(0))?
                .collect::<Result<Vec<String>, _>>()?;
            Ok(keys)
        })
    }

    /// Remove every key of a suite. Returns the number of deleted rows.
    pub fn clear_suite(&self, suite: &str) -> Result<usize, DbError> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;
            let deleted = tx.execute("DELETE FROM settings WHERE suite = ?1", [suite])?;
            tx.commit()?;
            Ok(deleted)
        })
    }
}

fn encode_value(value: &StoredValue) -> Value {
    match value {
        StoredValue::Bool(v) => Value::Integer(i64::from(*v)),
        StoredValue::Int(v) => Value::Integer(*v),
        StoredValue::Float(v) => Value::Real(*v),
        StoredValue::Text(v) => Value::Text(v.clone()),
        StoredValue::Blob(v) => Value::Blob(v.clone()),
    }
}

fn decode_row(key: &str, kind: &str, value: Value) -> Result<StoredValue, DbError> {
    let kind = StoredKind::parse(kind)
        .ok_or_else(|| DbError::InvalidData(format!("unknown kind '{kind}' for {key}")))?;
    match (kind, value) {
        (StoredKind::Bool, Value::Integer(v)) => Ok(StoredValue::Bool(v != 0)),
        (StoredKind::Int, Value::Integer(v)) => Ok(StoredValue::Int(v)),
        (StoredKind::Float, Value::Real(v)) => Ok(StoredValue::Float(v)),
        (StoredKind::Float, Value::Integer(v)) => Ok(StoredValue::Float(v as f64)),
        (StoredKind::Text, Value::Text(v)) => Ok(StoredValue::Text(v)),
        (StoredKind::Blob, Value::Blob(v)) => Ok(StoredValue::Blob(v)),
        (kind, other) => Err(DbError::InvalidData(format!(
            "{key} is marked {kind} but holds {:?}",
            other.data_type()
        ))),
    }
}
