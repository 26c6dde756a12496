//! The backing store contract shared by every implementation.

use std::fmt;

use crate::DbError;

/// Storage class of a persisted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredKind {
    Bool,
    Int,
    Float,
    Text,
    Blob,
}

impl StoredKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StoredKind::Bool => "bool",
            StoredKind::Int => "int",
            StoredKind::Float => "float",
            StoredKind::Text => "text",
            StoredKind::Blob => "blob",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "bool" => Some(StoredKind::Bool),
            "int" => Some(StoredKind::Int),
            "float" => Some(StoredKind::Float),
            "text" => Some(StoredKind::Text),
            "blob" => Some(StoredKind::Blob),
            _ => None,
        }
    }
}

impl fmt::Display for StoredKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single value as held by the backing store.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl StoredValue {
    pub fn kind(&self) -> StoredKind {
        match self {
            StoredValue::Bool(_) => StoredKind::Bool,
            StoredValue::Int(_) => StoredKind::Int,
            StoredValue::Float(_) => StoredKind::Float,
            StoredValue::Text(_) => StoredKind::Text,
            StoredValue::Blob(_) => StoredKind::Blob,
        }
    }
}

impl From<bool> for StoredValue {
    fn from(v: bool) -> Self {
        StoredValue::Bool(v)
    }
}

impl From<i64> for StoredValue {
    fn from(v: i64) -> Self {
        StoredValue::Int(v)
    }
}

impl From<f64> for StoredValue {
    fn from(v: f64) -> Self {
        StoredValue::Float(v)
    }
}

impl From<String> for StoredValue {
    fn from(v: String) -> Self {
        StoredValue::Text(v)
    }
}

impl From<&str> for StoredValue {
    fn from(v: &str) -> Self {
        StoredValue::Text(v.to_string())
    }
}

impl From<Vec<u8>> for StoredValue {
    fn from(v: Vec<u8>) -> Self {
        StoredValue::Blob(v)
    }
}

/// Minimal key-value capability the settings model needs.
///
/// `get` returns `Ok(None)` for a key that was never written (or was removed).
/// The typed helpers report a value stored under a different kind as
/// [`DbError::TypeMismatch`]; floats accept stored integers.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Result<Option<StoredValue>, DbError>;

    fn set(&self, key: &str, value: &StoredValue) -> Result<(), DbError>;

    fn remove(&self, key: &str) -> Result<(), DbError>;

    fn get_bool(&self, key: &str) -> Result<Option<bool>, DbError> {
        match self.get(key)? {
            None => Ok(None),
            Some(StoredValue::Bool(v)) => Ok(Some(v)),
            Some(other) => Err(mismatch(key, StoredKind::Bool, &other)),
        }
    }

    fn get_int(&self, key: &str) -> Result<Option<i64>, DbError> {
        match self.get(key)? {
            None => Ok(None),
            Some(StoredValue::Int(v)) => Ok(Some(v)),
            Some(other) => Err(mismatch(key, StoredKind::Int, &other)),
        }
    }

    fn get_float(&self, key: &str) -> Result<Option<f64>, DbError> {
        match self.get(key)? {
            None => Ok(None),
            Some(StoredValue::Float(v)) => Ok(Some(v)),
            Some(StoredValue::Int(v)) => Ok(Some(v as f64)),
            Some(other) => Err(mismatch(key, StoredKind::Float, &other)),
        }
    }

    fn get_string(&self, key: &str) -> Result<Option<String>, DbError> {
        match self.get(key)? {
            None => Ok(None),
            Some(StoredValue::Text(v)) => Ok(Some(v)),
            Some(other) => Err(mismatch(key, StoredKind::Text, &other)),
        }
    }

    fn get_blob(&self, key: &str) -> Result<Option<Vec<u8>>, DbError> {
        match self.get(key)? {
            None => Ok(None),
            Some(StoredValue::Blob(v)) => Ok(Some(v)),
            Some(other) => Err(mismatch(key, StoredKind::Blob, &other)),
        }
    }
}

impl<S: SettingsStore + ?Sized> SettingsStore for &S {
    fn get(&self, key: &str) -> Result<Option<StoredValue>, DbError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &StoredValue) -> Result<(), DbError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), DbError> {
        (**self).remove(key)
    }
}

fn mismatch(key: &str, expected: StoredKind, found: &StoredValue) -> DbError {
    DbError::TypeMismatch {
        key: key.to_string(),
        expected,
        found: found.kind(),
    }
}
