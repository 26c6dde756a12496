//! Where the default store lives and how to open it.

use std::path::{Path, PathBuf};

use flex_settings_db::{Database, SuiteStore};

use crate::shared::SharedSettings;

/// Group shared by every app of the suite. Not a secret.
pub const SUITE_NAME: &str = "group.net.k3tzr.flexapps";

/// Overrides [`data_dir`] when set.
pub const DATA_DIR_ENV: &str = "FLEX_SETTINGS_DATA_DIR";

pub const DB_FILE_NAME: &str = "settings.db";

/// Determine the data directory for the settings database.
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".flexapps")
}

/// Open (creating if needed) the suite store under `dir`.
pub fn open_store(dir: &Path) -> Result<SuiteStore, anyhow::Error> {
    std::fs::create_dir_all(dir)?;
    let db_path = dir.join(DB_FILE_NAME);
    tracing::info!("Opening settings database at {}", db_path.display());
    let db = Database::open(&db_path)?;
    Ok(SuiteStore::new(db, SUITE_NAME))
}

/// Open the default store and load (or bootstrap) the settings from it.
pub fn open_default() -> Result<SharedSettings<SuiteStore>, anyhow::Error> {
    let store = open_store(&data_dir())?;
    Ok(SharedSettings::open(store))
}
