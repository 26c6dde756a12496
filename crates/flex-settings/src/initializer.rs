//! First-run population and subsequent loading.
//!
//! The `initialized` key decides the path. It is written only after a complete
//! default sweep, so an interrupted first run simply bootstraps again.

use flex_settings_db::SettingsStore;
use uuid::Uuid;

use crate::persist::{LoadReport, Loader, Saver};
use crate::schema::{INITIALIZED_KEY, Settings};

/// How the in-memory settings were produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Initialization {
    /// The store was empty; defaults were written.
    Bootstrapped,
    /// Values were read from the store.
    Loaded(LoadReport),
}

pub fn initialize<S: SettingsStore>(store: &S) -> (Settings, Initialization) {
    match store.get_bool(INITIALIZED_KEY) {
        Ok(Some(true)) => {
            let (settings, report) = load(store);
            (settings, Initialization::Loaded(report))
        }
        Ok(_) => (bootstrap(store), Initialization::Bootstrapped),
        Err(e) => {
            // Without a readable flag we cannot tell a fresh store from a
            // damaged one, so nothing is written.
            tracing::warn!(
                error = %e,
                "Could not read initialized flag, loading without defaults sweep"
            );
            let (settings, report) = load(store);
            (settings, Initialization::Loaded(report))
        }
    }
}

/// Populate the store with defaults and mark it initialized.
pub fn bootstrap<S: SettingsStore>(store: &S) -> Settings {
    let settings = Settings {
        gui_client_id: Some(Uuid::new_v4()),
        ..Settings::default()
    };

    let failures = save(store, &settings);
    if failures > 0 {
        tracing::warn!(failures, "Default sweep incomplete, leaving store uninitialized");
        return settings;
    }
    if let Err(e) = store.set(INITIALIZED_KEY, &true.into()) {
        tracing::error!(error = %e, "Failed to mark settings initialized");
    }

    tracing::info!("Populated settings with defaults");
    settings
}

/// Read every field, substituting defaults for absent or malformed keys.
pub fn load<S: SettingsStore>(store: &S) -> (Settings, LoadReport) {
    let mut loader = Loader::new(store);
    let settings = Settings::load_from(&mut loader);
    let report = loader.finish();

    if !report.is_clean() {
        tracing::warn!(
            malformed = ?report.malformed,
            "Some settings were unreadable and reverted to defaults"
        );
    }
    tracing::debug!(absent = report.absent.len(), "Settings loaded");
    (settings, report)
}

/// Write every field. Returns the number of keys that failed to write.
pub fn save<S: SettingsStore>(store: &S, settings: &Settings) -> usize {
    let mut saver = Saver::new(store);
    settings.store_into(&mut saver);
    saver.finish()
}

#[cfg(test)]
mod tests {
    use flex_settings_db::{MemoryStore, SettingsStore, StoredValue};

    use super::*;
    use crate::color::{AppColor, Color};
    use crate::schema::SettingKind;
    use crate::types::DefaultConnection;

    #[test]
    fn empty_store_bootstraps() {
        let store = MemoryStore::new();
        let (settings, init) = initialize(&store);

        assert_eq!(init, Initialization::Bootstrapped);
        assert_eq!(store.get_bool(INITIALIZED_KEY).unwrap(), Some(true));
        assert!(settings.gui_client_id.is_some());
        assert_eq!(settings.mtu_value, 1300);
        assert_eq!(store.get_int("mtuValue").unwrap(), Some(1300));
    }

    #[test]
    fn bootstrap_writes_every_non_optional_key() {
        let store = MemoryStore::new();
        bootstrap(&store);
        for def in crate::schema::DEFINITIONS.iter() {
            let optional = matches!(
                def.kind,
                SettingKind::OptionalStruct | SettingKind::OptionalString
            );
            assert_eq!(store.contains_key(def.key), !optional, "key {}", def.key);
        }
    }

    #[test]
    fn false_flag_bootstraps_again() {
        let store = MemoryStore::new();
        store.set("stationName", &"Old".into()).unwrap();
        store.set(INITIALIZED_KEY, &false.into()).unwrap();

        let (settings, init) = initialize(&store);
        assert_eq!(init, Initialization::Bootstrapped);
        assert_eq!(settings.station_name, "Sdr6000");
    }

    #[test]
    fn unreadable_flag_loads_without_writing() {
        let store = MemoryStore::new();
        store.set(INITIALIZED_KEY, &"yes".into()).unwrap();

        let (settings, init) = initialize(&store);
        assert!(matches!(init, Initialization::Loaded(_)));
        assert_eq!(settings, Settings::default());
        assert!(!store.contains_key("stationName"));
    }

    #[test]
    fn load_reports_absent_and_malformed_keys() {
        let store = MemoryStore::new();
        store.set(INITIALIZED_KEY, &true.into()).unwrap();
        store.set("mtuValue", &StoredValue::Text("big".into())).unwrap();
        store.set("marker", &StoredValue::Text("???".into())).unwrap();
        store.set("dbSpacing", &StoredValue::Int(20)).unwrap();

        let (settings, report) = load(&store);
        assert_eq!(settings.mtu_value, 1300);
        assert_eq!(settings.db_spacing, 20);
        assert_eq!(settings.colors.get(AppColor::Marker), Color::YELLOW);
        assert_eq!(report.malformed, vec!["mtuValue", "marker"]);
        assert!(report.absent.contains(&"stationName"));
        assert!(!report.absent.contains(&"dbSpacing"));
    }

    #[test]
    fn saving_none_removes_the_key() {
        let store = MemoryStore::new();
        let mut settings = Settings {
            gui_default: Some(DefaultConnection::new("1234", "Local", None)),
            ..Settings::default()
        };
        save(&store, &settings);
        assert!(store.contains_key("guiDefault"));

        settings.gui_default = None;
        save(&store, &settings);
        assert!(!store.contains_key("guiDefault"));
    }
}
