//! The settings facade: live values plus save and reset.

use flex_settings_db::SettingsStore;
use uuid::Uuid;

use crate::color::{AppColor, Color};
use crate::initializer::{self, Initialization};
use crate::persist::LoadReport;
use crate::schema::Settings;

/// Owns the authoritative in-memory settings and the store they mirror to.
///
/// Mutations touch memory only. Nothing reaches the store until [`save`]
/// (or [`reset_all`], which saves).
///
/// [`save`]: SettingsModel::save
/// [`reset_all`]: SettingsModel::reset_all
pub struct SettingsModel<S: SettingsStore> {
    store: S,
    settings: Settings,
    initialization: Initialization,
}

impl<S: SettingsStore> SettingsModel<S> {
    /// Bootstrap or load from `store`.
    pub fn open(store: S) -> Self {
        let (settings, initialization) = initializer::initialize(&store);
        Self {
            store,
            settings,
            initialization,
        }
    }

    /// Write every value back to the store. Per-key failures are logged.
    pub fn save(&self) {
        let failures = initializer::save(&self.store, &self.settings);
        if failures > 0 {
            tracing::error!(failures, "Settings save incomplete");
        } else {
            tracing::debug!("Settings saved");
        }
    }

    /// Restore one color to its default, in memory only.
    pub fn reset(&mut self, color: AppColor) {
        self.settings.colors.reset(color);
    }

    /// Restore every color to its default and save.
    pub fn reset_all(&mut self) {
        for &color in AppColor::ALL {
            self.reset(color);
        }
        self.save();
    }

    /// Discard in-memory changes and re-read the store.
    pub fn reload(&mut self) {
        let (settings, initialization) = initializer::initialize(&self.store);
        self.settings = settings;
        self.initialization = initialization;
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn color(&self, color: AppColor) -> Color {
        self.settings.colors.get(color)
    }

    pub fn set_color(&mut self, color: AppColor, value: Color) {
        self.settings.colors.set(color, value);
    }

    /// Set the GUI client id from its text form; unparsable text clears it.
    pub fn set_gui_client_id(&mut self, id: &str) {
        self.settings.gui_client_id = Uuid::parse_str(id).ok();
    }

    pub fn initialization(&self) -> &Initialization {
        &self.initialization
    }

    /// Keys that fell back to defaults on the last load. `None` after a bootstrap.
    pub fn load_report(&self) -> Option<&LoadReport> {
        match &self.initialization {
            Initialization::Loaded(report) => Some(report),
            Initialization::Bootstrapped => None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use flex_settings_db::MemoryStore;

    use super::*;

    #[test]
    fn single_reset_stays_in_memory() {
        let store = MemoryStore::new();
        let mut model = SettingsModel::open(&store);
        model.set_color(AppColor::Marker, Color::RED);
        model.save();

        model.reset(AppColor::Marker);
        assert_eq!(model.color(AppColor::Marker), Color::YELLOW);
        assert_eq!(SettingsModel::open(&store).color(AppColor::Marker), Color::RED);
    }

    #[test]
    fn gui_client_id_from_text() {
        let store = MemoryStore::new();
        let mut model = SettingsModel::open(&store);
        let id = Uuid::new_v4();

        model.set_gui_client_id(&id.to_string());
        assert_eq!(model.settings().gui_client_id, Some(id));

        model.set_gui_client_id("not-a-uuid");
        assert_eq!(model.settings().gui_client_id, None);
    }

    #[test]
    fn reload_discards_unsaved_changes() {
        let store = MemoryStore::new();
        let mut model = SettingsModel::open(&store);
        model.settings_mut().station_name = "Unsaved".into();

        model.reload();
        assert_eq!(model.settings().station_name, "Sdr6000");
        assert!(matches!(model.initialization(), Initialization::Loaded(r) if r.is_clean()));
    }

    #[test]
    fn load_report_only_after_load() {
        let store = MemoryStore::new();
        assert!(SettingsModel::open(&store).load_report().is_none());

        store.set("dbSpacing", &"wide".into()).unwrap();
        let model = SettingsModel::open(&store);
        assert_eq!(model.load_report().unwrap().malformed, vec!["dbSpacing"]);
    }
}
