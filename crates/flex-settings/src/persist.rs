//! Per-key read and write sweeps over a [`SettingsStore`].

use flex_settings_db::SettingsStore;

use crate::codec::SettingValue;
use crate::color::{AppColor, Palette};

/// Keys that fell back to their default during a load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Never written (first run after an upgrade, or a cleared optional).
    pub absent: Vec<&'static str>,
    /// Present but unreadable.
    pub malformed: Vec<&'static str>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.malformed.is_empty()
    }
}

pub(crate) struct Loader<'a, S> {
    store: &'a S,
    report: LoadReport,
}

impl<'a, S: SettingsStore> Loader<'a, S> {
    pub(crate) fn new(store: &'a S) -> Self {
        Self {
            store,
            report: LoadReport::default(),
        }
    }

    /// Read `key`, or return `default` if it is missing or cannot be decoded.
    pub(crate) fn read<T: SettingValue>(&mut self, key: &'static str, default: T) -> T {
        let stored = match self.store.get(key) {
            Ok(Some(stored)) => stored,
            Ok(None) => {
                tracing::debug!(key, "Setting absent, using default");
                self.report.absent.push(key);
                return default;
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read setting, using default");
                self.report.malformed.push(key);
                return default;
            }
        };

        match T::from_stored(stored) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Malformed setting, using default");
                self.report.malformed.push(key);
                default
            }
        }
    }

    pub(crate) fn read_palette(&mut self) -> Palette {
        let mut palette = Palette::default();
        for &color in AppColor::ALL {
            let value = self.read(color.key(), color.default_color());
            palette.set(color, value);
        }
        palette
    }

    pub(crate) fn finish(self) -> LoadReport {
        self.report
    }
}

pub(crate) struct Saver<'a, S> {
    store: &'a S,
    failures: usize,
}

impl<'a, S: SettingsStore> Saver<'a, S> {
    pub(crate) fn new(store: &'a S) -> Self {
        Self { store, failures: 0 }
    }

    /// Write `value` under `key`. Values that encode to nothing, or fail to
    /// encode, remove the key instead. Store errors are logged and counted.
    pub(crate) fn write<T: SettingValue>(&mut self, key: &'static str, value: &T) {
        let result = match value.to_stored() {
            Ok(Some(stored)) => self.store.set(key, &stored),
            Ok(None) => self.store.remove(key),
            Err(e) => {
                tracing::warn!(key, error = %e, "Could not encode setting, removing key");
                self.store.remove(key)
            }
        };
        if let Err(e) = result {
            tracing::error!(key, error = %e, "Failed to write setting");
            self.failures += 1;
        }
    }

    pub(crate) fn write_palette(&mut self, palette: &Palette) {
        for (color, value) in palette.iter() {
            self.write(color.key(), &value);
        }
    }

    pub(crate) fn finish(self) -> usize {
        self.failures
    }
}
