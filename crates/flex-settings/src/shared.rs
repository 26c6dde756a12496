//! Exclusive-access handle for sharing one settings model across threads.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use flex_settings_db::SettingsStore;

use crate::model::SettingsModel;
use crate::schema::Settings;

/// Cloneable handle to a single [`SettingsModel`]. All access is serialized.
pub struct SharedSettings<S: SettingsStore> {
    inner: Arc<Mutex<SettingsModel<S>>>,
}

impl<S: SettingsStore> Clone for SharedSettings<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: SettingsStore> SharedSettings<S> {
    pub fn new(model: SettingsModel<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(model)),
        }
    }

    pub fn open(store: S) -> Self {
        Self::new(SettingsModel::open(store))
    }

    /// Lock the model. A panic in another holder does not make the
    /// settings unusable; the last written state is kept.
    pub fn lock(&self) -> MutexGuard<'_, SettingsModel<S>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn read<R>(&self, f: impl FnOnce(&Settings) -> R) -> R {
        f(self.lock().settings())
    }

    /// Mutate in memory. Call [`save`](Self::save) to persist.
    pub fn update<R>(&self, f: impl FnOnce(&mut Settings) -> R) -> R {
        f(self.lock().settings_mut())
    }

    pub fn save(&self) {
        self.lock().save();
    }
}
