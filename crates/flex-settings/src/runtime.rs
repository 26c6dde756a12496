//! Process-wide settings instance for application shells.
//!
//! Created on first call and kept until the process exits. Libraries and tests
//! should construct their own [`SharedSettings`] over an injected store.

use std::sync::OnceLock;

use flex_settings_db::SuiteStore;

use crate::config;
use crate::shared::SharedSettings;

static SHARED: OnceLock<SharedSettings<SuiteStore>> = OnceLock::new();

pub fn shared() -> Result<&'static SharedSettings<SuiteStore>, anyhow::Error> {
    if let Some(settings) = SHARED.get() {
        return Ok(settings);
    }
    let settings = config::open_default()?;
    // A racing caller may have won; keep its instance.
    Ok(SHARED.get_or_init(|| settings))
}
