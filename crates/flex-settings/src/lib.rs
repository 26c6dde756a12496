//! Typed, persistent settings for the Flex SDR client suite.
//!
//! [`SettingsModel`] holds every setting in memory and mirrors it to a
//! [`SettingsStore`]. The first open of an empty store writes all defaults;
//! later opens read each key back, falling back to the default for any key
//! that is missing or unreadable.

pub mod codec;
pub mod color;
pub mod config;
pub mod initializer;
pub mod model;
pub mod options;
pub mod persist;
pub mod runtime;
pub mod schema;
pub mod shared;
pub mod types;

pub use color::{AppColor, Color, Palette};
pub use flex_settings_db::{MemoryStore, SettingsStore, SuiteStore};
pub use initializer::Initialization;
pub use model::SettingsModel;
pub use options::{DaxPanelOptions, SidePanelOptions};
pub use persist::LoadReport;
pub use schema::Settings;
pub use shared::SharedSettings;
pub use types::{
    AntennaName, DaxSetting, DefaultConnection, KnownRadio, LogFilter, LogLevel, ProfileType,
    SelectedSetting, SpectrumType,
};
