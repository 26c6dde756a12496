//! Every persisted setting: key, group, kind and default.
//!
//! The table below is the single place where a non-color field is declared.
//! It expands to the [`Settings`] struct, its `Default` impl, the registry
//! entries and the load/store sweeps, so the four can never disagree.
//! Colors are declared by [`AppColor`](crate::color::AppColor).

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;
use uuid::Uuid;

use crate::color::{AppColor, Palette};
use crate::options::{DaxPanelOptions, SidePanelOptions};
use crate::persist::{Loader, Saver};
use crate::types::{
    AntennaName, DaxSetting, DefaultConnection, KnownRadio, LogFilter, LogLevel, ProfileType,
    SelectedSetting, SpectrumType,
};
use flex_settings_db::SettingsStore;

/// Flag key guarding first-run population.
pub const INITIALIZED_KEY: &str = "initialized";

/// Organizational grouping of keys. Has no runtime effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingGroup {
    General,
    Connection,
    Color,
    Misc,
    Profile,
    Radio,
    Panadapter,
    LogViewer,
    Audio,
    Dax,
}

/// Semantic type of a setting's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKind {
    Bool,
    Integer,
    Float,
    String,
    OptionalString,
    Enum,
    Struct,
    OptionalStruct,
    Flags,
    Color,
    OptionalUuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingDef {
    pub key: &'static str,
    pub group: SettingGroup,
    pub kind: SettingKind,
}

macro_rules! settings_schema {
    ($(
        $group:ident {
            $(
                $(#[$meta:meta])*
                $field:ident : $ty:ty = $key:literal, $kind:ident, $default:expr;
            )+
        }
    )+) => {
        /// In-memory value of every setting.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(rename_all = "camelCase")]
        pub struct Settings {
            $($(
                $(#[$meta])*
                pub $field: $ty,
            )+)+
            pub colors: Palette,
        }

        impl Default for Settings {
            fn default() -> Self {
                Self {
                    $($( $field: $default, )+)+
                    colors: Palette::default(),
                }
            }
        }

        const FIELD_DEFS: &[SettingDef] = &[
            $($(
                SettingDef {
                    key: $key,
                    group: SettingGroup::$group,
                    kind: SettingKind::$kind,
                },
            )+)+
        ];

        impl Settings {
            pub(crate) fn load_from<S: SettingsStore>(loader: &mut Loader<'_, S>) -> Self {
                let defaults = Settings::default();
                Self {
                    $($( $field: loader.read($key, defaults.$field), )+)+
                    colors: loader.read_palette(),
                }
            }

            pub(crate) fn store_into<S: SettingsStore>(&self, saver: &mut Saver<'_, S>) {
                $($( saver.write($key, &self.$field); )+)+
                saver.write_palette(&self.colors);
            }
        }
    };
}

settings_schema! {
    General {
        selected_setting: SelectedSetting = "selectedSetting", Enum, SelectedSetting::Radio;
        selected_equalizer_id: String = "selectedEqualizerId", String, String::from("rxsc");
        side_panel_options: SidePanelOptions = "sidePanelOptions", Flags, SidePanelOptions::empty();
        dax_panel_options: DaxPanelOptions = "daxPanelOptions", Flags, DaxPanelOptions::empty();
        cwx_enabled: bool = "cwxEnabled", Bool, false;
        gui_default: Option<DefaultConnection> = "guiDefault", OptionalStruct, None;
        non_gui_default: Option<DefaultConnection> = "nonGuiDefault", OptionalStruct, None;
        /// Identifies this GUI client to the radio. Generated on first run only.
        gui_client_id: Option<Uuid> = "guiClientId", OptionalUuid, None;
        alt_antenna_names: Vec<AntennaName> = "altAntennaNames", Struct, Vec::new();
    }
    Connection {
        direct_enabled: bool = "directEnabled", Bool, false;
        is_gui: bool = "isGui", Bool, true;
        local_enabled: bool = "localEnabled", Bool, true;
        login_required: bool = "loginRequired", Bool, false;
        mtu_value: u32 = "mtuValue", Integer, 1_300;
        refresh_token: Option<String> = "refreshToken", OptionalString, None;
        require_smartlink_login: bool = "requireSmartlinkLogin", Bool, false;
        smartlink_enabled: bool = "smartlinkEnabled", Bool, false;
        smartlink_user: String = "smartlinkUser", String, String::new();
        station_name: String = "stationName", String, String::from("Sdr6000");
        use_default: bool = "useDefault", Bool, false;
        known_radios: Vec<KnownRadio> = "knownRadios", Struct, Vec::new();
    }
    Misc {
        alert_on_error: bool = "alertOnError", Bool, false;
        ignore_time_stamps: bool = "ignoreTimeStamps", Bool, true;
        log_broadcasts: bool = "logBroadcasts", Bool, false;
        monitor_short_name: String = "monitorShortName", String, String::from("13.8");
    }
    Profile {
        selected_profile_type: ProfileType = "selectedProfileType", Enum, ProfileType::Mic;
    }
    Radio {
        open_controls: bool = "openControls", Bool, false;
        single_click_tune_enabled: bool = "singleClickTuneEnabled", Bool, false;
        slice_minimized_enabled: bool = "sliceMinimizedEnabled", Bool, false;
    }
    Panadapter {
        db_spacing: u32 = "dbSpacing", Integer, 10;
        markers_enabled: bool = "markersEnabled", Bool, false;
        spectrum_fill_level: f64 = "spectrumFillLevel", Float, 0.0;
        spectrum_type: SpectrumType = "spectrumType", Enum, SpectrumType::Line;
        spectrum_gradient_stop0: f64 = "spectrumGradientStop0", Float, 0.2;
        spectrum_gradient_stop1: f64 = "spectrumGradientStop1", Float, 0.4;
        spectrum_gradient_stop2: f64 = "spectrumGradientStop2", Float, 0.5;
        spectrum_gradient_stop3: f64 = "spectrumGradientStop3", Float, 0.6;
    }
    LogViewer {
        log_viewer_auto_refresh: bool = "logViewerAutoRefresh", Bool, false;
        log_viewer_font_size: f64 = "logViewerFontSize", Float, 12.0;
        log_viewer_go_to_last: bool = "logViewerGoToLast", Bool, true;
        log_viewer_show_level: LogLevel = "logViewerShowLevel", Enum, LogLevel::Debug;
        log_viewer_show_timestamps: bool = "logViewerShowTimestamps", Bool, false;
        log_viewer_filter_by: LogFilter = "logViewerFilterBy", Enum, LogFilter::None;
        log_viewer_filter_text: String = "logViewerFilterText", String, String::new();
    }
    Audio {
        remote_rx_audio_compressed: bool = "remoteRxAudioCompressed", Bool, true;
        remote_rx_audio_enabled: bool = "remoteRxAudioEnabled", Bool, false;
        remote_rx_audio_mute: bool = "remoteRxAudioMute", Bool, false;
        remote_rx_audio_output_device_id: u32 = "remoteRxAudioOutputDeviceId", Integer, 0;
        remote_rx_audio_volume: f32 = "remoteRxAudioVolume", Float, 0.5;
        remote_tx_audio_enabled: bool = "remoteTxAudioEnabled", Bool, false;
        remote_tx_audio_input_device_id: u32 = "remoteTxAudioInputDeviceId", Integer, 0;
    }
    Dax {
        dax_reduced_bandwidth: bool = "daxReducedBandwidth", Bool, true;
        dax_mic_setting: DaxSetting = "daxMicSetting", Struct, DaxSetting { channel: 1 };
        dax_rx_setting: DaxSetting = "daxRxSetting", Struct, DaxSetting { channel: 1 };
        dax_tx_setting: DaxSetting = "daxTxSetting", Struct, DaxSetting { channel: 1 };
    }
}

/// Registry entries in declaration order: flag, fields, then colors.
pub static DEFINITIONS: LazyLock<Vec<SettingDef>> = LazyLock::new(|| {
    let flag = SettingDef {
        key: INITIALIZED_KEY,
        group: SettingGroup::General,
        kind: SettingKind::Bool,
    };
    let colors = AppColor::ALL.iter().map(|c| SettingDef {
        key: c.key(),
        group: SettingGroup::Color,
        kind: SettingKind::Color,
    });
    std::iter::once(flag)
        .chain(FIELD_DEFS.iter().copied())
        .chain(colors)
        .collect()
});

/// Registry indexed by key.
pub static REGISTRY: LazyLock<HashMap<&'static str, SettingDef>> =
    LazyLock::new(|| DEFINITIONS.iter().map(|d| (d.key, *d)).collect());

pub fn lookup(key: &str) -> Option<&'static SettingDef> {
    REGISTRY.get(key)
}

pub fn keys_in_group(group: SettingGroup) -> impl Iterator<Item = &'static str> {
    DEFINITIONS
        .iter()
        .filter(move |d| d.group == group)
        .map(|d| d.key)
}
