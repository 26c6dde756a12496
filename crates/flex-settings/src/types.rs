//! Composite setting values and the text-backed enumerations.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

/// A radio the user has connected to before.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnownRadio {
    id: Uuid,
    pub name: String,
    pub ip_address: String,
}

impl KnownRadio {
    /// Create an entry with a freshly generated id.
    pub fn new(name: impl Into<String>, ip_address: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            ip_address: ip_address.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

/// User label for one of the radio's antenna ports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AntennaName {
    pub std_name: String,
    pub custom_name: String,
}

impl AntennaName {
    pub fn new(std_name: impl Into<String>, custom_name: impl Into<String>) -> Self {
        Self {
            std_name: std_name.into(),
            custom_name: custom_name.into(),
        }
    }
}

/// Radio/station picked automatically at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultConnection {
    pub serial: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,
}

impl DefaultConnection {
    pub fn new(
        serial: impl Into<String>,
        source: impl Into<String>,
        station: Option<String>,
    ) -> Self {
        Self {
            serial: serial.into(),
            source: source.into(),
            station,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DaxSetting {
    pub channel: u32,
}

impl Default for DaxSetting {
    fn default() -> Self {
        Self { channel: 1 }
    }
}

/// Declares an enum persisted as its raw text value.
macro_rules! raw_enum {
    (
        $(#[$meta:meta])*
        $name:ident default $default:ident {
            $($variant:ident => $raw:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $raw),+
                }
            }

            pub fn from_raw(raw: &str) -> Option<Self> {
                match raw {
                    $($raw => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl crate::codec::TextEnum for $name {
            fn as_raw(&self) -> &'static str {
                self.as_str()
            }

            fn from_raw(raw: &str) -> Option<Self> {
                $name::from_raw(raw)
            }
        }
    };
}

raw_enum! {
    /// Page shown when the settings window opens.
    SelectedSetting default Radio {
        Radio => "Radio",
        Network => "Network",
        Gps => "GPS",
        Tx => "Transmit",
        PhoneCw => "Phone CW",
        Xvtrs => "Xvtrs",
        Profiles => "Profiles",
        Colors => "Colors",
        Misc => "Misc",
        Connection => "Connection",
    }
}

raw_enum! {
    ProfileType default Mic {
        Mic => "mic",
        Tx => "tx",
        Global => "global",
    }
}

raw_enum! {
    SpectrumType default Line {
        Line => "Line",
        Filled => "Filled",
        Gradient => "Gradient",
    }
}

raw_enum! {
    /// Minimum level shown by the log viewer.
    LogLevel default Debug {
        Debug => "debug",
        Info => "info",
        Warning => "warning",
        Error => "error",
    }
}

raw_enum! {
    LogFilter default None {
        None => "none",
        Includes => "includes",
        Excludes => "excludes",
        Prefix => "prefix",
    }
}
