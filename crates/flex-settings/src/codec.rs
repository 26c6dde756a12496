//! Conversion between typed setting values and what the backing store holds.
//!
//! Structs are stored as JSON blobs. Colors are stored as base64 text of a
//! small versioned binary payload: one version byte followed by the four
//! channels as little-endian `f32`.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use flex_settings_db::{StoredKind, StoredValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::color::Color;
use crate::options::{DaxPanelOptions, SidePanelOptions};
use crate::types::{AntennaName, DaxSetting, DefaultConnection, KnownRadio};

pub const COLOR_FORMAT_VERSION: u8 = 1;
const COLOR_PAYLOAD_LEN: usize = 1 + 4 * 4;

/// Written in place of a color that cannot be encoded.
pub const ENCODE_FALLBACK: Color = Color::PINK;
/// Returned by [`decode_color_or_sentinel`] for unreadable text.
pub const DECODE_FALLBACK: Color = Color::SYSTEM_PINK;

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("unsupported color format version {0}")]
    UnsupportedVersion(u8),

    #[error("color payload is {found} bytes, expected {expected}")]
    Length { expected: usize, found: usize },

    #[error("non-finite number")]
    NonFinite,

    #[error("expected {expected} value, found {found}")]
    WrongKind {
        expected: StoredKind,
        found: StoredKind,
    },

    #[error("integer {0} out of range")]
    OutOfRange(i64),

    #[error("unknown value '{0}'")]
    UnknownVariant(String),

    #[error("invalid UUID: {0}")]
    Uuid(#[from] uuid::Error),
}

pub fn encode_struct<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec(value)?)
}

pub fn decode_struct<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    Ok(serde_json::from_slice(bytes)?)
}

pub fn encode_color(color: &Color) -> Result<String, CodecError> {
    if !color.is_finite() {
        return Err(CodecError::NonFinite);
    }
    let mut payload = Vec::with_capacity(COLOR_PAYLOAD_LEN);
    payload.push(COLOR_FORMAT_VERSION);
    for channel in color.channels() {
        payload.extend_from_slice(&channel.to_le_bytes());
    }
    Ok(STANDARD.encode(payload))
}

pub fn decode_color(text: &str) -> Result<Color, CodecError> {
    let payload = STANDARD.decode(text)?;
    let Some((&version, body)) = payload.split_first() else {
        return Err(CodecError::Length {
            expected: COLOR_PAYLOAD_LEN,
            found: 0,
        });
    };
    if version != COLOR_FORMAT_VERSION {
        return Err(CodecError::UnsupportedVersion(version));
    }
    if payload.len() != COLOR_PAYLOAD_LEN {
        return Err(CodecError::Length {
            expected: COLOR_PAYLOAD_LEN,
            found: payload.len(),
        });
    }

    let mut channels = [0f32; 4];
    for (channel, bytes) in channels.iter_mut().zip(body.chunks_exact(4)) {
        *channel = f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    let color = Color::from_channels(channels);
    if !color.is_finite() {
        return Err(CodecError::NonFinite);
    }
    Ok(color)
}

/// Encode a color, substituting [`ENCODE_FALLBACK`] when it cannot be encoded.
pub fn encode_color_or_sentinel(color: &Color) -> String {
    match encode_color(color) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "Color not encodable, storing fallback");
            encode_color(&ENCODE_FALLBACK).unwrap_or_default()
        }
    }
}

/// Decode a color, substituting [`DECODE_FALLBACK`] when the text is unreadable.
pub fn decode_color_or_sentinel(text: &str) -> Color {
    decode_color(text).unwrap_or(DECODE_FALLBACK)
}

/// A value that can be written to and read from a single store key.
pub trait SettingValue: Sized {
    /// `Ok(None)` means the key should be removed.
    fn to_stored(&self) -> Result<Option<StoredValue>, CodecError>;

    fn from_stored(value: StoredValue) -> Result<Self, CodecError>;
}

/// Enum persisted as one of a fixed set of strings.
pub trait TextEnum: Sized {
    fn as_raw(&self) -> &'static str;
    fn from_raw(raw: &str) -> Option<Self>;
}

fn wrong_kind(expected: StoredKind, found: &StoredValue) -> CodecError {
    CodecError::WrongKind {
        expected,
        found: found.kind(),
    }
}

impl SettingValue for bool {
    fn to_stored(&self) -> Result<Option<StoredValue>, CodecError> {
        Ok(Some(StoredValue::Bool(*self)))
    }

    fn from_stored(value: StoredValue) -> Result<Self, CodecError> {
        match value {
            StoredValue::Bool(v) => Ok(v),
            other => Err(wrong_kind(StoredKind::Bool, &other)),
        }
    }
}

macro_rules! int_setting {
    ($($t:ty),+) => {$(
        impl SettingValue for $t {
            fn to_stored(&self) -> Result<Option<StoredValue>, CodecError> {
                Ok(Some(StoredValue::Int(i64::from(*self))))
            }

            fn from_stored(value: StoredValue) -> Result<Self, CodecError> {
                match value {
                    StoredValue::Int(v) => {
                        <$t>::try_from(v).map_err(|_| CodecError::OutOfRange(v))
                    }
                    other => Err(wrong_kind(StoredKind::Int, &other)),
                }
            }
        }
    )+};
}

int_setting!(u32);

/// NaN and infinities are rejected; SQLite would store them as NULL.
impl SettingValue for f64 {
    fn to_stored(&self) -> Result<Option<StoredValue>, CodecError> {
        if !self.is_finite() {
            return Err(CodecError::NonFinite);
        }
        Ok(Some(StoredValue::Float(*self)))
    }

    fn from_stored(value: StoredValue) -> Result<Self, CodecError> {
        match value {
            StoredValue::Float(v) => Ok(v),
            StoredValue::Int(v) => Ok(v as f64),
            other => Err(wrong_kind(StoredKind::Float, &other)),
        }
    }
}

impl SettingValue for f32 {
    fn to_stored(&self) -> Result<Option<StoredValue>, CodecError> {
        f64::from(*self).to_stored()
    }

    fn from_stored(value: StoredValue) -> Result<Self, CodecError> {
        f64::from_stored(value).map(|v| v as f32)
    }
}

impl SettingValue for String {
    fn to_stored(&self) -> Result<Option<StoredValue>, CodecError> {
        Ok(Some(StoredValue::Text(self.clone())))
    }

    fn from_stored(value: StoredValue) -> Result<Self, CodecError> {
        match value {
            StoredValue::Text(v) => Ok(v),
            other => Err(wrong_kind(StoredKind::Text, &other)),
        }
    }
}

impl SettingValue for Uuid {
    fn to_stored(&self) -> Result<Option<StoredValue>, CodecError> {
        Ok(Some(StoredValue::Text(self.hyphenated().to_string())))
    }

    fn from_stored(value: StoredValue) -> Result<Self, CodecError> {
        let text = String::from_stored(value)?;
        Ok(Uuid::parse_str(&text)?)
    }
}

impl SettingValue for Color {
    fn to_stored(&self) -> Result<Option<StoredValue>, CodecError> {
        Ok(Some(StoredValue::Text(encode_color_or_sentinel(self))))
    }

    fn from_stored(value: StoredValue) -> Result<Self, CodecError> {
        decode_color(&String::from_stored(value)?)
    }
}

/// `None` removes the key; a present value is stored as `T` would be.
impl<T: SettingValue> SettingValue for Option<T> {
    fn to_stored(&self) -> Result<Option<StoredValue>, CodecError> {
        match self {
            Some(v) => v.to_stored(),
            None => Ok(None),
        }
    }

    fn from_stored(value: StoredValue) -> Result<Self, CodecError> {
        T::from_stored(value).map(Some)
    }
}

macro_rules! flags_setting {
    ($($t:ty),+) => {$(
        impl SettingValue for $t {
            fn to_stored(&self) -> Result<Option<StoredValue>, CodecError> {
                Ok(Some(StoredValue::Int(i64::from(self.bits()))))
            }

            fn from_stored(value: StoredValue) -> Result<Self, CodecError> {
                Ok(<$t>::from_bits_truncate(stored_bits(value)?))
            }
        }
    )+};
}

flags_setting!(SidePanelOptions, DaxPanelOptions);

fn stored_bits(value: StoredValue) -> Result<u8, CodecError> {
    match value {
        StoredValue::Int(v) => u8::try_from(v).map_err(|_| CodecError::OutOfRange(v)),
        other => Err(wrong_kind(StoredKind::Int, &other)),
    }
}

macro_rules! json_setting {
    ($($t:ty),+) => {$(
        impl SettingValue for $t {
            fn to_stored(&self) -> Result<Option<StoredValue>, CodecError> {
                encode_struct(self).map(|bytes| Some(StoredValue::Blob(bytes)))
            }

            fn from_stored(value: StoredValue) -> Result<Self, CodecError> {
                match value {
                    StoredValue::Blob(bytes) => decode_struct(&bytes),
                    other => Err(wrong_kind(StoredKind::Blob, &other)),
                }
            }
        }
    )+};
}

json_setting!(DefaultConnection, DaxSetting, Vec<KnownRadio>, Vec<AntennaName>);

/// Stored as text; anything outside the known set is rejected.
pub(crate) fn text_enum_to_stored<T: TextEnum>(value: &T) -> StoredValue {
    StoredValue::Text(value.as_raw().to_string())
}

pub(crate) fn text_enum_from_stored<T: TextEnum>(value: StoredValue) -> Result<T, CodecError> {
    let raw = String::from_stored(value)?;
    T::from_raw(&raw).ok_or(CodecError::UnknownVariant(raw))
}

macro_rules! text_enum_setting {
    ($($t:ty),+) => {$(
        impl SettingValue for $t {
            fn to_stored(&self) -> Result<Option<StoredValue>, CodecError> {
                Ok(Some(text_enum_to_stored(self)))
            }

            fn from_stored(value: StoredValue) -> Result<Self, CodecError> {
                text_enum_from_stored(value)
            }
        }
    )+};
}

text_enum_setting!(
    crate::types::SelectedSetting,
    crate::types::ProfileType,
    crate::types::SpectrumType,
    crate::types::LogLevel,
    crate::types::LogFilter
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SpectrumType;

    #[test]
    fn color_round_trips_bit_for_bit() {
        let colors = [
            Color::BLACK,
            Color::WHITE.opacity(0.3),
            Color::RED.opacity(0.2),
            Color::from_channels([0.1, 0.2, 0.3, 0.4]),
        ];
        for color in colors {
            let text = encode_color(&color).unwrap();
            let back = decode_color(&text).unwrap();
            assert_eq!(back.channels().map(f32::to_bits), color.channels().map(f32::to_bits));
        }
    }

    #[test]
    fn color_payload_layout() {
        let text = encode_color(&Color::WHITE).unwrap();
        let payload = STANDARD.decode(text).unwrap();
        assert_eq!(payload.len(), COLOR_PAYLOAD_LEN);
        assert_eq!(payload[0], COLOR_FORMAT_VERSION);
        assert_eq!(&payload[1..5], &1.0f32.to_le_bytes());
    }

    #[test]
    fn non_finite_color_falls_back_on_encode() {
        let bad = Color::from_channels([f32::NAN, 0.0, 0.0, 1.0]);
        assert!(matches!(encode_color(&bad), Err(CodecError::NonFinite)));

        let text = encode_color_or_sentinel(&bad);
        assert_eq!(decode_color(&text).unwrap(), ENCODE_FALLBACK);
    }

    #[test]
    fn corrupt_color_text_is_an_error() {
        assert!(matches!(decode_color("not base64!"), Err(CodecError::Base64(_))));
        assert!(matches!(decode_color(""), Err(CodecError::Length { found: 0, .. })));

        let truncated = STANDARD.encode([COLOR_FORMAT_VERSION, 0, 0]);
        assert!(matches!(decode_color(&truncated), Err(CodecError::Length { found: 3, .. })));

        let mut future = vec![9u8];
        future.extend_from_slice(&[0; 16]);
        assert!(matches!(
            decode_color(&STANDARD.encode(future)),
            Err(CodecError::UnsupportedVersion(9))
        ));
    }

    #[test]
    fn decode_sentinel_differs_from_encode_sentinel() {
        assert_eq!(decode_color_or_sentinel("%%%"), DECODE_FALLBACK);
        assert_ne!(DECODE_FALLBACK, ENCODE_FALLBACK);
    }

    #[test]
    fn struct_decode_rejects_truncated_json() {
        let bytes = encode_struct(&DefaultConnection::new("1234", "Smartlink", None)).unwrap();
        let result: Result<DefaultConnection, _> = decode_struct(&bytes[..bytes.len() - 3]);
        assert!(matches!(result, Err(CodecError::Json(_))));
    }

    #[test]
    fn none_removes_key() {
        let value: Option<DefaultConnection> = None;
        assert_eq!(value.to_stored().unwrap(), None);
        let value: Option<String> = Some("token".into());
        assert_eq!(value.to_stored().unwrap(), Some(StoredValue::Text("token".into())));
    }

    #[test]
    fn flags_drop_undeclared_bits_and_reject_overflow() {
        let options = SidePanelOptions::from_stored(StoredValue::Int(0b1101_0001)).unwrap();
        assert_eq!(options, SidePanelOptions::RX | SidePanelOptions::CW);
        assert!(matches!(
            DaxPanelOptions::from_stored(StoredValue::Int(300)),
            Err(CodecError::OutOfRange(300))
        ));
    }

    #[test]
    fn integer_range_is_checked() {
        assert!(matches!(
            u32::from_stored(StoredValue::Int(-1)),
            Err(CodecError::OutOfRange(-1))
        ));
        assert_eq!(u32::from_stored(StoredValue::Int(1300)).unwrap(), 1300);
    }

    #[test]
    fn non_finite_floats_do_not_encode() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(v.to_stored(), Err(CodecError::NonFinite)));
        }
        assert!(matches!(f32::NAN.to_stored(), Err(CodecError::NonFinite)));
        assert_eq!(0.25f64.to_stored().unwrap(), Some(StoredValue::Float(0.25)));
    }

    #[test]
    fn unknown_enum_text_is_rejected() {
        let err = SpectrumType::from_stored(StoredValue::Text("Waterfall".into())).unwrap_err();
        assert!(matches!(err, CodecError::UnknownVariant(ref v) if v == "Waterfall"));
    }

    #[test]
    fn uuid_stored_as_hyphenated_text() {
        let id = Uuid::new_v4();
        let stored = id.to_stored().unwrap().unwrap();
        assert_eq!(stored, StoredValue::Text(id.to_string()));
        assert_eq!(Uuid::from_stored(stored).unwrap(), id);
        assert!(Uuid::from_stored(StoredValue::Text("".into())).is_err());
    }
}
