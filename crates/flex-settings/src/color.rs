//! Portable color value and the named application colors.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// An RGBA color with normalized `f32` channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const PINK: Color = Color::rgb(1.0, 0.753, 0.796);
    pub const SYSTEM_PINK: Color = Color::rgb(1.0, 0.176, 0.333);

    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// Same color with a different alpha.
    pub const fn opacity(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    pub fn channels(&self) -> [f32; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    pub fn from_channels([red, green, blue, alpha]: [f32; 4]) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.channels().iter().all(|c| c.is_finite())
    }
}

macro_rules! app_colors {
    ($($variant:ident => $key:literal = $default:expr),+ $(,)?) => {
        /// Every persisted color. The variant's key doubles as its storage key.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum AppColor {
            $($variant),+
        }

        impl AppColor {
            pub const ALL: &'static [AppColor] = &[$(AppColor::$variant),+];
            pub const COUNT: usize = Self::ALL.len();

            pub fn key(self) -> &'static str {
                match self {
                    $(AppColor::$variant => $key),+
                }
            }

            pub fn default_color(self) -> Color {
                match self {
                    $(AppColor::$variant => $default),+
                }
            }

            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $($key => Some(AppColor::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

app_colors! {
    Background => "background" = Color::BLACK,
    DbLegend => "dbLegend" = Color::GREEN,
    DbLines => "dbLines" = Color::WHITE.opacity(0.3),
    FrequencyLegend => "frequencyLegend" = Color::GREEN,
    GridLines => "gridLines" = Color::WHITE.opacity(0.3),
    Marker => "marker" = Color::YELLOW,
    MarkerEdge => "markerEdge" = Color::RED.opacity(0.2),
    MarkerSegment => "markerSegment" = Color::WHITE.opacity(0.2),
    SliceActive => "sliceActive" = Color::RED,
    SliceFilter => "sliceFilter" = Color::WHITE.opacity(0.2),
    SliceInactive => "sliceInactive" = Color::YELLOW,
    SpectrumLine => "spectrumLine" = Color::WHITE,
    SpectrumFill => "spectrumFill" = Color::WHITE,
    TnfDeep => "tnfDeep" = Color::YELLOW.opacity(0.2),
    TnfInactive => "tnfInactive" = Color::WHITE.opacity(0.2),
    TnfNormal => "tnfNormal" = Color::GREEN.opacity(0.2),
    TnfPermanent => "tnfPermanent" = Color::WHITE,
    TnfVeryDeep => "tnfVeryDeep" = Color::RED.opacity(0.2),
    FlagBackground => "flagBackground" = Color::BLACK,
    WaterfallClear => "waterfallClear" = Color::BLACK,
    SliceBackground => "sliceBackground" = Color::BLACK,
    SpectrumGradientColor0 => "spectrumGradientColor0" = Color::WHITE.opacity(0.4),
    SpectrumGradientColor1 => "spectrumGradientColor1" = Color::GREEN,
    SpectrumGradientColor2 => "spectrumGradientColor2" = Color::YELLOW,
    SpectrumGradientColor3 => "spectrumGradientColor3" = Color::RED,
}

/// Current value of every [`AppColor`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    colors: [Color; AppColor::COUNT],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: std::array::from_fn(|i| AppColor::ALL[i].default_color()),
        }
    }
}

impl Palette {
    pub fn get(&self, color: AppColor) -> Color {
        self.colors[color as usize]
    }

    pub fn set(&mut self, color: AppColor, value: Color) {
        self.colors[color as usize] = value;
    }

    pub fn reset(&mut self, color: AppColor) {
        self.set(color, color.default_color());
    }

    pub fn iter(&self) -> impl Iterator<Item = (AppColor, Color)> + '_ {
        AppColor::ALL.iter().map(|&c| (c, self.get(c)))
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(AppColor::COUNT))?;
        for (color, value) in self.iter() {
            map.serialize_entry(color.key(), &value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_and_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for &color in AppColor::ALL {
            assert!(seen.insert(color.key()), "duplicate key {}", color.key());
            assert_eq!(AppColor::from_key(color.key()), Some(color));
        }
        assert_eq!(AppColor::from_key("nope"), None);
    }

    #[test]
    fn discriminants_follow_all_order() {
        for (i, &color) in AppColor::ALL.iter().enumerate() {
            assert_eq!(color as usize, i);
        }
    }

    #[test]
    fn palette_set_and_reset() {
        let mut palette = Palette::default();
        assert_eq!(palette.get(AppColor::Marker), Color::YELLOW);

        palette.set(AppColor::Marker, Color::RED);
        assert_eq!(palette.get(AppColor::Marker), Color::RED);
        assert_eq!(palette.get(AppColor::SliceInactive), Color::YELLOW);

        palette.reset(AppColor::Marker);
        assert_eq!(palette.get(AppColor::Marker), Color::YELLOW);
    }

    #[test]
    fn opacity_keeps_rgb() {
        let c = Color::RED.opacity(0.2);
        assert_eq!(c.channels(), [1.0, 0.0, 0.0, 0.2]);
    }
}
