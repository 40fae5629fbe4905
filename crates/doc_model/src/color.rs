//! RGBA colors with hex string serialization

use crate::{DocModelError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// An sRGB color with alpha.
///
/// Serialized as `#RRGGBB` (opaque) or `#RRGGBBAA`. The keyword
/// `transparent` is accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Neutral grey used for shapes without a background
    pub const SHAPE_GREY: Color = Color::rgb(0xE5, 0xE7, 0xEB);

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Parse from hex string
    pub fn from_hex(hex: &str) -> Option<Self> {
        let trimmed = hex.trim();
        if trimmed.eq_ignore_ascii_case("transparent") {
            return Some(Self::TRANSPARENT);
        }
        let hex = trimmed.strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    /// Same color with a different alpha
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Linear interpolation between two colors, `t` clamped to [0, 1]
    pub fn lerp(self, other: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color::rgba(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }

    /// Composite this color over an opaque background
    pub fn over(self, background: Color) -> Color {
        let alpha = self.a as f64 / 255.0;
        let mix = |fg: u8, bg: u8| (fg as f64 * alpha + bg as f64 * (1.0 - alpha)).round() as u8;
        Color::rgb(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }

    /// CSS representation (`rgba()` when translucent)
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            self.to_hex()
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                self.a as f64 / 255.0
            )
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = DocModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s).ok_or_else(|| DocModelError::InvalidColor(s.to_string()))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_hex() {
        assert_eq!(Color::rgb(255, 128, 64).to_hex(), "#ff8040");
        assert_eq!(Color::rgba(255, 128, 64, 128).to_hex(), "#ff804080");
    }

    #[test]
    fn test_color_from_hex() {
        let color = Color::from_hex("#0EA5E9").unwrap();
        assert_eq!((color.r, color.g, color.b, color.a), (0x0e, 0xa5, 0xe9, 255));

        let color_alpha = Color::from_hex("#FF804080").unwrap();
        assert_eq!(color_alpha.a, 128);

        assert_eq!(Color::from_hex("transparent"), Some(Color::TRANSPARENT));
        assert!(Color::from_hex("invalid").is_none());
        assert!(Color::from_hex("#FFF").is_none());
        assert!(Color::from_hex("ff8040").is_none());
    }

    #[test]
    fn test_color_serde() {
        let json = serde_json::to_string(&Color::rgb(1, 2, 3)).unwrap();
        assert_eq!(json, "\"#010203\"");
        let back: Color = serde_json::from_str("\"#E5E7EB\"").unwrap();
        assert_eq!(back, Color::SHAPE_GREY);
        assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
    }

    #[test]
    fn test_color_lerp_and_over() {
        let mid = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert_eq!(mid.r, 128);
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 2.0), Color::WHITE);

        let tint = Color::rgb(255, 0, 0).with_alpha(0);
        assert_eq!(tint.over(Color::WHITE), Color::WHITE);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn color() -> impl Strategy<Value = Color> {
            any::<(u8, u8, u8, u8)>().prop_map(|(r, g, b, a)| Color::rgba(r, g, b, a))
        }

        proptest! {
            #[test]
            fn over_result_is_between_inputs(fg in color(), bg in color()) {
                let out = fg.over(bg);
                for (o, f, b) in [(out.r, fg.r, bg.r), (out.g, fg.g, bg.g), (out.b, fg.b, bg.b)] {
                    prop_assert!(o >= f.min(b) && o <= f.max(b));
                }
                prop_assert_eq!(out.a, 255);
            }

            #[test]
            fn lerp_hits_endpoints(a in color(), b in color()) {
                prop_assert_eq!(a.lerp(b, 0.0), a);
                prop_assert_eq!(a.lerp(b, 1.0), b);
            }
        }
    }
}
