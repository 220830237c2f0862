// File: crates/linechart-core/src/theme.rs
// Summary: Hex color values for chart styling, convertible to Skia colors.

use serde::{Deserialize, Serialize};
use skia_safe as skia;

use crate::error::ChartError;

/// RGBA color written as a CSS-style hex string in configs (`#6da`, `#d9d050`, `#33333380`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl HexColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn parse(s: &str) -> Result<Self, ChartError> {
        let err = || ChartError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        let parsed = match hex.len() {
            3 => (nibble(0), nibble(1), nibble(2), Ok(255)),
            6 => (byte(0), byte(2), byte(4), Ok(255)),
            8 => (byte(0), byte(2), byte(4), byte(6)),
            _ => return Err(err()),
        };
        match parsed {
            (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Self { r, g, b, a }),
            _ => Err(err()),
        }
    }

    /// Same color with alpha multiplied by `opacity` (clamped to 0..=1).
    pub fn with_opacity(self, opacity: f32) -> skia::Color {
        let a = (self.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        skia::Color::from_argb(a, self.r, self.g, self.b)
    }
}

impl From<HexColor> for skia::Color {
    fn from(c: HexColor) -> Self {
        skia::Color::from_argb(c.a, c.r, c.g, c.b)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ChartError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl std::str::FromStr for HexColor {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<HexColor> for String {
    fn from(c: HexColor) -> Self {
        c.to_string()
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_form_expands_each_nibble() {
        let c = HexColor::parse("#6da").unwrap();
        assert_eq!(c, HexColor::rgb(0x66, 0xdd, 0xaa));
    }

    #[test]
    fn long_form_and_alpha() {
        assert_eq!(HexColor::parse("#d9d050").unwrap(), HexColor::rgb(0xd9, 0xd0, 0x50));
        let c = HexColor::parse("#33333380").unwrap();
        assert_eq!(c.a, 0x80);
        assert_eq!(c.to_string(), "#33333380");
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["6da", "#12", "#ggg", "#12345", ""] {
            assert!(matches!(HexColor::parse(bad), Err(ChartError::InvalidColor(_))), "{bad}");
        }
    }

    #[test]
    fn opacity_scales_alpha() {
        let c = HexColor::rgb(10, 20, 30).with_opacity(0.5);
        assert_eq!(c.a(), 128);
        assert_eq!(HexColor::rgb(10, 20, 30).with_opacity(2.0).a(), 255);
    }
}
