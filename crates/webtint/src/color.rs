//! Color value type for theme tokens.
//!
//! Tokens are true-color RGB values that display as lowercase CSS hex
//! (`#rrggbb`). Parsing accepts 3- and 6-digit hex, with or without the
//! leading `#`:
//!
//! ```rust
//! use webtint::Color;
//!
//! let brand = Color::parse("#4e854f").unwrap();
//! let short = Color::parse("#fff").unwrap();
//! assert_eq!(short, Color::WHITE);
//! assert_eq!(brand.to_string(), "#4e854f");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ThemeError;

/// An RGB color value.
///
/// Serializes as its CSS hex string, so a serialized palette is directly
/// usable as a template context or exported token file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Pure white (`#ffffff`).
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    /// Pure black (`#000000`).
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    /// Creates a color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color code.
    ///
    /// Supports 3-digit (`#fff`) and 6-digit (`#ff6b35`) forms; the `#`
    /// prefix is optional and parsing is case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidColor`] for any other input.
    pub fn parse(s: &str) -> Result<Self, ThemeError> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        let invalid = || ThemeError::InvalidColor(s.to_string());

        // Byte-indexed slicing below requires ASCII input.
        if !hex.is_ascii() {
            return Err(invalid());
        }

        match hex.len() {
            // 3-digit hex: #rgb -> #rrggbb
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).map_err(|_| invalid())? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).map_err(|_| invalid())? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).map_err(|_| invalid())? * 17;
                Ok(Color::rgb(r, g, b))
            }
            // 6-digit hex: #rrggbb
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid())?;
                let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid())?;
                let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid())?;
                Ok(Color::rgb(r, g, b))
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_6_digit() {
        assert_eq!(
            Color::parse("#ff6b35").unwrap(),
            Color::rgb(255, 107, 53)
        );
        assert_eq!(Color::parse("#000000").unwrap(), Color::BLACK);
        assert_eq!(Color::parse("#ffffff").unwrap(), Color::WHITE);
    }

    #[test]
    fn test_parse_3_digit() {
        assert_eq!(Color::parse("#fff").unwrap(), Color::WHITE);
        assert_eq!(Color::parse("#000").unwrap(), Color::BLACK);
        assert_eq!(Color::parse("#f80").unwrap(), Color::rgb(255, 136, 0));
    }

    #[test]
    fn test_parse_without_prefix() {
        assert_eq!(Color::parse("4e854f").unwrap(), Color::rgb(0x4e, 0x85, 0x4f));
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Color::parse("#FF6B35").unwrap(), Color::rgb(255, 107, 53));
        assert_eq!(Color::parse("#FFF").unwrap(), Color::WHITE);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Color::parse("#ff").is_err());
        assert!(Color::parse("#ffff").is_err());
        assert!(Color::parse("#gggggg").is_err());
        assert!(Color::parse("").is_err());
        assert!(Color::parse("blue").is_err());
        assert!(Color::parse("éa").is_err());
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(Color::rgb(0xFD, 0x40, 0x40).to_string(), "#fd4040");
        assert_eq!(Color::WHITE.to_string(), "#ffffff");
    }

    #[test]
    fn test_serialize_as_hex_string() {
        let json = serde_json::to_string(&Color::rgb(0x4e, 0x85, 0x4f)).unwrap();
        assert_eq!(json, "\"#4e854f\"");
    }

    #[test]
    fn test_deserialize_from_hex_string() {
        let color: Color = serde_json::from_str("\"#4e854f\"").unwrap();
        assert_eq!(color, Color::rgb(0x4e, 0x85, 0x4f));

        let bad: Result<Color, _> = serde_json::from_str("\"#zzz\"");
        assert!(bad.is_err());
    }
}
