//! The semantic color token set and its mode-dependent builder.
//!
//! [`Palette::build`] is the single source of truth for every color token in
//! the UI: a pure function from the dark-mode flag to the full token set.
//! The set of tokens is closed — every token is a struct field, and keyed
//! lookup goes through the exhaustive [`ColorToken`] enum — so a missing or
//! misspelled token is a compile-time error, never a runtime one.
//!
//! Many tokens are intentionally identical across modes (the `primary` and
//! `secondary` families, the white/black aliases, most accents). The token
//! design currently runs a single active color family; consumers resolve by
//! key only and must not assume which tokens differ between modes.
//!
//! ```rust
//! use webtint::{ColorToken, Palette};
//!
//! let dark = Palette::build(true);
//! let light = Palette::build(false);
//!
//! // Mode-invariant by design:
//! assert_eq!(dark.primary1, light.primary1);
//! // Mode-dependent:
//! assert_ne!(dark.color(ColorToken::Error), light.color(ColorToken::Error));
//! ```

use serde::Serialize;

use crate::color::Color;

// Recurring palette values. The green is the active brand family; the two
// navies are the base and raised background surfaces.
const BRAND_GREEN: Color = Color::rgb(0x4e, 0x85, 0x4f);
const NAVY: Color = Color::rgb(0x1a, 0x2c, 0x3f);
const NAVY_RAISED: Color = Color::rgb(0x14, 0x2e, 0x46);

/// A key into the palette.
///
/// Exhaustive: every token the palette defines has exactly one variant here,
/// and [`Palette::color`] matches on all of them. Use this wherever a color
/// must be referenced by name (text presets, overrides files) instead of
/// embedding a literal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    // Base aliases
    White,
    Black,

    // Text
    Text1,
    Text2,
    Text3,
    Text4,
    Text5,

    // Backgrounds / surfaces
    Bg0,
    Bg1,
    Bg2,
    Bg3,
    Bg4,
    Bg5,
    Bg6,

    // Specialty surfaces
    ModalBg,
    AdvancedBg,

    // Primary family
    Primary1,
    Primary2,
    Primary3,
    Primary4,
    Primary5,
    PrimaryText1,

    // Secondary family
    Secondary1,
    Secondary2,
    Secondary3,

    // Accents
    Red1,
    Red2,
    Red3,
    Green1,
    Yellow1,
    Yellow2,
    Yellow3,
    Blue1,
    Blue2,
    Blue4,

    // Status
    Error,
    Success,
    Warning,
}

impl ColorToken {
    /// Every token, in palette declaration order.
    pub const ALL: [ColorToken; 38] = [
        ColorToken::White,
        ColorToken::Black,
        ColorToken::Text1,
        ColorToken::Text2,
        ColorToken::Text3,
        ColorToken::Text4,
        ColorToken::Text5,
        ColorToken::Bg0,
        ColorToken::Bg1,
        ColorToken::Bg2,
        ColorToken::Bg3,
        ColorToken::Bg4,
        ColorToken::Bg5,
        ColorToken::Bg6,
        ColorToken::ModalBg,
        ColorToken::AdvancedBg,
        ColorToken::Primary1,
        ColorToken::Primary2,
        ColorToken::Primary3,
        ColorToken::Primary4,
        ColorToken::Primary5,
        ColorToken::PrimaryText1,
        ColorToken::Secondary1,
        ColorToken::Secondary2,
        ColorToken::Secondary3,
        ColorToken::Red1,
        ColorToken::Red2,
        ColorToken::Red3,
        ColorToken::Green1,
        ColorToken::Yellow1,
        ColorToken::Yellow2,
        ColorToken::Yellow3,
        ColorToken::Blue1,
        ColorToken::Blue2,
        ColorToken::Blue4,
        ColorToken::Error,
        ColorToken::Success,
        ColorToken::Warning,
    ];

    /// The token's snake_case name, matching the palette's serialized keys.
    pub fn name(self) -> &'static str {
        match self {
            ColorToken::White => "white",
            ColorToken::Black => "black",
            ColorToken::Text1 => "text1",
            ColorToken::Text2 => "text2",
            ColorToken::Text3 => "text3",
            ColorToken::Text4 => "text4",
            ColorToken::Text5 => "text5",
            ColorToken::Bg0 => "bg0",
            ColorToken::Bg1 => "bg1",
            ColorToken::Bg2 => "bg2",
            ColorToken::Bg3 => "bg3",
            ColorToken::Bg4 => "bg4",
            ColorToken::Bg5 => "bg5",
            ColorToken::Bg6 => "bg6",
            ColorToken::ModalBg => "modal_bg",
            ColorToken::AdvancedBg => "advanced_bg",
            ColorToken::Primary1 => "primary1",
            ColorToken::Primary2 => "primary2",
            ColorToken::Primary3 => "primary3",
            ColorToken::Primary4 => "primary4",
            ColorToken::Primary5 => "primary5",
            ColorToken::PrimaryText1 => "primary_text1",
            ColorToken::Secondary1 => "secondary1",
            ColorToken::Secondary2 => "secondary2",
            ColorToken::Secondary3 => "secondary3",
            ColorToken::Red1 => "red1",
            ColorToken::Red2 => "red2",
            ColorToken::Red3 => "red3",
            ColorToken::Green1 => "green1",
            ColorToken::Yellow1 => "yellow1",
            ColorToken::Yellow2 => "yellow2",
            ColorToken::Yellow3 => "yellow3",
            ColorToken::Blue1 => "blue1",
            ColorToken::Blue2 => "blue2",
            ColorToken::Blue4 => "blue4",
            ColorToken::Error => "error",
            ColorToken::Success => "success",
            ColorToken::Warning => "warning",
        }
    }

    /// Looks a token up by its snake_case name.
    pub fn from_name(name: &str) -> Option<ColorToken> {
        ColorToken::ALL.iter().copied().find(|t| t.name() == name)
    }
}

/// The full color token set for one mode.
///
/// Immutable by convention: built once per mode change by [`Palette::build`]
/// and replaced, never edited in place. Serializes as a flat map of token
/// name to hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub white: Color,
    pub black: Color,

    pub text1: Color,
    pub text2: Color,
    pub text3: Color,
    pub text4: Color,
    pub text5: Color,

    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,
    pub bg3: Color,
    pub bg4: Color,
    pub bg5: Color,
    pub bg6: Color,

    pub modal_bg: Color,
    pub advanced_bg: Color,

    pub primary1: Color,
    pub primary2: Color,
    pub primary3: Color,
    pub primary4: Color,
    pub primary5: Color,
    pub primary_text1: Color,

    pub secondary1: Color,
    pub secondary2: Color,
    pub secondary3: Color,

    pub red1: Color,
    pub red2: Color,
    pub red3: Color,
    pub green1: Color,
    pub yellow1: Color,
    pub yellow2: Color,
    pub yellow3: Color,
    pub blue1: Color,
    pub blue2: Color,
    pub blue4: Color,

    pub error: Color,
    pub success: Color,
    pub warning: Color,
}

impl Palette {
    /// Builds the token set for the given mode.
    ///
    /// Pure and total: for either flag value every token is present, and
    /// equal flags always produce equal palettes.
    pub fn build(dark_mode: bool) -> Self {
        Self {
            white: Color::WHITE,
            black: Color::BLACK,

            text1: Color::WHITE,
            text2: Color::WHITE,
            text3: Color::WHITE,
            text4: if dark_mode {
                Color::rgb(0x56, 0x5a, 0x69)
            } else {
                Color::WHITE
            },
            text5: if dark_mode {
                Color::rgb(0x2c, 0x2f, 0x36)
            } else {
                Color::WHITE
            },

            bg0: NAVY,
            bg1: if dark_mode { NAVY } else { NAVY_RAISED },
            bg2: if dark_mode { NAVY_RAISED } else { NAVY },
            bg3: BRAND_GREEN,
            bg4: BRAND_GREEN,
            bg5: BRAND_GREEN,
            bg6: BRAND_GREEN,

            modal_bg: if dark_mode { Color::BLACK } else { NAVY },
            advanced_bg: NAVY,

            primary1: BRAND_GREEN,
            primary2: BRAND_GREEN,
            primary3: BRAND_GREEN,
            primary4: BRAND_GREEN,
            primary5: BRAND_GREEN,
            primary_text1: NAVY,

            secondary1: BRAND_GREEN,
            secondary2: NAVY,
            secondary3: NAVY,

            red1: BRAND_GREEN,
            red2: BRAND_GREEN,
            red3: BRAND_GREEN,
            green1: BRAND_GREEN,
            yellow1: BRAND_GREEN,
            yellow2: Color::rgb(0xff, 0x8f, 0x00),
            yellow3: Color::rgb(0xf3, 0xb7, 0x1e),
            blue1: BRAND_GREEN,
            blue2: BRAND_GREEN,
            blue4: BRAND_GREEN,

            error: if dark_mode {
                Color::rgb(0xfd, 0x40, 0x40)
            } else {
                Color::rgb(0xdf, 0x1f, 0x38)
            },
            success: if dark_mode {
                Color::rgb(0x27, 0xae, 0x60)
            } else {
                Color::rgb(0x00, 0x7d, 0x35)
            },
            warning: Color::rgb(0xff, 0x8f, 0x00),
        }
    }

    /// Resolves a token to its color value.
    pub fn color(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::White => self.white,
            ColorToken::Black => self.black,
            ColorToken::Text1 => self.text1,
            ColorToken::Text2 => self.text2,
            ColorToken::Text3 => self.text3,
            ColorToken::Text4 => self.text4,
            ColorToken::Text5 => self.text5,
            ColorToken::Bg0 => self.bg0,
            ColorToken::Bg1 => self.bg1,
            ColorToken::Bg2 => self.bg2,
            ColorToken::Bg3 => self.bg3,
            ColorToken::Bg4 => self.bg4,
            ColorToken::Bg5 => self.bg5,
            ColorToken::Bg6 => self.bg6,
            ColorToken::ModalBg => self.modal_bg,
            ColorToken::AdvancedBg => self.advanced_bg,
            ColorToken::Primary1 => self.primary1,
            ColorToken::Primary2 => self.primary2,
            ColorToken::Primary3 => self.primary3,
            ColorToken::Primary4 => self.primary4,
            ColorToken::Primary5 => self.primary5,
            ColorToken::PrimaryText1 => self.primary_text1,
            ColorToken::Secondary1 => self.secondary1,
            ColorToken::Secondary2 => self.secondary2,
            ColorToken::Secondary3 => self.secondary3,
            ColorToken::Red1 => self.red1,
            ColorToken::Red2 => self.red2,
            ColorToken::Red3 => self.red3,
            ColorToken::Green1 => self.green1,
            ColorToken::Yellow1 => self.yellow1,
            ColorToken::Yellow2 => self.yellow2,
            ColorToken::Yellow3 => self.yellow3,
            ColorToken::Blue1 => self.blue1,
            ColorToken::Blue2 => self.blue2,
            ColorToken::Blue4 => self.blue4,
            ColorToken::Error => self.error,
            ColorToken::Success => self.success,
            ColorToken::Warning => self.warning,
        }
    }

    /// Replaces one token's value.
    ///
    /// Used by overrides loading; the key set is unaffected.
    pub fn set_color(&mut self, token: ColorToken, color: Color) {
        match token {
            ColorToken::White => self.white = color,
            ColorToken::Black => self.black = color,
            ColorToken::Text1 => self.text1 = color,
            ColorToken::Text2 => self.text2 = color,
            ColorToken::Text3 => self.text3 = color,
            ColorToken::Text4 => self.text4 = color,
            ColorToken::Text5 => self.text5 = color,
            ColorToken::Bg0 => self.bg0 = color,
            ColorToken::Bg1 => self.bg1 = color,
            ColorToken::Bg2 => self.bg2 = color,
            ColorToken::Bg3 => self.bg3 = color,
            ColorToken::Bg4 => self.bg4 = color,
            ColorToken::Bg5 => self.bg5 = color,
            ColorToken::Bg6 => self.bg6 = color,
            ColorToken::ModalBg => self.modal_bg = color,
            ColorToken::AdvancedBg => self.advanced_bg = color,
            ColorToken::Primary1 => self.primary1 = color,
            ColorToken::Primary2 => self.primary2 = color,
            ColorToken::Primary3 => self.primary3 = color,
            ColorToken::Primary4 => self.primary4 = color,
            ColorToken::Primary5 => self.primary5 = color,
            ColorToken::PrimaryText1 => self.primary_text1 = color,
            ColorToken::Secondary1 => self.secondary1 = color,
            ColorToken::Secondary2 => self.secondary2 = color,
            ColorToken::Secondary3 => self.secondary3 = color,
            ColorToken::Red1 => self.red1 = color,
            ColorToken::Red2 => self.red2 = color,
            ColorToken::Red3 => self.red3 = color,
            ColorToken::Green1 => self.green1 = color,
            ColorToken::Yellow1 => self.yellow1 = color,
            ColorToken::Yellow2 => self.yellow2 = color,
            ColorToken::Yellow3 => self.yellow3 = color,
            ColorToken::Blue1 => self.blue1 = color,
            ColorToken::Blue2 => self.blue2 = color,
            ColorToken::Blue4 => self.blue4 = color,
            ColorToken::Error => self.error = color,
            ColorToken::Success => self.success = color,
            ColorToken::Warning => self.warning = color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_set_totality() {
        // Every token resolves for both modes; the serialized key sets match.
        let dark = serde_json::to_value(Palette::build(true)).unwrap();
        let light = serde_json::to_value(Palette::build(false)).unwrap();

        let dark_keys: Vec<&String> = dark.as_object().unwrap().keys().collect();
        let light_keys: Vec<&String> = light.as_object().unwrap().keys().collect();
        assert_eq!(dark_keys, light_keys);
        assert_eq!(dark_keys.len(), ColorToken::ALL.len());
    }

    #[test]
    fn test_token_names_match_serialized_keys() {
        let json = serde_json::to_value(Palette::build(false)).unwrap();
        let object = json.as_object().unwrap();
        for token in ColorToken::ALL {
            assert!(
                object.contains_key(token.name()),
                "serialized palette is missing {}",
                token.name()
            );
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(Palette::build(true), Palette::build(true));
        assert_eq!(Palette::build(false), Palette::build(false));
    }

    #[test]
    fn test_mode_invariant_tokens() {
        let dark = Palette::build(true);
        let light = Palette::build(false);

        let invariant = [
            ColorToken::White,
            ColorToken::Black,
            ColorToken::Text1,
            ColorToken::Text2,
            ColorToken::Text3,
            ColorToken::Bg0,
            ColorToken::Bg3,
            ColorToken::AdvancedBg,
            ColorToken::Primary1,
            ColorToken::Primary2,
            ColorToken::Primary3,
            ColorToken::Primary4,
            ColorToken::Primary5,
            ColorToken::PrimaryText1,
            ColorToken::Secondary1,
            ColorToken::Secondary2,
            ColorToken::Secondary3,
            ColorToken::Red1,
            ColorToken::Green1,
            ColorToken::Yellow2,
            ColorToken::Blue1,
            ColorToken::Warning,
        ];
        for token in invariant {
            assert_eq!(
                dark.color(token),
                light.color(token),
                "{} should not vary by mode",
                token.name()
            );
        }
    }

    #[test]
    fn test_mode_dependent_tokens() {
        let dark = Palette::build(true);
        let light = Palette::build(false);

        for token in [
            ColorToken::Text4,
            ColorToken::Text5,
            ColorToken::Bg1,
            ColorToken::Bg2,
            ColorToken::ModalBg,
            ColorToken::Error,
            ColorToken::Success,
        ] {
            assert_ne!(
                dark.color(token),
                light.color(token),
                "{} should vary by mode",
                token.name()
            );
        }
    }

    #[test]
    fn test_status_values() {
        let dark = Palette::build(true);
        let light = Palette::build(false);
        assert_eq!(dark.error, Color::rgb(0xfd, 0x40, 0x40));
        assert_eq!(light.error, Color::rgb(0xdf, 0x1f, 0x38));
        assert_eq!(dark.success, Color::rgb(0x27, 0xae, 0x60));
        assert_eq!(light.success, Color::rgb(0x00, 0x7d, 0x35));
    }

    #[test]
    fn test_from_name_roundtrip() {
        for token in ColorToken::ALL {
            assert_eq!(ColorToken::from_name(token.name()), Some(token));
        }
        assert_eq!(ColorToken::from_name("text9"), None);
        assert_eq!(ColorToken::from_name("Text1"), None);
    }

    #[test]
    fn test_set_color_replaces_single_token() {
        let mut palette = Palette::build(false);
        let replacement = Color::rgb(1, 2, 3);
        palette.set_color(ColorToken::Blue1, replacement);

        assert_eq!(palette.color(ColorToken::Blue1), replacement);
        // Everything else untouched.
        let baseline = Palette::build(false);
        for token in ColorToken::ALL {
            if token != ColorToken::Blue1 {
                assert_eq!(palette.color(token), baseline.color(token));
            }
        }
    }
}
