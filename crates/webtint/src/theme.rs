//! Theme composition: palette + grid + breakpoints + snippets.
//!
//! [`Theme::from_mode`] is a pure function of the dark-mode flag. The
//! composed value is plain data — no interior mutability, no reference back
//! to the flag's owner — so two themes built from the same flag compare
//! equal, which is what makes caching by flag value sound (see
//! [`crate::provider`]).

use serde::Serialize;

use crate::breakpoints::MediaQueries;
use crate::color::Color;
use crate::error::ThemeError;
use crate::palette::{ColorToken, Palette};

/// Vertical flex container that never wraps.
pub const FLEX_COLUMN_NO_WRAP: &str = "display: flex;\nflex-flow: column nowrap;";

/// Horizontal flex container that never wraps.
pub const FLEX_ROW_NO_WRAP: &str = "display: flex;\nflex-flow: row nowrap;";

/// The spacing grid, in unitless scale steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Grids {
    pub sm: u32,
    pub md: u32,
    pub lg: u32,
}

impl Grids {
    /// The standard 8 / 12 / 24 grid.
    pub const STANDARD: Grids = Grids {
        sm: 8,
        md: 12,
        lg: 24,
    };
}

/// The composed, immutable theme for one mode.
///
/// Identity changes only when the mode changes; consumers may rely on
/// structural equality (or pointer identity via the provider's `Rc`) to skip
/// re-derived work.
///
/// Serializes with the palette flattened to top-level keys, so a serialized
/// theme doubles as a stylesheet template context (`{{ text1 }}`,
/// `{{ grids.md }}`, `{{ shadow1 }}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    /// The mode this theme was derived from.
    pub dark_mode: bool,

    /// The full color token set.
    #[serde(flatten)]
    pub palette: Palette,

    /// Spacing grid constants.
    pub grids: Grids,

    /// Elevation shadow color; varies by mode.
    pub shadow1: Color,

    /// Media-query templates, one per breakpoint.
    #[serde(skip)]
    pub media: MediaQueries,

    /// Reusable snippet: vertical flex, no wrapping.
    pub flex_column_no_wrap: &'static str,

    /// Reusable snippet: horizontal flex, no wrapping.
    pub flex_row_no_wrap: &'static str,
}

impl Theme {
    /// Composes the theme for the given mode.
    ///
    /// Calls [`Palette::build`] once and merges in the spacing grid, the
    /// generated media templates, the flex snippets, and the mode-dependent
    /// shadow token.
    pub fn from_mode(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            palette: Palette::build(dark_mode),
            grids: Grids::STANDARD,
            shadow1: if dark_mode {
                Color::BLACK
            } else {
                Color::rgb(0x2f, 0x80, 0xed)
            },
            media: MediaQueries::new(),
            flex_column_no_wrap: FLEX_COLUMN_NO_WRAP,
            flex_row_no_wrap: FLEX_ROW_NO_WRAP,
        }
    }

    /// Resolves a token through the theme's palette.
    pub fn color(&self, token: ColorToken) -> Color {
        self.palette.color(token)
    }

    /// Exports the theme as a pretty-printed JSON token file.
    ///
    /// Media templates are functions, not data, and are omitted.
    pub fn to_json(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
