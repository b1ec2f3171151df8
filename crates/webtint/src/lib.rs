//! # Webtint - Adaptive UI Theming
//!
//! `webtint` derives a complete, immutable theme from a single dark/light
//! mode flag and turns it into consumable styling: semantic color tokens,
//! a spacing grid, breakpoint-conditional CSS wrappers, reusable layout
//! snippets, preset text styles, and a document-level baseline stylesheet.
//!
//! ## Core Concepts
//!
//! - [`Palette`]: the closed set of semantic color tokens, built per mode
//! - [`Theme`]: the composed immutable bundle (tokens + grid + breakpoints + snippets)
//! - [`ThemeProvider`]: supplies the current theme, recomputing only on mode change
//! - [`MediaQueries`]: generated `@media (max-width: …)` wrappers, one per [`Breakpoint`]
//! - [`TextVariant`]: preset text styles that resolve colors by token key
//! - [`StylesheetRenderer`]: CSS templates rendered against the theme
//!
//! ## Quick Start
//!
//! ```rust
//! use webtint::{ColorToken, SharedMode, TextStyle, TextVariant, ThemeProvider};
//!
//! // The mode flag lives outside the theming engine; the provider only
//! // reads it.
//! let mode = SharedMode::new(false);
//! let provider = ThemeProvider::new(mode.clone());
//!
//! let theme = provider.current();
//! let body = TextVariant::Body.resolve(&TextStyle::default(), &theme);
//! assert_eq!(body.color, Some(theme.color(ColorToken::Text1)));
//!
//! // Toggling the flag produces a freshly derived theme on the next read.
//! mode.set_dark_mode(true);
//! assert!(provider.current().dark_mode);
//! ```
//!
//! ## Breakpoint Wrappers
//!
//! ```rust
//! use webtint::{Breakpoint, Theme};
//!
//! let theme = Theme::from_mode(false);
//! let css = theme.media.wrap(Breakpoint::UpToMedium, ".sidebar { display: none; }");
//! assert!(css.starts_with("@media (max-width: 960px) {"));
//! ```
//!
//! ## Baseline Stylesheet
//!
//! ```rust
//! use webtint::{global_stylesheet, Theme};
//!
//! let css = global_stylesheet(&Theme::from_mode(true)).unwrap();
//! assert!(css.contains("background-color"));
//! ```
//!
//! ## Design Notes
//!
//! The token set is closed: lookups go through [`ColorToken`], so a missing
//! or misspelled token is a compile-time error. Several token families are
//! identical across both modes by design (a single active color family);
//! consumers must resolve by key and not assume which tokens differ.
//!
//! Everything here is a pure derivation over small fixed data. The only
//! state is the provider's single-slot cache, keyed on the mode flag.

pub mod breakpoints;
pub mod color;
mod error;
pub mod layout;
pub mod overrides;
pub mod palette;
pub mod prelude;
pub mod provider;
pub mod stylesheet;
pub mod text;
pub mod theme;

// Error type
pub use error::ThemeError;

// Breakpoint exports
pub use breakpoints::{Breakpoint, MediaQueries, MediaTemplate};

// Color and palette exports
pub use color::Color;
pub use palette::{ColorToken, Palette};

// Theme exports
pub use theme::{Grids, Theme, FLEX_COLUMN_NO_WRAP, FLEX_ROW_NO_WRAP};

// Provider exports
pub use provider::{
    detect_dark_mode, set_mode_detector, ModeSource, SharedMode, SystemModeSource, ThemeProvider,
};

// Text preset exports
pub use text::{FontStyle, ResolvedText, TextStyle, TextVariant};

// Stylesheet exports
pub use stylesheet::{global_stylesheet, StylesheetRenderer};

// Overrides and layout exports
pub use layout::ZIndex;
pub use overrides::PaletteOverrides;
