//! Convenient imports for common theming use.
//!
//! ```rust
//! use webtint::prelude::*;
//!
//! let provider = ThemeProvider::new(SharedMode::new(false));
//! let theme = provider.current();
//! let css = TextVariant::Body.resolve(&TextStyle::default(), &theme).declarations();
//! assert!(css.contains("font-size: 16px;"));
//! ```

pub use crate::breakpoints::{Breakpoint, MediaQueries, MediaTemplate};
pub use crate::color::Color;
pub use crate::error::ThemeError;
pub use crate::palette::{ColorToken, Palette};
pub use crate::provider::{ModeSource, SharedMode, SystemModeSource, ThemeProvider};
pub use crate::stylesheet::{global_stylesheet, StylesheetRenderer};
pub use crate::text::{FontStyle, ResolvedText, TextStyle, TextVariant};
pub use crate::theme::{Grids, Theme};
