//! Stylesheet rendering against a theme context.
//!
//! Two surfaces:
//!
//! - [`global_stylesheet`]: the fixed document-level baseline, applied once
//!   per mode at the document root. It sets the page foreground/background
//!   from `text1`/`bg1` and the link color from `blue1`.
//! - [`StylesheetRenderer`]: named, caller-registered CSS templates that
//!   reference theme tokens by name (`{{ text1 }}`, `{{ grids.md }}`,
//!   `{{ shadow1 }}`), rendered against the current theme.
//!
//! Templates see the serialized theme (palette flattened to top-level keys),
//! so the dynamic-name seam stays confined to template text; Rust callers
//! use [`crate::ColorToken`] and get exhaustiveness checking instead.
//!
//! ```rust
//! use webtint::{StylesheetRenderer, Theme};
//!
//! let theme = Theme::from_mode(true);
//! let mut renderer = StylesheetRenderer::new();
//! renderer
//!     .add_template("card", ".card {\n  background: {{ bg2 }};\n}")
//!     .unwrap();
//!
//! let css = renderer.render("card", &theme).unwrap();
//! assert!(css.contains(&theme.palette.bg2.to_string()));
//! ```

use minijinja::{Environment, Value};

use crate::error::ThemeError;
use crate::theme::Theme;

/// Document-level baseline rules, parameterized over the token set.
const GLOBAL_TEMPLATE: &str = "\
html {
  color: {{ text1 }};
  background-color: {{ bg1 }} !important;
}

a {
  color: {{ blue1 }};
}
";

/// Renders the document-level baseline stylesheet for a theme.
///
/// Apply the result once per mode at the document root; re-render on mode
/// change.
///
/// # Errors
///
/// Returns [`ThemeError::Template`] if rendering fails.
pub fn global_stylesheet(theme: &Theme) -> Result<String, ThemeError> {
    let env = Environment::new();
    Ok(env.render_str(GLOBAL_TEMPLATE, Value::from_serialize(theme))?)
}

/// Named CSS templates rendered against a theme.
///
/// Templates are compiled once at registration and can be rendered
/// repeatedly as the theme changes.
pub struct StylesheetRenderer {
    env: Environment<'static>,
}

impl StylesheetRenderer {
    /// Creates an empty renderer.
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
        }
    }

    /// Registers a named CSS template.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Template`] if the template has syntax errors.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), ThemeError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    /// Whether a template with the given name is registered.
    pub fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    /// Renders a registered template against the theme.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::TemplateNotFound`] for unknown names and
    /// [`ThemeError::Template`] for rendering failures.
    pub fn render(&self, name: &str, theme: &Theme) -> Result<String, ThemeError> {
        let template = self.env.get_template(name)?;
        Ok(template.render(Value::from_serialize(theme))?)
    }

    /// Compiles and renders a one-off template string against the theme.
    pub fn render_str(&self, source: &str, theme: &Theme) -> Result<String, ThemeError> {
        Ok(self.env.render_str(source, Value::from_serialize(theme))?)
    }
}

impl Default for StylesheetRenderer {
    fn default() -> Self {
        Self::new()
    }
}
