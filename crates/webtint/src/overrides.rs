//! YAML-based palette overrides.
//!
//! Deployments can re-tint individual tokens without forking the palette.
//! An overrides file is a flat map of token name to hex color, with optional
//! `light:` and `dark:` sections for mode-specific values:
//!
//! ```yaml
//! # Applied in both modes
//! primary1: "#7c5cff"
//!
//! # Mode-specific
//! light:
//!   bg1: "#f4f6f8"
//! dark:
//!   bg1: "#0d1620"
//! ```
//!
//! Overrides replace values only; the token key set is closed, and an
//! unknown name is a load-time error. Mode sections win over base entries.

use std::collections::HashMap;
use std::path::Path;

use crate::color::Color;
use crate::error::ThemeError;
use crate::palette::{ColorToken, Palette};

/// Parsed palette overrides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaletteOverrides {
    base: HashMap<ColorToken, Color>,
    light: HashMap<ColorToken, Color>,
    dark: HashMap<ColorToken, Color>,
}

impl PaletteOverrides {
    /// Parses overrides from YAML content.
    ///
    /// Top-level keys are token names, except the reserved `light:` and
    /// `dark:` sections which hold mode-specific token maps.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownToken`] for names outside the palette,
    /// [`ThemeError::InvalidColor`] for unparseable values, and
    /// [`ThemeError::Serialization`] for malformed YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        let doc: serde_yaml::Value = serde_yaml::from_str(yaml)?;

        // An empty file is an empty override set.
        if doc.is_null() {
            return Ok(Self::default());
        }

        let mapping = doc.as_mapping().ok_or_else(|| {
            ThemeError::Serialization("overrides must be a mapping of token names to colors".into())
        })?;

        let mut overrides = Self::default();
        for (key, value) in mapping {
            let name = key.as_str().ok_or_else(|| {
                ThemeError::Serialization(format!("override key is not a string: {:?}", key))
            })?;

            match name {
                "light" => parse_section(value, &mut overrides.light)?,
                "dark" => parse_section(value, &mut overrides.dark)?,
                _ => insert_entry(name, value, &mut overrides.base)?,
            }
        }
        Ok(overrides)
    }

    /// Loads overrides from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Returns true if no overrides are defined.
    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.light.is_empty() && self.dark.is_empty()
    }

    /// Applies the overrides to a built palette for the given mode.
    ///
    /// Base entries apply first, then the matching mode section. Returns a
    /// new palette; the input is untouched and the key set is unchanged.
    pub fn apply(&self, palette: &Palette, dark_mode: bool) -> Palette {
        let mut result = *palette;
        for (token, color) in &self.base {
            result.set_color(*token, *color);
        }
        let mode_section = if dark_mode { &self.dark } else { &self.light };
        for (token, color) in mode_section {
            result.set_color(*token, *color);
        }
        result
    }
}

fn parse_section(
    value: &serde_yaml::Value,
    out: &mut HashMap<ColorToken, Color>,
) -> Result<(), ThemeError> {
    let mapping = value.as_mapping().ok_or_else(|| {
        ThemeError::Serialization("mode section must be a mapping of token names to colors".into())
    })?;
    for (key, value) in mapping {
        let name = key.as_str().ok_or_else(|| {
            ThemeError::Serialization(format!("override key is not a string: {:?}", key))
        })?;
        insert_entry(name, value, out)?;
    }
    Ok(())
}

fn insert_entry(
    name: &str,
    value: &serde_yaml::Value,
    out: &mut HashMap<ColorToken, Color>,
) -> Result<(), ThemeError> {
    let token =
        ColorToken::from_name(name).ok_or_else(|| ThemeError::UnknownToken(name.to_string()))?;
    let hex = value
        .as_str()
        .ok_or_else(|| ThemeError::InvalidColor(format!("{:?}", value)))?;
    out.insert(token, Color::parse(hex)?);
    Ok(())
}
