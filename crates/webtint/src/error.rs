//! Error types for theming operations.
//!
//! This module provides [`ThemeError`], the primary error type for all fallible
//! surfaces of the crate: stylesheet template rendering, palette override
//! loading, and color parsing. The pure theming core (palette construction,
//! theme composition, breakpoint templates) has no failure modes and never
//! returns this type.

use std::fmt;

/// Error type for theming and stylesheet operations.
///
/// This error type provides a stable API that doesn't expose implementation
/// details of the underlying template engine or parsers.
#[derive(Debug)]
pub enum ThemeError {
    /// Template syntax error or rendering failure.
    Template(String),

    /// Template not found in the stylesheet renderer.
    TemplateNotFound(String),

    /// A color value could not be parsed.
    InvalidColor(String),

    /// A token name does not exist in the palette.
    UnknownToken(String),

    /// Data serialization error (JSON or YAML).
    Serialization(String),

    /// I/O error (e.g., reading an overrides file from disk).
    Io(std::io::Error),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::Template(msg) => write!(f, "template error: {}", msg),
            ThemeError::TemplateNotFound(name) => write!(f, "template not found: {}", name),
            ThemeError::InvalidColor(value) => write!(f, "invalid color: {}", value),
            ThemeError::UnknownToken(name) => write!(f, "unknown color token: {}", name),
            ThemeError::Serialization(msg) => write!(f, "serialization error: {}", msg),
            ThemeError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ThemeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ThemeError {
    fn from(err: std::io::Error) -> Self {
        ThemeError::Io(err)
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(err: serde_json::Error) -> Self {
        ThemeError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for ThemeError {
    fn from(err: serde_yaml::Error) -> Self {
        ThemeError::Serialization(err.to_string())
    }
}

impl From<minijinja::Error> for ThemeError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::TemplateNotFound => ThemeError::TemplateNotFound(err.to_string()),
            ErrorKind::BadSerialization => ThemeError::Serialization(err.to_string()),
            _ => ThemeError::Template(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ThemeError::UnknownToken("text9".to_string());
        assert!(err.to_string().contains("unknown color token"));
        assert!(err.to_string().contains("text9"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ThemeError = io_err.into();
        assert!(matches!(err, ThemeError::Io(_)));
    }

    #[test]
    fn test_from_minijinja_template_not_found() {
        let mj_err = minijinja::Error::new(
            minijinja::ErrorKind::TemplateNotFound,
            "template 'baseline' not found",
        );
        let err: ThemeError = mj_err.into();
        assert!(matches!(err, ThemeError::TemplateNotFound(_)));
    }
}
