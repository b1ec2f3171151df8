//! Preset text styles layered on the theme's token set.
//!
//! Every preset resolves its color by [`ColorToken`] through the ambient
//! theme at render time — never by embedding a literal value — so one mode
//! change restyles every rendered text instance with no per-preset work.
//!
//! Caller overrides win over preset defaults, property by property:
//!
//! ```rust
//! use webtint::{ColorToken, TextStyle, TextVariant, Theme};
//!
//! let theme = Theme::from_mode(false);
//!
//! // Preset default
//! let body = TextVariant::Body.resolve(&TextStyle::default(), &theme);
//! assert_eq!(body.font_weight, Some(400));
//! assert_eq!(body.color, Some(theme.color(ColorToken::Text1)));
//!
//! // Caller override wins
//! let custom = TextStyle::default().weight(700).color(ColorToken::Blue1);
//! let resolved = TextVariant::Body.resolve(&custom, &theme);
//! assert_eq!(resolved.font_weight, Some(700));
//! assert_eq!(resolved.color, Some(theme.color(ColorToken::Blue1)));
//! ```

use std::fmt::Write as _;

use crate::color::Color;
use crate::palette::ColorToken;
use crate::theme::Theme;

/// CSS font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Italic,
}

impl FontStyle {
    /// The CSS value for this style.
    pub fn css_value(self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        }
    }
}

/// Caller-supplied text property overrides.
///
/// Unset properties fall back to the preset's defaults. Also used internally
/// to express the preset defaults themselves, so precedence is a plain
/// field-by-field `or`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub font_weight: Option<u16>,
    pub font_size: Option<u16>,
    pub font_style: Option<FontStyle>,
    pub color: Option<ColorToken>,
}

impl TextStyle {
    /// Sets the font weight.
    pub fn weight(mut self, weight: u16) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Sets the font size in pixels.
    pub fn size(mut self, size: u16) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Sets the font style.
    pub fn style(mut self, style: FontStyle) -> Self {
        self.font_style = Some(style);
        self
    }

    /// Sets the color by token key.
    pub fn color(mut self, token: ColorToken) -> Self {
        self.color = Some(token);
        self
    }

    fn merge_over(self, defaults: TextStyle) -> TextStyle {
        TextStyle {
            font_weight: self.font_weight.or(defaults.font_weight),
            font_size: self.font_size.or(defaults.font_size),
            font_style: self.font_style.or(defaults.font_style),
            color: self.color.or(defaults.color),
        }
    }
}

/// The fixed catalogue of text presets.
///
/// `Error` is the only preset with conditional behavior: its discriminator
/// selects between the alert token (`error`) and the neutral text token
/// (`text2`). Every other preset is a static configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextVariant {
    Main,
    Link,
    Label,
    Black,
    White,
    Body,
    LargeHeader,
    MediumHeader,
    SubHeader,
    Small,
    Blue,
    Yellow,
    DarkGray,
    Gray,
    Italic,
    Error { error: bool },
}

impl TextVariant {
    /// Every preset, with the `Error` discriminator in its neutral state.
    pub const ALL: [TextVariant; 16] = [
        TextVariant::Main,
        TextVariant::Link,
        TextVariant::Label,
        TextVariant::Black,
        TextVariant::White,
        TextVariant::Body,
        TextVariant::LargeHeader,
        TextVariant::MediumHeader,
        TextVariant::SubHeader,
        TextVariant::Small,
        TextVariant::Blue,
        TextVariant::Yellow,
        TextVariant::DarkGray,
        TextVariant::Gray,
        TextVariant::Italic,
        TextVariant::Error { error: false },
    ];

    /// The preset's default properties.
    ///
    /// Headers and small text set no color and inherit from their context.
    pub fn defaults(self) -> TextStyle {
        let base = TextStyle::default();
        match self {
            TextVariant::Main => base.weight(500).color(ColorToken::Text2),
            TextVariant::Link => base.weight(500).color(ColorToken::Primary1),
            TextVariant::Label => base.weight(600).color(ColorToken::Text1),
            TextVariant::Black => base.weight(500).color(ColorToken::Text1),
            TextVariant::White => base.weight(500).color(ColorToken::White),
            TextVariant::Body => base.weight(400).size(16).color(ColorToken::Text1),
            TextVariant::LargeHeader => base.weight(600).size(24),
            TextVariant::MediumHeader => base.weight(500).size(20),
            TextVariant::SubHeader => base.weight(400).size(14),
            TextVariant::Small => base.weight(500).size(11),
            TextVariant::Blue => base.weight(500).color(ColorToken::Blue1),
            TextVariant::Yellow => base.weight(500).color(ColorToken::Yellow3),
            TextVariant::DarkGray => base.weight(500).color(ColorToken::Text3),
            TextVariant::Gray => base.weight(500).color(ColorToken::Bg3),
            TextVariant::Italic => base
                .weight(500)
                .size(12)
                .style(FontStyle::Italic)
                .color(ColorToken::Text2),
            TextVariant::Error { error } => base.weight(500).color(if error {
                ColorToken::Error
            } else {
                ColorToken::Text2
            }),
        }
    }

    /// Resolves the preset against caller overrides and the ambient theme.
    ///
    /// Total: every preset resolves for every theme. Color tokens are looked
    /// up through the theme here, at render time.
    pub fn resolve(self, overrides: &TextStyle, theme: &Theme) -> ResolvedText {
        let effective = overrides.merge_over(self.defaults());
        ResolvedText {
            font_weight: effective.font_weight,
            font_size: effective.font_size,
            font_style: effective.font_style,
            color: effective.color.map(|token| theme.color(token)),
        }
    }
}

/// A fully resolved text style, ready to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedText {
    pub font_weight: Option<u16>,
    pub font_size: Option<u16>,
    pub font_style: Option<FontStyle>,
    pub color: Option<Color>,
}

impl ResolvedText {
    /// Renders the style as a CSS declaration block.
    ///
    /// Unset properties are omitted (they inherit).
    pub fn declarations(&self) -> String {
        let mut css = String::new();
        if let Some(weight) = self.font_weight {
            let _ = writeln!(css, "font-weight: {};", weight);
        }
        if let Some(size) = self.font_size {
            let _ = writeln!(css, "font-size: {}px;", size);
        }
        if let Some(style) = self.font_style {
            let _ = writeln!(css, "font-style: {};", style.css_value());
        }
        if let Some(color) = self.color {
            let _ = writeln!(css, "color: {};", color);
        }
        css
    }
}
