//! Named viewport breakpoints and media-query templates.
//!
//! The breakpoint table is fixed at compile time, ordered from the smallest
//! viewport threshold to the largest. [`MediaQueries`] derives one
//! [`MediaTemplate`] per breakpoint by iterating [`Breakpoint::ALL`], so the
//! table and the generated templates can never lose correspondence.
//!
//! Each template wraps an arbitrary CSS fragment in a
//! `@media (max-width: …px)` rule:
//!
//! ```rust
//! use webtint::{Breakpoint, MediaQueries};
//!
//! let media = MediaQueries::new();
//! let css = media.wrap(Breakpoint::UpToSmall, "nav { display: none; }");
//! assert!(css.starts_with("@media (max-width: 720px) {"));
//! ```

use serde::Serialize;

/// A named viewport-width threshold.
///
/// Ordered smallest to largest. Each breakpoint applies when the viewport
/// width is at or below its [`max_width`](Breakpoint::max_width).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Breakpoint {
    /// Viewport width up to 500px.
    UpToExtraSmall,
    /// Viewport width up to 720px.
    UpToSmall,
    /// Viewport width up to 960px.
    UpToMedium,
    /// Viewport width up to 1280px.
    UpToLarge,
}

impl Breakpoint {
    /// All breakpoints, ordered smallest to largest.
    ///
    /// The order matches the declaration order, so `breakpoint as usize`
    /// indexes into arrays built from this table.
    pub const ALL: [Breakpoint; 4] = [
        Breakpoint::UpToExtraSmall,
        Breakpoint::UpToSmall,
        Breakpoint::UpToMedium,
        Breakpoint::UpToLarge,
    ];

    /// The pixel width threshold for this breakpoint.
    pub fn max_width(self) -> u32 {
        match self {
            Breakpoint::UpToExtraSmall => 500,
            Breakpoint::UpToSmall => 720,
            Breakpoint::UpToMedium => 960,
            Breakpoint::UpToLarge => 1280,
        }
    }

    /// The breakpoint's snake_case name, as used in serialized themes.
    pub fn name(self) -> &'static str {
        match self {
            Breakpoint::UpToExtraSmall => "up_to_extra_small",
            Breakpoint::UpToSmall => "up_to_small",
            Breakpoint::UpToMedium => "up_to_medium",
            Breakpoint::UpToLarge => "up_to_large",
        }
    }
}

/// A generated style wrapper for one breakpoint.
///
/// Pure and stateless: [`wrap`](MediaTemplate::wrap) is deterministic and
/// never mutates anything, so templates can be shared and reused freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaTemplate {
    breakpoint: Breakpoint,
}

impl MediaTemplate {
    fn new(breakpoint: Breakpoint) -> Self {
        Self { breakpoint }
    }

    /// The breakpoint this template wraps for.
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// The pixel threshold used in the generated media rule.
    pub fn max_width(&self) -> u32 {
        self.breakpoint.max_width()
    }

    /// Wraps a CSS fragment in this breakpoint's conditional rule.
    ///
    /// An empty fragment produces a valid (empty) media rule.
    pub fn wrap(&self, fragment: &str) -> String {
        format!(
            "@media (max-width: {}px) {{\n{}\n}}",
            self.breakpoint.max_width(),
            fragment
        )
    }
}

/// The full set of media-query templates, one per breakpoint.
///
/// Built by iterating [`Breakpoint::ALL`]; there is no way to construct a
/// set with a missing or extra template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaQueries {
    templates: [MediaTemplate; Breakpoint::ALL.len()],
}

impl MediaQueries {
    /// Generates the template for every breakpoint in the table.
    pub fn new() -> Self {
        Self {
            templates: Breakpoint::ALL.map(MediaTemplate::new),
        }
    }

    /// The template for the given breakpoint.
    pub fn get(&self, breakpoint: Breakpoint) -> &MediaTemplate {
        &self.templates[breakpoint as usize]
    }

    /// Wraps a CSS fragment for the given breakpoint.
    ///
    /// Shorthand for `get(breakpoint).wrap(fragment)`.
    pub fn wrap(&self, breakpoint: Breakpoint, fragment: &str) -> String {
        self.get(breakpoint).wrap(fragment)
    }

    /// Iterates templates in table order (smallest breakpoint first).
    pub fn iter(&self) -> impl Iterator<Item = &MediaTemplate> {
        self.templates.iter()
    }

    /// Template for viewports up to 500px wide.
    pub fn up_to_extra_small(&self) -> &MediaTemplate {
        self.get(Breakpoint::UpToExtraSmall)
    }

    /// Template for viewports up to 720px wide.
    pub fn up_to_small(&self) -> &MediaTemplate {
        self.get(Breakpoint::UpToSmall)
    }

    /// Template for viewports up to 960px wide.
    pub fn up_to_medium(&self) -> &MediaTemplate {
        self.get(Breakpoint::UpToMedium)
    }

    /// Template for viewports up to 1280px wide.
    pub fn up_to_large(&self) -> &MediaTemplate {
        self.get(Breakpoint::UpToLarge)
    }
}

impl Default for MediaQueries {
    fn default() -> Self {
        Self::new()
    }
}
