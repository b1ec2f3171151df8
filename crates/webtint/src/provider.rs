//! Bridging external mode state into the pure theming pipeline.
//!
//! The theming core never owns the dark-mode flag. It reads it through the
//! minimal [`ModeSource`] interface and recomputes the theme only when the
//! flag's value actually changes — a single-slot cache keyed on the flag,
//! not on how often consumers ask.
//!
//! ```rust
//! use std::rc::Rc;
//! use webtint::{SharedMode, ThemeProvider};
//!
//! let mode = SharedMode::new(false);
//! let provider = ThemeProvider::new(mode.clone());
//!
//! let a = provider.current();
//! let b = provider.current();
//! assert!(Rc::ptr_eq(&a, &b)); // unchanged flag: same theme instance
//!
//! mode.set_dark_mode(true);
//! let c = provider.current();
//! assert!(c.dark_mode);
//! assert!(!Rc::ptr_eq(&a, &c)); // flag changed: new theme
//! ```
//!
//! # OS mode detection
//!
//! [`SystemModeSource`] asks the OS for the user's preferred scheme via
//! [`detect_dark_mode`]. Override detection for testing with
//! [`set_mode_detector`]:
//!
//! ```rust,ignore
//! webtint::set_mode_detector(|| true);
//! ```
//!
//! # Single-threaded design
//!
//! Theming happens on the render path of a single-threaded UI, so the
//! provider hands out `Rc<Theme>` and does not require `Send + Sync`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Mutex;

use once_cell::sync::Lazy;

use crate::theme::Theme;

/// Minimal read interface over the externally owned dark-mode flag.
///
/// Implementors only report the current value; ownership, persistence, and
/// toggling stay with the external collaborator.
pub trait ModeSource {
    /// Whether dark mode is currently active.
    fn dark_mode(&self) -> bool;
}

/// A fixed mode, useful in tests and for mode-pinned rendering.
impl ModeSource for bool {
    fn dark_mode(&self) -> bool {
        *self
    }
}

/// A shared, mutable mode flag.
///
/// The smallest useful external store: cloning shares the underlying slot,
/// so application code can hold one handle for toggling while the provider
/// holds another for reading.
#[derive(Debug, Clone, Default)]
pub struct SharedMode {
    flag: Rc<Cell<bool>>,
}

impl SharedMode {
    /// Creates a shared flag with the given initial value.
    pub fn new(dark_mode: bool) -> Self {
        Self {
            flag: Rc::new(Cell::new(dark_mode)),
        }
    }

    /// Sets the flag. Providers observe the change on their next read.
    pub fn set_dark_mode(&self, dark_mode: bool) {
        self.flag.set(dark_mode);
    }

    /// Flips the flag, returning the new value.
    pub fn toggle(&self) -> bool {
        let next = !self.flag.get();
        self.flag.set(next);
        next
    }
}

impl ModeSource for SharedMode {
    fn dark_mode(&self) -> bool {
        self.flag.get()
    }
}

type ModeDetector = fn() -> bool;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used by [`detect_dark_mode`].
///
/// Useful for testing or forcing a specific mode. Tests that call this
/// should run serially and restore their changes.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Detects whether the user's OS preference is dark mode.
///
/// Falls back to light mode when the OS does not report a preference or
/// detection fails, per the provider contract: an unavailable source must
/// never crash theming.
pub fn detect_dark_mode() -> bool {
    let detector = MODE_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_mode_detector() -> bool {
    matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
}

/// The user's OS color-scheme preference as a [`ModeSource`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemModeSource;

impl ModeSource for SystemModeSource {
    fn dark_mode(&self) -> bool {
        detect_dark_mode()
    }
}

/// Supplies the current [`Theme`] to consumers, recomputing only on mode
/// change.
///
/// `current()` reads the source's flag on every call but rebuilds the theme
/// only when the value differs from the cached one. Unchanged flag means the
/// identical `Rc<Theme>` is returned, so downstream consumers can skip work
/// by pointer identity.
#[derive(Debug)]
pub struct ThemeProvider<S: ModeSource> {
    source: S,
    cache: RefCell<Option<(bool, Rc<Theme>)>>,
}

impl<S: ModeSource> ThemeProvider<S> {
    /// Creates a provider over the given mode source.
    ///
    /// The first `current()` call computes the theme; nothing is derived
    /// up front.
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: RefCell::new(None),
        }
    }

    /// The theme for the source's current mode.
    ///
    /// Recomputes only when the flag changed since the last call.
    pub fn current(&self) -> Rc<Theme> {
        let dark_mode = self.source.dark_mode();

        let mut cache = self.cache.borrow_mut();
        if let Some((cached_mode, theme)) = cache.as_ref() {
            if *cached_mode == dark_mode {
                return Rc::clone(theme);
            }
        }

        let theme = Rc::new(Theme::from_mode(dark_mode));
        *cache = Some((dark_mode, Rc::clone(&theme)));
        theme
    }

    /// Renders the document-level baseline stylesheet for the current theme.
    ///
    /// Convenience over [`crate::stylesheet::global_stylesheet`]; intended
    /// to be applied once per mode at the document root.
    pub fn global_stylesheet(&self) -> Result<String, crate::error::ThemeError> {
        crate::stylesheet::global_stylesheet(&self.current())
    }
}

impl ThemeProvider<SystemModeSource> {
    /// A provider that follows the OS color-scheme preference.
    pub fn system() -> Self {
        Self::new(SystemModeSource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_first_read_computes_theme() {
        let provider = ThemeProvider::new(true);
        let theme = provider.current();
        assert!(theme.dark_mode);
    }

    #[test]
    fn test_unchanged_flag_preserves_identity() {
        let mode = SharedMode::new(false);
        let provider = ThemeProvider::new(mode.clone());

        let first = provider.current();
        let second = provider.current();
        assert!(Rc::ptr_eq(&first, &second));

        // Setting the same value is not a change.
        mode.set_dark_mode(false);
        let third = provider.current();
        assert!(Rc::ptr_eq(&first, &third));
    }

    #[test]
    fn test_changed_flag_recomputes() {
        let mode = SharedMode::new(false);
        let provider = ThemeProvider::new(mode.clone());

        let light = provider.current();
        assert!(!light.dark_mode);

        mode.set_dark_mode(true);
        let dark = provider.current();
        assert!(dark.dark_mode);
        assert!(!Rc::ptr_eq(&light, &dark));
        assert_eq!(*dark, Theme::from_mode(true));
    }

    #[test]
    fn test_shared_mode_toggle() {
        let mode = SharedMode::new(false);
        assert!(mode.toggle());
        assert!(mode.dark_mode());
        assert!(!mode.toggle());
        assert!(!mode.dark_mode());
    }

    #[test]
    fn test_shared_mode_clone_shares_slot() {
        let a = SharedMode::new(false);
        let b = a.clone();
        b.set_dark_mode(true);
        assert!(a.dark_mode());
    }

    #[test]
    #[serial]
    fn test_detector_override() {
        set_mode_detector(|| true);
        assert!(detect_dark_mode());
        assert!(SystemModeSource.dark_mode());

        set_mode_detector(|| false);
        assert!(!detect_dark_mode());
    }

    #[test]
    #[serial]
    fn test_system_provider_follows_detector() {
        set_mode_detector(|| true);
        let provider = ThemeProvider::system();
        assert!(provider.current().dark_mode);

        set_mode_detector(|| false);
        assert!(!provider.current().dark_mode);
    }
}
