//! Adaptive themes that respond to system color mode.

use std::sync::{Arc, Mutex, PoisonError};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;

use super::builtin::{vs_code_dark, vs_code_light};
use super::theme::Theme;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

/// A theme that adapts based on the user's display mode.
///
/// Contains separate themes for light and dark modes, selecting the
/// appropriate one from OS settings each time it is resolved. Both variants
/// are shared handles, so each keeps its compiled form cached.
///
/// # Example
///
/// ```rust
/// use termtint::{set_theme_detector, AdaptiveTheme, ColorMode, Highlighter, Token};
///
/// set_theme_detector(|| ColorMode::Dark);
/// let highlighter = Highlighter::new();
/// let adaptive = AdaptiveTheme::vs_code();
/// let tokens = Token::typed("number", "42");
///
/// let output = highlighter.highlight_tokens(&tokens, &adaptive).unwrap();
/// assert!(output.contains("42"));
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveTheme {
    light: Arc<Theme>,
    dark: Arc<Theme>,
}

impl AdaptiveTheme {
    /// Creates an adaptive theme with separate light and dark variants.
    pub fn new(light: impl Into<Arc<Theme>>, dark: impl Into<Arc<Theme>>) -> Self {
        Self {
            light: light.into(),
            dark: dark.into(),
        }
    }

    /// Pairs the built-in `vsCodeLight` and `vsCodeDark` themes.
    pub fn vs_code() -> Self {
        Self::new(vs_code_light(), vs_code_dark())
    }

    /// Returns the variant for `mode`.
    pub fn for_mode(&self, mode: ColorMode) -> &Arc<Theme> {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    /// Resolves to the appropriate theme based on the current color mode.
    pub(crate) fn resolve(&self) -> &Arc<Theme> {
        self.for_mode(detect_color_mode())
    }
}

type ThemeDetector = fn() -> ColorMode;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector used to determine whether the user prefers a light or dark theme.
///
/// This is useful for testing or when you want to force a specific color mode.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Detects the current color mode using the installed detector.
pub fn detect_color_mode() -> ColorMode {
    let detector = THEME_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

fn os_theme_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}
