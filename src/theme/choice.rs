//! Theme selection for highlighting.

use std::sync::Arc;

use super::adaptive::AdaptiveTheme;
use super::builtin::VS_CODE_DARK;
use super::registry::ThemeRegistry;
use super::theme::Theme;
use crate::error::HighlightError;

/// Name of the theme used when the caller does not pick one.
pub const DEFAULT_THEME: &str = VS_CODE_DARK;

/// Reference to a registered theme name, a theme value, or an adaptive theme.
///
/// Theme values are passed as `Arc<Theme>` because compiled themes are
/// cached per `Arc`: highlighting twice with the same handle compiles once.
#[derive(Debug, Clone, Copy)]
pub enum ThemeChoice<'a> {
    /// A theme looked up by name in the highlighter's registry.
    Named(&'a str),
    /// A theme value supplied by the caller.
    Theme(&'a Arc<Theme>),
    /// An adaptive theme that selects light/dark based on OS settings.
    Adaptive(&'a AdaptiveTheme),
}

impl<'a> ThemeChoice<'a> {
    /// Resolves to a concrete theme handle.
    ///
    /// # Errors
    ///
    /// Returns [`HighlightError::UnknownTheme`] if a named theme is not in `registry`.
    pub(crate) fn resolve(&self, registry: &ThemeRegistry) -> Result<Arc<Theme>, HighlightError> {
        match self {
            ThemeChoice::Named(name) => registry.get(name).map(Arc::clone),
            ThemeChoice::Theme(theme) => Ok(Arc::clone(theme)),
            ThemeChoice::Adaptive(adaptive) => Ok(Arc::clone(adaptive.resolve())),
        }
    }
}

impl Default for ThemeChoice<'_> {
    fn default() -> Self {
        ThemeChoice::Named(DEFAULT_THEME)
    }
}

impl<'a> From<&'a str> for ThemeChoice<'a> {
    fn from(name: &'a str) -> Self {
        ThemeChoice::Named(name)
    }
}

impl<'a> From<&'a String> for ThemeChoice<'a> {
    fn from(name: &'a String) -> Self {
        ThemeChoice::Named(name)
    }
}

impl<'a> From<&'a Arc<Theme>> for ThemeChoice<'a> {
    fn from(theme: &'a Arc<Theme>) -> Self {
        ThemeChoice::Theme(theme)
    }
}

impl<'a> From<&'a AdaptiveTheme> for ThemeChoice<'a> {
    fn from(adaptive: &'a AdaptiveTheme) -> Self {
        ThemeChoice::Adaptive(adaptive)
    }
}
