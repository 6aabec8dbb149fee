//! Error types for highlighting and theme loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::style::StyleParseError;

/// Error returned by [`Highlighter`](crate::Highlighter) operations.
///
/// Highlighting itself cannot fail: unknown token kinds and selectors that
/// match nothing simply leave text unstyled. The only failure is asking for
/// a theme by a name the registry does not know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HighlightError {
    /// The requested theme name is not registered.
    #[error("invalid theme: {name}")]
    UnknownTheme { name: String },
}

/// Error returned when a theme definition cannot be loaded.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The theme source is not valid YAML, or not a mapping of selectors.
    #[error("invalid theme definition: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A theme file or directory could not be read.
    #[error("failed to read theme \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A selector's style definition has none of the accepted shapes.
    #[error("invalid style definition for selector '{selector}': {source}")]
    Definition {
        selector: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// A selector's style definition is invalid.
    #[error("invalid style for selector '{selector}': {source}")]
    Style {
        selector: String,
        #[source]
        source: StyleParseError,
    },

    /// A theme mapping key is not a string.
    #[error("theme selectors must be strings, found {found}")]
    NonStringSelector { found: String },
}
