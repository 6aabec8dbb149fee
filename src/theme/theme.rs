//! Theme struct: an ordered set of selector rules.

use std::path::Path;

use crate::error::ThemeError;
use crate::style::{StyleDef, StyleList};

/// Selector of the root rule, applied to the whole highlighted output.
pub const ROOT_SELECTOR: &str = "_";

/// An ordered mapping from selectors to style functions.
///
/// Rules keep the order they were first added in; that order decides which
/// rule wins when two equally specific rules match the same token (the later
/// one). Adding a selector that already exists replaces its styles but keeps
/// its original position.
///
/// The `_` selector is the root rule. It styles the whole output and is where
/// a theme's default foreground usually goes.
///
/// # Example
///
/// ```rust
/// use termtint::Theme;
/// use console::Style;
///
/// let theme = Theme::new()
///     .add("_", Style::new().white())
///     .add("string", Style::new().red())
///     .add("tag attr-name", Style::new().cyan())
///     .add("number, boolean", vec![Style::new().blue(), Style::new().bold()]);
///
/// assert_eq!(theme.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Theme {
    rules: Vec<(String, StyleList)>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule, returning an updated theme for chaining.
    ///
    /// The styles can be a single `console::Style` or [`StyleFn`](crate::StyleFn),
    /// or a `Vec` of either.
    pub fn add(mut self, selector: &str, styles: impl Into<StyleList>) -> Self {
        self.insert(selector, styles);
        self
    }

    /// Adds a rule in place, returning the styles it replaced, if any.
    pub fn insert(
        &mut self,
        selector: impl Into<String>,
        styles: impl Into<StyleList>,
    ) -> Option<StyleList> {
        let selector = selector.into();
        let styles = styles.into();
        match self.rules.iter_mut().find(|(s, _)| *s == selector) {
            Some((_, existing)) => Some(std::mem::replace(existing, styles)),
            None => {
                self.rules.push((selector, styles));
                None
            }
        }
    }

    /// Returns the styles attached to `selector` exactly as written.
    pub fn get(&self, selector: &str) -> Option<&StyleList> {
        self.rules
            .iter()
            .find(|(s, _)| s == selector)
            .map(|(_, styles)| styles)
    }

    pub fn has(&self, selector: &str) -> bool {
        self.get(selector).is_some()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleList)> {
        self.rules.iter().map(|(s, styles)| (s.as_str(), styles))
    }

    /// Parses a theme from YAML.
    ///
    /// The document is a mapping from selector to style definition; see
    /// [`StyleDef`] for the accepted shapes. Mapping order is kept.
    ///
    /// ```rust
    /// use termtint::Theme;
    ///
    /// let theme = Theme::from_yaml(r##"
    /// _: "#d4d4d4"
    /// comment: "#6a9955 italic"
    /// "tag attr-name": { fg: "#9cdcfe" }
    /// keyword: [bold, magenta]
    /// "##).unwrap();
    ///
    /// let selectors: Vec<&str> = theme.iter().map(|(s, _)| s).collect();
    /// assert_eq!(selectors, ["_", "comment", "tag attr-name", "keyword"]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, a key is not a string, or a
    /// style definition names an unknown colour or attribute.
    pub fn from_yaml(source: &str) -> Result<Self, ThemeError> {
        let mapping: Option<serde_yaml::Mapping> = serde_yaml::from_str(source)?;
        let mut theme = Theme::new();

        for (key, value) in mapping.unwrap_or_default() {
            let selector = match key {
                serde_yaml::Value::String(s) => s,
                other => {
                    return Err(ThemeError::NonStringSelector {
                        found: format!("{:?}", other),
                    })
                }
            };
            let def: StyleDef = match serde_yaml::from_value(value) {
                Ok(def) => def,
                Err(source) => return Err(ThemeError::Definition { selector, source }),
            };
            let styles = def.to_styles().map_err(|source| ThemeError::Style {
                selector: selector.clone(),
                source,
            })?;
            theme.insert(selector, styles);
        }

        Ok(theme)
    }

    /// Reads and parses a YAML theme file.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`Theme::from_yaml`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&source)
    }
}

impl<K, V> FromIterator<(K, V)> for Theme
where
    K: Into<String>,
    V: Into<StyleList>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut theme = Theme::new();
        for (selector, styles) in iter {
            theme.insert(selector, styles);
        }
        theme
    }
}

impl<K, V> From<Vec<(K, V)>> for Theme
where
    K: Into<String>,
    V: Into<StyleList>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}
