//! Style functions: opaque text decorators.

use std::fmt;
use std::sync::Arc;

use console::Style;

/// A transform from text to decorated text.
///
/// Style functions are cheap to clone (the closure is shared) and are
/// composed by applying one to the output of another. A [`console::Style`]
/// converts into a style function directly.
///
/// # Example
///
/// ```rust
/// use termtint::StyleFn;
///
/// let shout = StyleFn::new(|s| s.to_uppercase());
/// assert_eq!(shout.apply("select"), "SELECT");
/// assert_eq!(StyleFn::identity().apply("as is"), "as is");
/// ```
#[derive(Clone)]
pub struct StyleFn {
    inner: Arc<dyn Fn(&str) -> String + Send + Sync>,
}

impl StyleFn {
    /// Wraps a closure as a style function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// A style function that returns its input unchanged.
    pub fn identity() -> Self {
        Self::new(str::to_owned)
    }

    /// Applies the style to `text`.
    pub fn apply(&self, text: &str) -> String {
        (self.inner)(text)
    }

    /// Returns true if both values share the same underlying closure.
    pub fn ptr_eq(&self, other: &StyleFn) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for StyleFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleFn").finish_non_exhaustive()
    }
}

impl From<Style> for StyleFn {
    fn from(style: Style) -> Self {
        StyleFn::new(move |text| style.apply_to(text).to_string())
    }
}

/// One or several style functions attached to a single selector.
///
/// The functions are kept in declaration order.
#[derive(Debug, Clone, Default)]
pub struct StyleList(Vec<StyleFn>);

impl StyleList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a style function.
    pub fn push(&mut self, style: impl Into<StyleFn>) {
        self.0.push(style.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StyleFn> {
        self.0.iter()
    }

    /// Returns the functions as a slice.
    pub fn as_slice(&self) -> &[StyleFn] {
        &self.0
    }
}

impl From<StyleFn> for StyleList {
    fn from(style: StyleFn) -> Self {
        Self(vec![style])
    }
}

impl From<Style> for StyleList {
    fn from(style: Style) -> Self {
        Self(vec![style.into()])
    }
}

impl From<Vec<StyleFn>> for StyleList {
    fn from(styles: Vec<StyleFn>) -> Self {
        Self(styles)
    }
}

impl From<Vec<Style>> for StyleList {
    fn from(styles: Vec<Style>) -> Self {
        styles.into_iter().collect()
    }
}

impl<S: Into<StyleFn>> FromIterator<S> for StyleList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a StyleList {
    type Item = &'a StyleFn;
    type IntoIter = std::slice::Iter<'a, StyleFn>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_returns_input() {
        assert_eq!(StyleFn::identity().apply("\"x\""), "\"x\"");
        assert_eq!(StyleFn::identity().apply(""), "");
    }

    #[test]
    fn test_closure_style() {
        let wrap = StyleFn::new(|s| format!("<{}>", s));
        assert_eq!(wrap.apply("a"), "<a>");
    }

    #[test]
    fn test_clone_shares_closure() {
        let wrap = StyleFn::new(|s| format!("<{}>", s));
        let copy = wrap.clone();
        assert!(wrap.ptr_eq(&copy));
        assert!(!wrap.ptr_eq(&StyleFn::identity()));
    }

    #[test]
    fn test_console_style_conversion() {
        let red: StyleFn = Style::new().red().force_styling(true).into();
        let output = red.apply("hi");
        assert!(output.contains("\x1b[31m"));
        assert!(output.contains("hi"));
    }

    #[test]
    fn test_style_list_conversions() {
        let single: StyleList = Style::new().bold().into();
        assert_eq!(single.len(), 1);

        let many: StyleList = vec![Style::new().bold(), Style::new().dim()].into();
        assert_eq!(many.len(), 2);

        let collected: StyleList = [StyleFn::identity(), StyleFn::identity()]
            .into_iter()
            .collect();
        assert_eq!(collected.len(), 2);
        assert!(StyleList::new().is_empty());
    }
}
