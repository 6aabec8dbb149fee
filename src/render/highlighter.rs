//! The highlighting engine.

use std::sync::Arc;

use super::renderer::render;
use crate::compile::{CompiledTheme, ThemeCache};
use crate::error::HighlightError;
use crate::grammar::{GrammarRegistry, Tokenizer};
use crate::theme::{Theme, ThemeChoice, ThemeRegistry};
use crate::token::Token;

/// Grammar id conventionally used when the caller does not pick one.
pub const DEFAULT_GRAMMAR: &str = "json";

/// A highlighter with registered themes, grammars, and a compiled theme cache.
///
/// Themes are compiled on first use and reused for every later call with the
/// same theme handle, so keep one highlighter around (shared by reference or
/// in an `Arc`) rather than building one per call.
///
/// # Example
///
/// ```rust
/// use termtint::{Highlighter, Theme, Token};
/// use console::Style;
///
/// fn sql(code: &str) -> Token {
///     // A real tokenizer would classify every word.
///     let (keyword, rest) = code.split_at(6);
///     Token::seq([Token::typed("keyword", keyword), Token::text(rest)])
/// }
///
/// let mut highlighter = Highlighter::new();
/// highlighter.register_grammar("sql", sql);
/// highlighter.register_theme("loud", Theme::new().add("keyword", Style::new().bold()));
///
/// let output = highlighter.highlight("SELECT 1", "sql", "loud").unwrap();
/// assert!(output.contains("SELECT"));
///
/// assert!(highlighter.highlight("SELECT 1", "sql", "nonexistent").is_err());
/// ```
#[derive(Debug)]
pub struct Highlighter {
    themes: ThemeRegistry,
    grammars: GrammarRegistry,
    cache: ThemeCache,
}

impl Highlighter {
    /// Creates a highlighter with the built-in themes and no grammars.
    pub fn new() -> Self {
        Self::with_registries(ThemeRegistry::builtin(), GrammarRegistry::new())
    }

    /// Creates a highlighter from explicit registries.
    pub fn with_registries(themes: ThemeRegistry, grammars: GrammarRegistry) -> Self {
        Self {
            themes,
            grammars,
            cache: ThemeCache::new(),
        }
    }

    /// Registers a named theme, returning its shared handle.
    pub fn register_theme(
        &mut self,
        name: impl Into<String>,
        theme: impl Into<Arc<Theme>>,
    ) -> Arc<Theme> {
        self.themes.register(name, theme)
    }

    /// Registers the tokenizer for a grammar id.
    pub fn register_grammar(
        &mut self,
        grammar: impl Into<String>,
        tokenizer: impl Tokenizer + 'static,
    ) {
        self.grammars.register(grammar, tokenizer);
    }

    pub fn themes(&self) -> &ThemeRegistry {
        &self.themes
    }

    pub fn themes_mut(&mut self) -> &mut ThemeRegistry {
        &mut self.themes
    }

    pub fn grammars(&self) -> &GrammarRegistry {
        &self.grammars
    }

    /// Returns the compiled form of `theme`, compiling it on first use.
    pub fn compile(&self, theme: &Arc<Theme>) -> Arc<CompiledTheme> {
        self.cache.get_or_compile(theme)
    }

    /// Tokenizes `code` with `grammar` and renders it with `theme`.
    ///
    /// Code in a grammar with no registered tokenizer is rendered as plain
    /// text, so only the theme's root rule applies.
    ///
    /// # Errors
    ///
    /// Returns [`HighlightError::UnknownTheme`] if `theme` names a theme that
    /// is not registered. Nothing is tokenized or rendered in that case.
    pub fn highlight<'t>(
        &self,
        code: &str,
        grammar: &str,
        theme: impl Into<ThemeChoice<'t>>,
    ) -> Result<String, HighlightError> {
        let compiled = self.resolve(theme.into())?;
        let tokens = self.tokenize(code, grammar);
        Ok(render(&tokens, &compiled))
    }

    /// Renders an already tokenized tree with `theme`.
    ///
    /// # Errors
    ///
    /// Returns [`HighlightError::UnknownTheme`] if `theme` names a theme that
    /// is not registered.
    pub fn highlight_tokens<'t>(
        &self,
        tokens: &Token,
        theme: impl Into<ThemeChoice<'t>>,
    ) -> Result<String, HighlightError> {
        let compiled = self.resolve(theme.into())?;
        Ok(render(tokens, &compiled))
    }

    fn resolve(&self, choice: ThemeChoice<'_>) -> Result<Arc<CompiledTheme>, HighlightError> {
        if let ThemeChoice::Named(name) = choice {
            log::trace!("resolving theme \"{}\"", name);
        }
        let theme = choice.resolve(&self.themes)?;
        Ok(self.compile(&theme))
    }

    fn tokenize(&self, code: &str, grammar: &str) -> Token {
        match self.grammars.get(grammar) {
            Some(tokenizer) => tokenizer.tokenize(code),
            None => {
                log::warn!(
                    "no tokenizer registered for grammar \"{}\"; rendering plain text",
                    grammar
                );
                Token::text(code)
            }
        }
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleFn;
    use crate::theme::VS_CODE_DARK;

    fn tag(name: &'static str) -> StyleFn {
        StyleFn::new(move |s| format!("<{name}>{s}</{name}>"))
    }

    fn words(code: &str) -> Token {
        let mut nodes = Vec::new();
        for (i, word) in code.split(' ').enumerate() {
            if i > 0 {
                nodes.push(Token::text(" "));
            }
            nodes.push(Token::typed("word", word));
        }
        Token::Seq(nodes)
    }

    #[test]
    fn test_highlight_with_registered_grammar_and_theme() {
        let mut highlighter = Highlighter::new();
        highlighter.register_grammar("words", words);
        highlighter.register_theme("t", Theme::new().add("word", tag("w")));

        let output = highlighter.highlight("a b", "words", "t").unwrap();
        assert_eq!(output, "<w>a</w> <w>b</w>");
    }

    #[test]
    fn test_unknown_grammar_renders_plain_text_with_root_rule() {
        let highlighter = Highlighter::new();
        let theme = Arc::new(Theme::new().add("_", tag("root")).add("word", tag("w")));

        let output = highlighter.highlight("a b", "klingon", &theme).unwrap();
        assert_eq!(output, "<root>a b</root>");
    }

    #[test]
    fn test_unknown_theme_is_an_error() {
        let mut highlighter = Highlighter::new();
        highlighter.register_grammar("words", words);

        let err = highlighter.highlight("a b", "words", "nonexistent").unwrap_err();
        assert_eq!(
            err,
            HighlightError::UnknownTheme {
                name: "nonexistent".to_string()
            }
        );
    }

    #[test]
    fn test_named_theme_compiled_once() {
        let highlighter = Highlighter::new();
        let tokens = Token::typed("number", "1");

        highlighter.highlight_tokens(&tokens, VS_CODE_DARK).unwrap();
        highlighter.highlight_tokens(&tokens, VS_CODE_DARK).unwrap();

        let dark = highlighter.themes().get(VS_CODE_DARK).unwrap();
        let compiled = highlighter.compile(dark);
        assert!(Arc::ptr_eq(&compiled, &highlighter.compile(dark)));
        assert_eq!(highlighter.cache.len(), 1);
    }

    #[test]
    fn test_default_choice_uses_dark_builtin() {
        let highlighter = Highlighter::default();
        let tokens = Token::typed("keyword", "SELECT");

        let by_default = highlighter
            .highlight_tokens(&tokens, ThemeChoice::default())
            .unwrap();
        let by_name = highlighter.highlight_tokens(&tokens, VS_CODE_DARK).unwrap();
        assert_eq!(by_default, by_name);
    }

    #[test]
    fn test_registered_theme_replaced_by_name() {
        let mut highlighter = Highlighter::new();
        highlighter.register_theme("t", Theme::new().add("_", tag("old")));
        highlighter.register_theme("t", Theme::new().add("_", tag("new")));

        let output = highlighter.highlight("x", DEFAULT_GRAMMAR, "t").unwrap();
        assert_eq!(output, "<new>x</new>");
    }
}
