//! # termtint - Cascading Syntax Highlighting for the Terminal
//!
//! `termtint` renders tokenized source text as a string decorated with
//! terminal escape sequences. Styling follows a small CSS-like cascade: a
//! theme maps selectors (token types, optionally scoped by ancestor types) to
//! style functions, and the most specific matching rule wins.
//!
//! ## Core Concepts
//!
//! - [`Token`]: The tree of typed tokens and raw text a tokenizer produces
//! - [`Tokenizer`]: Turns source text into a token tree for one grammar
//! - [`Theme`]: Ordered selector rules, built in code or loaded from YAML
//! - [`StyleFn`]: An opaque text decorator, usually a [`console::Style`]
//! - [`Highlighter`]: Registries plus a per-theme compile cache
//!
//! ## Quick Start
//!
//! ```rust
//! use termtint::{Highlighter, Theme, Token};
//! use console::Style;
//! use std::sync::Arc;
//!
//! let theme = Arc::new(
//!     Theme::new()
//!         .add("keyword", Style::new().bold())
//!         .add("string", Style::new().red()),
//! );
//!
//! let tokens = Token::seq([
//!     Token::typed("keyword", "SELECT"),
//!     Token::text(" "),
//!     Token::typed("string", "\"x\""),
//! ]);
//!
//! let highlighter = Highlighter::new();
//! let output = highlighter.highlight_tokens(&tokens, &theme).unwrap();
//! println!("{}", output);
//! ```
//!
//! ## Selectors
//!
//! | Selector | Applies to |
//! |----------|------------|
//! | `_` | the whole output (root rule) |
//! | `string` | every `string` token |
//! | `tag attr-name` | `attr-name` tokens nested, at any depth, in a `tag` token |
//! | `number, boolean` | `number` and `boolean` tokens |
//!
//! Rules with more ancestors are more specific. Among equally specific rules
//! the one declared later wins. The winning style is applied closest to the
//! text, so its colour is the one a terminal shows.
//!
//! ## Themes From YAML
//!
//! ```rust
//! use termtint::Theme;
//!
//! let theme = Theme::from_yaml(r##"
//! _: "#d4d4d4"
//! keyword: "#c586c0"
//! comment: "#6a9955 italic"
//! "tag attr-name": { fg: "#9cdcfe" }
//! "##).unwrap();
//! assert_eq!(theme.len(), 4);
//! ```
//!
//! ## Named Themes
//!
//! A [`Highlighter`] starts with the built-in `vsCodeDark` and `vsCodeLight`
//! themes. Asking for a name that is not registered is the one error
//! highlighting can produce:
//!
//! ```rust
//! use termtint::{Highlighter, HighlightError};
//!
//! let highlighter = Highlighter::new();
//! assert!(highlighter.highlight("{}", "json", "vsCodeDark").is_ok());
//!
//! let err = highlighter.highlight("{}", "json", "nonexistent").unwrap_err();
//! assert_eq!(err, HighlightError::UnknownTheme { name: "nonexistent".into() });
//! ```

pub mod compile;
mod error;
pub mod grammar;
pub mod render;
pub mod selector;
pub mod style;
pub mod theme;
mod token;
mod util;

pub use compile::{compile_theme, CompiledRule, CompiledTheme, RuleEntry, ThemeCache};
pub use error::{HighlightError, ThemeError};
pub use grammar::{GrammarRegistry, PlainTokenizer, Tokenizer};
pub use render::{
    render, render_tokens, resolve_styles, stack_matches, Highlighter, DEFAULT_GRAMMAR,
};
pub use selector::{parse_selector, Selector};
pub use style::{parse_color, StyleAttributes, StyleDef, StyleFn, StyleList, StyleParseError};
pub use theme::{
    detect_color_mode, set_theme_detector, vs_code_dark, vs_code_light, AdaptiveTheme, ColorMode,
    Theme, ThemeChoice, ThemeFile, ThemeRegistry, DEFAULT_THEME, ROOT_SELECTOR, VS_CODE_DARK,
    VS_CODE_LIGHT,
};
pub use token::Token;
pub use util::{parse_hex, rgb_to_ansi256, unpack_rgb};
