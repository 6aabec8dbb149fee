//! Theme compilation.
//!
//! A [`Theme`] is written selector-first; highlighting needs the opposite
//! view. Compiling indexes every selector alternative by its leaf token type,
//! so the renderer finds all candidate rules for a token with one lookup.
//!
//! ```text
//! "tag attr-name", "attr-name"   →   attr-name: [ ([],    [..]),
//!                                                 (["tag"], [..]) ]
//! ```
//!
//! Alternatives that name the same leaf and the same ancestor stack share one
//! entry; their style lists are concatenated in declaration order.

mod cache;

use std::collections::HashMap;

use crate::selector::parse_selector;
use crate::style::StyleFn;
use crate::theme::{Theme, ROOT_SELECTOR};

pub use cache::ThemeCache;

/// Styles for one ancestor stack of a leaf type.
#[derive(Debug, Clone)]
pub struct RuleEntry {
    /// Required ancestors, outermost first. Empty matches everywhere.
    pub ancestors: Vec<String>,
    /// Styles in declaration order.
    pub styles: Vec<StyleFn>,
}

/// All rules attached to one leaf token type, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct CompiledRule {
    entries: Vec<RuleEntry>,
}

impl CompiledRule {
    pub fn entries(&self) -> &[RuleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn merge(&mut self, ancestors: Vec<String>, styles: &[StyleFn]) {
        match self.entries.iter_mut().find(|e| e.ancestors == ancestors) {
            Some(entry) => entry.styles.extend_from_slice(styles),
            None => self.entries.push(RuleEntry {
                ancestors,
                styles: styles.to_vec(),
            }),
        }
    }
}

/// A theme indexed by leaf token type.
///
/// Always holds a rule for the root selector `_`.
#[derive(Debug, Clone)]
pub struct CompiledTheme {
    rules: HashMap<String, CompiledRule>,
}

impl CompiledTheme {
    /// Returns the rule for a token type.
    pub fn get(&self, kind: &str) -> Option<&CompiledRule> {
        self.rules.get(kind)
    }

    /// Returns the root rule.
    pub fn root(&self) -> &CompiledRule {
        // Always present after compile_theme.
        static EMPTY: CompiledRule = CompiledRule {
            entries: Vec::new(),
        };
        self.rules.get(ROOT_SELECTOR).unwrap_or(&EMPTY)
    }

    /// Number of token types with rules, including `_`.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over the token types that have rules, in no particular order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(|s| s.as_str())
    }
}

/// Compiles a theme without caching.
///
/// Selectors are visited in theme order. If the theme has no `_` rule, one is
/// synthesized with an empty ancestor stack and an identity style.
///
/// Most callers go through [`ThemeCache`] or
/// [`Highlighter`](crate::Highlighter), which compile each theme handle once.
pub fn compile_theme(theme: &Theme) -> CompiledTheme {
    let mut rules: HashMap<String, CompiledRule> = HashMap::new();

    for (selector, styles) in theme.iter() {
        for alternative in parse_selector(selector) {
            rules
                .entry(alternative.leaf)
                .or_default()
                .merge(alternative.ancestors, styles.as_slice());
        }
    }

    rules
        .entry(ROOT_SELECTOR.to_string())
        .or_insert_with(|| CompiledRule {
            entries: vec![RuleEntry {
                ancestors: Vec::new(),
                styles: vec![StyleFn::identity()],
            }],
        });

    log::debug!(
        "compiled theme: {} selectors into rules for {} token types",
        theme.len(),
        rules.len()
    );

    CompiledTheme { rules }
}
