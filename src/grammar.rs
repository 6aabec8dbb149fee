//! Tokenizers and the grammar registry.
//!
//! Grammar support lives outside this crate. A [`Tokenizer`] turns source text
//! into a [`Token`] tree; the [`GrammarRegistry`] maps grammar ids such as
//! `"json"` or `"sql"` to tokenizers.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::token::Token;

/// Turns source text into a token tree for one grammar.
///
/// Closures of the form `Fn(&str) -> Token` implement this trait.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, code: &str) -> Token;
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Token + Send + Sync,
{
    fn tokenize(&self, code: &str) -> Token {
        self(code)
    }
}

/// Tokenizer that returns the whole input as a single text node.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTokenizer;

impl Tokenizer for PlainTokenizer {
    fn tokenize(&self, code: &str) -> Token {
        Token::text(code)
    }
}

/// Registry of tokenizers keyed by grammar id.
///
/// Ids are case-sensitive. Registering an id again replaces the earlier
/// tokenizer.
#[derive(Clone, Default)]
pub struct GrammarRegistry {
    tokenizers: HashMap<String, Arc<dyn Tokenizer>>,
}

impl GrammarRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tokenizer for `grammar`.
    pub fn register(&mut self, grammar: impl Into<String>, tokenizer: impl Tokenizer + 'static) {
        self.tokenizers.insert(grammar.into(), Arc::new(tokenizer));
    }

    /// Looks up the tokenizer for `grammar`.
    pub fn get(&self, grammar: &str) -> Option<&dyn Tokenizer> {
        self.tokenizers.get(grammar).map(AsRef::as_ref)
    }

    pub fn contains(&self, grammar: &str) -> bool {
        self.tokenizers.contains_key(grammar)
    }

    pub fn len(&self) -> usize {
        self.tokenizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokenizers.is_empty()
    }

    /// Returns an iterator over all registered grammar ids.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tokenizers.keys().map(|s| s.as_str())
    }
}

impl fmt::Debug for GrammarRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("GrammarRegistry")
            .field("grammars", &names)
            .finish()
    }
}
