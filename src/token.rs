//! Token trees produced by tokenizers.

use serde::{Deserialize, Serialize};

/// A node of a tokenized source text.
///
/// Tokenizers produce a tree: raw text, sequences of nodes, and typed tokens
/// whose content is itself a node. A typed token's `kind` is a single type
/// name such as `"string"` or `"attr-name"`.
///
/// The serde representation matches the common JavaScript tokenizer shape,
/// `string | [node, ..] | {"type": .., "content": ..}`, so token trees can be
/// exchanged as JSON.
///
/// # Example
///
/// ```rust
/// use termtint::Token;
///
/// let tree = Token::seq([
///     Token::typed("keyword", "SELECT"),
///     Token::text(" "),
///     Token::typed("string", "\"x\""),
/// ]);
/// assert_eq!(tree.plain_text(), "SELECT \"x\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Token {
    /// Unclassified text.
    Text(String),
    /// An ordered run of nodes.
    Seq(Vec<Token>),
    /// A token with a type and nested content.
    Typed {
        #[serde(rename = "type")]
        kind: String,
        content: Box<Token>,
    },
}

impl Token {
    pub fn text(text: impl Into<String>) -> Self {
        Token::Text(text.into())
    }

    pub fn seq<I, T>(nodes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Token>,
    {
        Token::Seq(nodes.into_iter().map(Into::into).collect())
    }

    pub fn typed(kind: impl Into<String>, content: impl Into<Token>) -> Self {
        Token::Typed {
            kind: kind.into(),
            content: Box::new(content.into()),
        }
    }

    /// Returns the token's type, or `None` for text and sequences.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Token::Typed { kind, .. } => Some(kind),
            Token::Text(_) | Token::Seq(_) => None,
        }
    }

    /// Concatenates all text in the tree, discarding structure.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Token::Text(text) => out.push_str(text),
            Token::Seq(nodes) => nodes.iter().for_each(|node| node.collect_text(out)),
            Token::Typed { content, .. } => content.collect_text(out),
        }
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Token::Text(text.to_string())
    }
}

impl From<String> for Token {
    fn from(text: String) -> Self {
        Token::Text(text)
    }
}

impl From<Vec<Token>> for Token {
    fn from(nodes: Vec<Token>) -> Self {
        Token::Seq(nodes)
    }
}
