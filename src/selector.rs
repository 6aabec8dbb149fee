//! Theme selector parsing.
//!
//! A selector names the token type a style attaches to, optionally preceded
//! by ancestor types it must be nested in:
//!
//! | Selector | Meaning |
//! |----------|---------|
//! | `string` | any `string` token |
//! | `tag attr-name` | an `attr-name` token somewhere inside a `tag` token |
//! | `number, boolean` | either a `number` or a `boolean` token |
//!
//! Ancestors are matched as an ordered subsequence of the live ancestor stack,
//! so `query value` also applies to a `value` inside `pair` inside `query`.
//! There is no compound (`.a.b`), wildcard, or escape syntax: every name must
//! equal a token type exactly.

/// One alternative of a parsed selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    /// Required ancestor types, outermost first.
    pub ancestors: Vec<String>,
    /// The token type the rule attaches to.
    pub leaf: String,
}

impl Selector {
    /// Number of ancestors the selector requires.
    pub fn specificity(&self) -> usize {
        self.ancestors.len()
    }
}

/// Parses a selector string into its comma-separated alternatives.
///
/// Blank input, and blank alternatives inside a list, produce nothing.
///
/// # Example
///
/// ```rust
/// use termtint::{parse_selector, Selector};
///
/// let parsed = parse_selector("a b, c");
/// assert_eq!(
///     parsed,
///     vec![
///         Selector { ancestors: vec!["a".into()], leaf: "b".into() },
///         Selector { ancestors: vec![], leaf: "c".into() },
///     ]
/// );
/// ```
pub fn parse_selector(selector: &str) -> Vec<Selector> {
    selector
        .split(',')
        .filter_map(|alternative| {
            let mut names: Vec<String> = alternative.split_whitespace().map(String::from).collect();
            let leaf = names.pop()?;
            Some(Selector {
                ancestors: names,
                leaf,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sel(ancestors: &[&str], leaf: &str) -> Selector {
        Selector {
            ancestors: ancestors.iter().map(|s| s.to_string()).collect(),
            leaf: leaf.to_string(),
        }
    }

    #[test]
    fn test_single_type() {
        assert_eq!(parse_selector("string"), vec![sel(&[], "string")]);
    }

    #[test]
    fn test_ancestor_chain() {
        assert_eq!(
            parse_selector("query pair key"),
            vec![sel(&["query", "pair"], "key")]
        );
    }

    #[test]
    fn test_alternatives_are_trimmed() {
        assert_eq!(
            parse_selector("a b, c"),
            vec![sel(&["a"], "b"), sel(&[], "c")]
        );
        assert_eq!(
            parse_selector("  number ,boolean  "),
            vec![sel(&[], "number"), sel(&[], "boolean")]
        );
    }

    #[test]
    fn test_runs_of_whitespace() {
        assert_eq!(
            parse_selector("stack-frame \t\n  filename"),
            vec![sel(&["stack-frame"], "filename")]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_selector("").is_empty());
        assert!(parse_selector("   ").is_empty());
    }

    #[test]
    fn test_blank_alternatives_skipped() {
        assert_eq!(
            parse_selector("a,, b ,"),
            vec![sel(&[], "a"), sel(&[], "b")]
        );
    }

    #[test]
    fn test_compound_syntax_is_literal() {
        // `.token.bold` is not special; it is just an unusual type name.
        assert_eq!(parse_selector(".token.bold"), vec![sel(&[], ".token.bold")]);
    }

    #[test]
    fn test_specificity() {
        assert_eq!(parse_selector("tag attr-name")[0].specificity(), 1);
        assert_eq!(parse_selector("_")[0].specificity(), 0);
    }

    proptest! {
        #[test]
        fn prop_alternatives_round_trip(
            chains in prop::collection::vec(
                prop::collection::vec("[a-z][a-z-]{0,8}", 1..4),
                1..4,
            )
        ) {
            let source = chains
                .iter()
                .map(|chain| chain.join(" "))
                .collect::<Vec<_>>()
                .join(", ");
            let parsed = parse_selector(&source);

            prop_assert_eq!(parsed.len(), chains.len());
            for (selector, chain) in parsed.iter().zip(&chains) {
                prop_assert_eq!(&selector.leaf, chain.last().unwrap());
                prop_assert_eq!(&selector.ancestors[..], &chain[..chain.len() - 1]);
            }
        }
    }
}
