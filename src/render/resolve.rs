//! Rule matching and specificity ordering.

use crate::compile::CompiledRule;
use crate::style::StyleFn;

/// Returns true if `rule_stack` appears in `live_stack` as an ordered subsequence.
///
/// An empty rule stack always matches. Otherwise the live stack is walked
/// once, advancing through the rule stack on every equal entry, so other
/// ancestors may sit between the required ones.
///
/// ```rust
/// use termtint::stack_matches;
///
/// assert!(stack_matches(&["a", "c"], &["a", "b", "c"]));
/// assert!(!stack_matches(&["a", "c"], &["a", "b"]));
/// assert!(!stack_matches(&["c", "a"], &["a", "b", "c"]));
/// ```
pub fn stack_matches<R, L>(rule_stack: &[R], live_stack: &[L]) -> bool
where
    R: AsRef<str>,
    L: AsRef<str>,
{
    let mut required = rule_stack.iter().peekable();
    for live in live_stack {
        match required.peek() {
            Some(next) if next.as_ref() == live.as_ref() => {
                required.next();
            }
            Some(_) => {}
            None => break,
        }
    }
    required.peek().is_none()
}

/// Collects the styles of every entry in `rule` that applies at `live_stack`.
///
/// Entries are ordered by ascending number of required ancestors; equally
/// specific entries keep declaration order. Each entry's styles are then
/// flattened in order, so the result runs from least to most specific.
pub fn resolve_styles<'r, L>(live_stack: &[L], rule: &'r CompiledRule) -> Vec<&'r StyleFn>
where
    L: AsRef<str>,
{
    let mut matching: Vec<_> = rule
        .entries()
        .iter()
        .filter(|entry| stack_matches(&entry.ancestors, live_stack))
        .collect();

    // sort_by_key is stable
    matching.sort_by_key(|entry| entry.ancestors.len());

    matching
        .into_iter()
        .flat_map(|entry| entry.styles.iter())
        .collect()
}
