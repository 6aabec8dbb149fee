//! Token tree rendering.

use super::resolve::resolve_styles;
use crate::compile::{CompiledRule, CompiledTheme};
use crate::token::Token;

/// Renders a token tree with a compiled theme, including the root `_` rule.
///
/// This is [`render_tokens`] with an empty ancestor stack, followed by the
/// root rule applied to the whole output.
///
/// # Example
///
/// ```rust
/// use termtint::{compile_theme, render, StyleFn, Theme, Token};
///
/// let theme = Theme::new()
///     .add("keyword", StyleFn::new(|s| s.to_lowercase()))
///     .add("_", StyleFn::new(|s| format!("[{}]", s)));
/// let compiled = compile_theme(&theme);
///
/// let tokens = Token::seq([Token::typed("keyword", "SELECT"), Token::text(" 1")]);
/// assert_eq!(render(&tokens, &compiled), "[select 1]");
/// ```
pub fn render(token: &Token, theme: &CompiledTheme) -> String {
    let body = render_tokens(token, theme, &[]);
    apply_rule(body, theme.root(), &[] as &[&str])
}

/// Renders a token tree below the given ancestor stack.
///
/// - Text is returned unchanged.
/// - A sequence renders each child with the same stack and concatenates them.
/// - A typed token renders its content with its own type pushed on the
///   stack, then applies the styles its rule resolves to against the
///   token's ancestors. Token types without a rule stay unstyled.
///
/// The root `_` rule is not applied; see [`render`].
pub fn render_tokens<'a>(token: &'a Token, theme: &CompiledTheme, stack: &[&'a str]) -> String {
    let mut live = stack.to_vec();
    render_node(token, theme, &mut live)
}

fn render_node<'a>(token: &'a Token, theme: &CompiledTheme, stack: &mut Vec<&'a str>) -> String {
    match token {
        Token::Text(text) => text.clone(),
        Token::Seq(nodes) => nodes
            .iter()
            .map(|node| render_node(node, theme, stack))
            .collect(),
        Token::Typed { kind, content } => {
            stack.push(kind);
            let inner = render_node(content, theme, stack);
            stack.pop();

            match theme.get(kind) {
                Some(rule) => apply_rule(inner, rule, stack.as_slice()),
                None => inner,
            }
        }
    }
}

/// Applies the resolved styles from last to first, each wrapping the previous
/// result, so the most specific style sits closest to the text.
fn apply_rule<L: AsRef<str>>(content: String, rule: &CompiledRule, stack: &[L]) -> String {
    resolve_styles(stack, rule)
        .into_iter()
        .rev()
        .fold(content, |acc, style| style.apply(&acc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::compile_theme;
    use crate::style::StyleFn;
    use crate::theme::Theme;
    use console::Style;
    use proptest::prelude::*;

    fn tag(name: &'static str) -> StyleFn {
        StyleFn::new(move |s| format!("<{name}>{s}</{name}>"))
    }

    fn xml_tokens() -> Token {
        // <a href="x">
        Token::typed(
            "tag",
            Token::seq([
                Token::typed("punctuation", "<"),
                Token::text("a "),
                Token::typed("attr-name", "href"),
                Token::typed(
                    "attr-value",
                    Token::seq([
                        Token::typed("punctuation", "=\""),
                        Token::text("x"),
                        Token::typed("punctuation", "\""),
                    ]),
                ),
                Token::typed("punctuation", ">"),
            ]),
        )
    }

    #[test]
    fn test_text_is_unchanged() {
        let compiled = compile_theme(&Theme::new().add("text", tag("t")));
        assert_eq!(render_tokens(&Token::text("plain"), &compiled, &[]), "plain");
    }

    #[test]
    fn test_sequence_concatenates_without_styling() {
        let compiled = compile_theme(&Theme::new().add("a", tag("a")));
        let tokens = Token::seq([Token::typed("a", "1"), Token::text("+"), Token::typed("a", "2")]);
        assert_eq!(render_tokens(&tokens, &compiled, &[]), "<a>1</a>+<a>2</a>");
    }

    #[test]
    fn test_unknown_kind_is_unstyled() {
        let compiled = compile_theme(&Theme::new());
        let tokens = Token::typed("mystery", Token::typed("deeper", "x"));
        assert_eq!(render_tokens(&tokens, &compiled, &[]), "x");
    }

    #[test]
    fn test_ancestor_scoped_rules() {
        let theme = Theme::new()
            .add("tag", tag("tag"))
            .add("tag punctuation", tag("p"))
            .add("attr-value punctuation", tag("vp"))
            .add("tag attr-name", tag("n"));
        let compiled = compile_theme(&theme);

        assert_eq!(
            render_tokens(&xml_tokens(), &compiled, &[]),
            "<tag><p><</p>a <n>href</n><p><vp>=\"</vp></p>x<p><vp>\"</vp></p><p>></p></tag>"
        );
    }

    #[test]
    fn test_rule_resolves_against_ancestors_only() {
        // A token's own type is not part of the stack its rule is matched against.
        let compiled = compile_theme(&Theme::new().add("x x", tag("nested")));
        let single = Token::typed("x", "v");
        let nested = Token::typed("x", Token::typed("x", "v"));

        assert_eq!(render_tokens(&single, &compiled, &[]), "v");
        assert_eq!(render_tokens(&nested, &compiled, &[]), "<nested>v</nested>");
    }

    #[test]
    fn test_initial_stack_is_respected() {
        let compiled = compile_theme(&Theme::new().add("query value", tag("v")));
        let tokens = Token::typed("value", "1");

        assert_eq!(render_tokens(&tokens, &compiled, &[]), "1");
        assert_eq!(render_tokens(&tokens, &compiled, &["query", "pair"]), "<v>1</v>");
    }

    #[test]
    fn test_specific_style_applied_closest_to_text() {
        let theme = Theme::new()
            .add("string", tag("base"))
            .add("template string", tag("tpl"));
        let compiled = compile_theme(&theme);
        let tokens = Token::typed("template", Token::typed("string", "s"));

        assert_eq!(
            render_tokens(&tokens, &compiled, &[]),
            "<base><tpl>s</tpl></base>"
        );
    }

    #[test]
    fn test_style_list_applied_last_first() {
        let compiled = compile_theme(&Theme::new().add("k", vec![tag("1"), tag("2")]));
        let tokens = Token::typed("k", "x");
        assert_eq!(render_tokens(&tokens, &compiled, &[]), "<1><2>x</2></1>");
    }

    #[test]
    fn test_render_applies_root_rule_last() {
        let theme = Theme::new()
            .add("_", tag("root"))
            .add("keyword", tag("kw"));
        let compiled = compile_theme(&theme);
        let tokens = Token::seq([Token::typed("keyword", "SELECT"), Token::text(" 1")]);

        assert_eq!(render(&tokens, &compiled), "<root><kw>SELECT</kw> 1</root>");
    }

    #[test]
    fn test_render_without_root_rule_is_identity_at_root() {
        let compiled = compile_theme(&Theme::new().add("keyword", tag("kw")));
        let tokens = Token::seq([Token::typed("keyword", "SELECT"), Token::text(" 1")]);
        assert_eq!(render(&tokens, &compiled), "<kw>SELECT</kw> 1");
    }

    #[test]
    fn test_console_styles_emit_ansi() {
        let red = Style::new().red().force_styling(true);
        let compiled = compile_theme(&Theme::new().add("string", red.clone()));
        let output = render(&Token::typed("string", "\"x\""), &compiled);

        assert_eq!(output, red.apply_to("\"x\"").to_string());
        assert!(output.starts_with("\x1b[31m"));
    }

    #[test]
    fn test_render_does_not_mutate_tokens() {
        let compiled = compile_theme(&Theme::new().add("tag", tag("t")));
        let tokens = xml_tokens();
        let before = tokens.clone();
        render(&tokens, &compiled);
        assert_eq!(tokens, before);
    }

    fn arb_token() -> impl Strategy<Value = Token> {
        let leaf = "[a-z ]{0,6}".prop_map(Token::Text);
        leaf.prop_recursive(4, 32, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Token::Seq),
                ("[a-c]", inner).prop_map(|(kind, content)| Token::typed(kind, content)),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_render_is_deterministic(tokens in arb_token()) {
            let theme = Theme::new()
                .add("a", tag("a"))
                .add("a b", tag("ab"))
                .add("c, b", tag("cb"));
            let compiled = compile_theme(&theme);
            prop_assert_eq!(render(&tokens, &compiled), render(&tokens, &compiled));
        }

        #[test]
        fn prop_identity_theme_yields_plain_text(tokens in arb_token()) {
            let compiled = compile_theme(&Theme::new().add("a, b, c", StyleFn::identity()));
            prop_assert_eq!(render(&tokens, &compiled), tokens.plain_text());
        }
    }
}
