//! Built-in themes.
//!
//! Both themes cover the token types of the JSON, URI, SQL, JavaScript stack
//! trace and XML grammars. Colours are given in hex and mapped onto the ANSI
//! 256-colour palette.

use std::sync::Arc;

use console::{Color, Style};
use once_cell::sync::Lazy;

use super::theme::Theme;
use crate::util::{rgb_to_ansi256, unpack_rgb};

/// Registry name of the dark theme.
pub const VS_CODE_DARK: &str = "vsCodeDark";

/// Registry name of the light theme.
pub const VS_CODE_LIGHT: &str = "vsCodeLight";

static DARK: Lazy<Arc<Theme>> = Lazy::new(|| Arc::new(build_vs_code_dark()));
static LIGHT: Lazy<Arc<Theme>> = Lazy::new(|| Arc::new(build_vs_code_light()));

/// Dark theme modelled on VS Code's default dark colours.
///
/// Every call returns the same shared theme, so compiled results are reused.
pub fn vs_code_dark() -> Arc<Theme> {
    Arc::clone(&DARK)
}

/// Light theme modelled on VS Code's default light colours.
pub fn vs_code_light() -> Arc<Theme> {
    Arc::clone(&LIGHT)
}

fn hex(packed: u32) -> Style {
    Style::new().fg(Color::Color256(rgb_to_ansi256(unpack_rgb(packed))))
}

fn build_vs_code_dark() -> Theme {
    Theme::new()
        // default
        .add("_", hex(0xd4d4d4))
        // json
        .add("property", hex(0x9cdcfe))
        .add("string", hex(0xce9178))
        .add("comment", hex(0x6a9955).italic())
        .add("number", hex(0xb5cea8))
        .add("punctuation", hex(0x808080))
        .add("operator", hex(0xd4d4d4))
        .add("boolean", hex(0x569cd6))
        .add("null", hex(0x569cd6))
        // uri
        .add("scheme", hex(0x808080))
        .add("fragment", hex(0x808080))
        .add("query", hex(0x808080))
        .add("query pair", hex(0xd4d4d4))
        .add("query pair key", hex(0x9cdcfe))
        .add("query pair value", hex(0xce9178))
        .add("authority", hex(0x808080))
        .add("path", hex(0xd4d4d4).bold())
        .add("path path-separator", hex(0x808080))
        // sql
        .add("variable", hex(0x9cdcfe))
        .add("identifier", hex(0x569cd6))
        .add("function", hex(0xdcdcaa))
        .add("keyword", hex(0xc586c0))
        // jsstacktrace
        .add("error-message", Style::new().red())
        .add("stack-frame", Style::new().red())
        .add("stack-frame not-my-code", hex(0x808080))
        .add("stack-frame filename", hex(0xd4d4d4))
        .add("stack-frame function", hex(0xdcdcaa))
        .add("stack-frame keyword", hex(0xc586c0))
        .add("stack-frame alias", hex(0x9cdcfe))
        .add("stack-frame line-number", hex(0xb5cea8))
        // xml
        .add("prolog", hex(0x808080))
        .add("tag", hex(0x569cd6))
        .add("tag punctuation", hex(0x808080))
        .add("tag namespace", hex(0xc586c0))
        .add("tag attr-name", hex(0x9cdcfe))
        .add("tag attr-value", hex(0xce9178))
}

fn build_vs_code_light() -> Theme {
    Theme::new()
        .add("_", hex(0x000000))
        // json
        .add("property", hex(0x0451a5))
        .add("string", hex(0xa31515))
        .add("comment", hex(0x008000).italic())
        .add("number", hex(0x098658))
        .add("punctuation", hex(0x6e6e6e))
        .add("operator", hex(0x000000))
        .add("boolean", hex(0x0000ff))
        .add("null", hex(0x0000ff))
        // uri
        .add("scheme", hex(0x6e6e6e))
        .add("fragment", hex(0x6e6e6e))
        .add("query", hex(0x6e6e6e))
        .add("query pair", hex(0x000000))
        .add("query pair key", hex(0x0451a5))
        .add("query pair value", hex(0xa31515))
        .add("authority", hex(0x6e6e6e))
        .add("path", hex(0x000000).bold())
        .add("path path-separator", hex(0x6e6e6e))
        // sql
        .add("variable", hex(0x001080))
        .add("identifier", hex(0x0000ff))
        .add("function", hex(0x795e26))
        .add("keyword", hex(0xaf00db))
        // jsstacktrace
        .add("error-message", Style::new().red())
        .add("stack-frame", Style::new().red())
        .add("stack-frame not-my-code", hex(0x6e6e6e))
        .add("stack-frame filename", hex(0x000000))
        .add("stack-frame function", hex(0x795e26))
        .add("stack-frame keyword", hex(0xaf00db))
        .add("stack-frame alias", hex(0x001080))
        .add("stack-frame line-number", hex(0x098658))
        // xml
        .add("prolog", hex(0x6e6e6e))
        .add("tag", hex(0x800000))
        .add("tag punctuation", hex(0x800000))
        .add("tag namespace", hex(0xaf00db))
        .add("tag attr-name", hex(0xe50000))
        .add("tag attr-value", hex(0x0000ff))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_are_shared() {
        assert!(Arc::ptr_eq(&vs_code_dark(), &vs_code_dark()));
        assert!(Arc::ptr_eq(&vs_code_light(), &vs_code_light()));
        assert!(!Arc::ptr_eq(&vs_code_dark(), &vs_code_light()));
    }

    #[test]
    fn test_builtins_define_root_rule() {
        assert!(vs_code_dark().has("_"));
        assert!(vs_code_light().has("_"));
    }

    #[test]
    fn test_builtins_cover_same_selectors() {
        let dark: Vec<String> = vs_code_dark().iter().map(|(s, _)| s.to_string()).collect();
        let light: Vec<String> = vs_code_light().iter().map(|(s, _)| s.to_string()).collect();
        assert_eq!(dark, light);
    }
}
