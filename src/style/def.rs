//! Serializable style definitions.
//!
//! Theme files describe styles with one of three shapes:
//!
//! ```yaml
//! comment: "#6a9955 italic"            # shorthand words
//! tag: { fg: "#569cd6", bold: true }    # attribute mapping
//! keyword: [bold, { fg: magenta }]      # several style functions, in order
//! number: 179                           # palette index as foreground
//! ```
//!
//! Shorthand words are colours (foreground), `on <color>` (background), or
//! attribute names. Hex colours are mapped onto the ANSI 256-colour palette.

use console::{Color, Style};
use serde::{Deserialize, Deserializer};

use super::error::StyleParseError;
use super::function::{StyleFn, StyleList};
use crate::util::{parse_hex, rgb_to_ansi256};

/// A style definition as written in a theme file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StyleDef {
    /// A bare ANSI palette index used as the foreground colour.
    Index(u64),
    /// Space-separated colour and attribute words, e.g. `"white on red bold"`.
    Shorthand(String),
    /// Several definitions, each becoming its own style function.
    Many(Vec<StyleDef>),
    /// Explicit attributes.
    Attributes(StyleAttributes),
}

/// The mapping form of a [`StyleDef`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleAttributes {
    #[serde(deserialize_with = "color_field")]
    pub fg: Option<String>,
    #[serde(deserialize_with = "color_field")]
    pub bg: Option<String>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    #[serde(alias = "underlined")]
    pub underline: bool,
    pub blink: bool,
    pub reverse: bool,
    pub hidden: bool,
    pub strikethrough: bool,
}

/// Colours may be written as names, hex codes, or bare palette indices.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorValue {
    Index(u64),
    Name(String),
}

impl From<ColorValue> for String {
    fn from(value: ColorValue) -> Self {
        match value {
            ColorValue::Index(index) => index.to_string(),
            ColorValue::Name(name) => name,
        }
    }
}

fn color_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ColorValue>::deserialize(deserializer)?.map(String::from))
}

impl StyleDef {
    /// Converts the definition into the style functions it describes.
    pub fn to_styles(&self) -> Result<StyleList, StyleParseError> {
        match self {
            StyleDef::Index(index) => {
                let fg = parse_color(&index.to_string())?;
                Ok(Style::new().fg(fg).into())
            }
            StyleDef::Shorthand(words) => Ok(parse_shorthand(words)?.into()),
            StyleDef::Attributes(attrs) => Ok(attrs.to_style()?.into()),
            StyleDef::Many(defs) => {
                let mut list = StyleList::new();
                for def in defs {
                    for style in &def.to_styles()? {
                        list.push(style.clone());
                    }
                }
                Ok(list)
            }
        }
    }
}

impl StyleAttributes {
    /// Builds the concrete console style.
    pub fn to_style(&self) -> Result<Style, StyleParseError> {
        let mut style = Style::new();
        if let Some(fg) = &self.fg {
            style = style.fg(parse_color(fg)?);
        }
        if let Some(bg) = &self.bg {
            style = style.bg(parse_color(bg)?);
        }
        if self.bold {
            style = style.bold();
        }
        if self.dim {
            style = style.dim();
        }
        if self.italic {
            style = style.italic();
        }
        if self.underline {
            style = style.underlined();
        }
        if self.blink {
            style = style.blink();
        }
        if self.reverse {
            style = style.reverse();
        }
        if self.hidden {
            style = style.hidden();
        }
        if self.strikethrough {
            style = style.strikethrough();
        }
        Ok(style)
    }
}

fn parse_shorthand(words: &str) -> Result<StyleFn, StyleParseError> {
    let mut attrs = StyleAttributes::default();
    let mut tokens = words.split_whitespace();

    while let Some(word) = tokens.next() {
        match word.to_ascii_lowercase().as_str() {
            "on" => {
                let bg = tokens.next().ok_or(StyleParseError::MissingBackground)?;
                parse_color(bg)?;
                attrs.bg = Some(bg.to_string());
            }
            "bold" => attrs.bold = true,
            "dim" => attrs.dim = true,
            "italic" => attrs.italic = true,
            "underline" | "underlined" => attrs.underline = true,
            "blink" => attrs.blink = true,
            "reverse" => attrs.reverse = true,
            "hidden" => attrs.hidden = true,
            "strikethrough" => attrs.strikethrough = true,
            _ => match parse_color(word) {
                Ok(_) => attrs.fg = Some(word.to_string()),
                Err(_) => return Err(StyleParseError::UnknownAttribute(word.to_string())),
            },
        }
    }

    Ok(attrs.to_style()?.into())
}

/// Parses a colour name, `#rrggbb`/`#rgb` code, or ANSI palette index.
///
/// # Example
///
/// ```rust
/// use termtint::parse_color;
/// use console::Color;
///
/// assert_eq!(parse_color("red").unwrap(), Color::Red);
/// assert_eq!(parse_color("#ff0000").unwrap(), Color::Color256(196));
/// assert_eq!(parse_color("244").unwrap(), Color::Color256(244));
/// assert!(parse_color("chartreuse-ish").is_err());
/// ```
pub fn parse_color(s: &str) -> Result<Color, StyleParseError> {
    let name = s.trim().to_ascii_lowercase();

    if let Some(rgb) = parse_hex(&name) {
        return Ok(Color::Color256(rgb_to_ansi256(rgb)));
    }
    if let Ok(index) = name.parse::<u8>() {
        return Ok(Color::Color256(index));
    }
    if let Some(base) = name
        .strip_prefix("bright_")
        .or_else(|| name.strip_prefix("bright-"))
    {
        // Bright variants occupy palette slots 8..=15.
        return basic_color_index(base)
            .map(|index| Color::Color256(index + 8))
            .ok_or_else(|| StyleParseError::UnknownColor(s.to_string()));
    }

    match name.as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "white" => Ok(Color::White),
        "gray" | "grey" => Ok(Color::Color256(8)),
        _ => Err(StyleParseError::UnknownColor(s.to_string())),
    }
}

fn basic_color_index(name: &str) -> Option<u8> {
    let index = match name {
        "black" => 0,
        "red" => 1,
        "green" => 2,
        "yellow" => 3,
        "blue" => 4,
        "magenta" => 5,
        "cyan" => 6,
        "white" => 7,
        _ => return None,
    };
    Some(index)
}
