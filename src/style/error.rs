//! Style definition errors.

use thiserror::Error;

/// Error returned when a textual style definition cannot be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleParseError {
    /// A colour name, hex code or palette index was not recognised.
    #[error("unknown color '{0}'")]
    UnknownColor(String),
    /// A word in a shorthand definition is neither a colour nor an attribute.
    #[error("unknown style attribute '{0}'")]
    UnknownAttribute(String),
    /// `on` appeared without a following background colour.
    #[error("expected a background color after 'on'")]
    MissingBackground,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_color_display() {
        let err = StyleParseError::UnknownColor("#12".to_string());
        assert_eq!(err.to_string(), "unknown color '#12'");
    }

    #[test]
    fn test_unknown_attribute_display() {
        let err = StyleParseError::UnknownAttribute("sparkly".to_string());
        assert!(err.to_string().contains("sparkly"));
    }
}
