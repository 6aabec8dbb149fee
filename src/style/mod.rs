//! Style primitives for themes.
//!
//! This module provides:
//!
//! - [`StyleFn`]: An opaque text decorator, usually built from a [`console::Style`]
//! - [`StyleList`]: The one-or-many style functions a theme attaches to a selector
//! - [`StyleDef`]: A serializable style definition, as found in YAML theme files
//! - [`parse_color`]: Colour names, hex codes and palette indices
//! - [`StyleParseError`]: Errors from reading style definitions

mod def;
mod error;
mod function;

pub use def::{parse_color, StyleAttributes, StyleDef};
pub use error::StyleParseError;
pub use function::{StyleFn, StyleList};
