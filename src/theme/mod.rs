//! Theme system: selector rules and how callers pick them.
//!
//! This module provides:
//!
//! - [`Theme`]: An ordered set of selector rules with a fluent builder API and YAML loading
//! - [`ThemeRegistry`]: Themes by name, including the built-in `vsCodeDark` and `vsCodeLight`
//! - [`AdaptiveTheme`]: Light/dark theme pairs with OS detection
//! - [`ThemeChoice`]: Reference type for selecting themes at highlight time
//! - [`ColorMode`]: Light or dark color mode enum

mod adaptive;
mod builtin;
mod choice;
mod registry;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{detect_color_mode, set_theme_detector, AdaptiveTheme, ColorMode};
pub use builtin::{vs_code_dark, vs_code_light, VS_CODE_DARK, VS_CODE_LIGHT};
pub use choice::{ThemeChoice, DEFAULT_THEME};
pub use registry::{walk_theme_dir, ThemeFile, ThemeRegistry, THEME_EXTENSIONS};
pub use theme::{Theme, ROOT_SELECTOR};
