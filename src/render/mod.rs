//! Rendering token trees with compiled themes.
//!
//! This module provides:
//!
//! - [`stack_matches`] and [`resolve_styles`]: which rules apply to a token, in priority order
//! - [`render`] and [`render_tokens`]: the recursive renderer
//! - [`Highlighter`]: the engine tying registries, tokenizers, and the theme cache together
//!
//! # Cascade
//!
//! For each typed token, every rule attached to its type whose ancestor stack
//! is a subsequence of the token's ancestors applies. Rules requiring fewer
//! ancestors come first; equally specific rules keep theme order. The
//! resulting style list is applied from its end to its start, each style
//! wrapping the previous output, so the most specific and latest declared
//! style ends up closest to the text.

mod highlighter;
mod renderer;
mod resolve;

pub use highlighter::{Highlighter, DEFAULT_GRAMMAR};
pub use renderer::{render, render_tokens};
pub use resolve::{resolve_styles, stack_matches};
