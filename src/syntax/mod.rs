//! Syntax highlighting
//!
//! This module turns a line of JavaScript/JSX into category-marked HTML or
//! styled spans:
//! - `rules`: the fixed pattern list, in application order
//! - `chained`: replace-all substitutions over the mutated string
//! - `scanner`: single-pass tokenizer with deterministic precedence
//! - `markup`: HTML rendering, escaping and marker stripping

mod chained;
mod highlighter;
mod markup;
mod rules;
mod scanner;
mod style;
mod tokens;

pub use highlighter::{HighlightMode, Highlighter};
#[cfg(test)]
pub use markup::strip_markup;
pub use rules::JS_SPACE;
pub use style::{Color, Span, Style};
pub use tokens::Category;
