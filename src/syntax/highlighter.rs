//! Line highlighter
//!
//! Front door to the syntax module: picks the pipeline, owns the compiled
//! rule sets, and produces HTML for the page view or spans for the
//! terminal panes.

use serde::Deserialize;

use super::chained;
use super::markup;
use super::rules::RuleSet;
use super::scanner::{self, Token};
use super::style::Span;

/// Which highlighting pipeline to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightMode {
    /// Single-pass scanner, one category per top-level token
    #[default]
    Tokenized,
    /// Ordered regex substitutions over the mutated string
    Chained,
}

impl HighlightMode {
    pub fn name(&self) -> &'static str {
        match self {
            HighlightMode::Tokenized => "tokenized",
            HighlightMode::Chained => "chained",
        }
    }
}

/// Compiled rules plus output options
pub struct Highlighter {
    mode: HighlightMode,
    escape_html: bool,
    scanner_rules: RuleSet,
    chained_rules: RuleSet,
}

impl Highlighter {
    pub fn new(mode: HighlightMode, escape_html: bool) -> Self {
        Self {
            mode,
            escape_html,
            scanner_rules: RuleSet::scanner(),
            chained_rules: RuleSet::chained(),
        }
    }

    pub fn mode(&self) -> HighlightMode {
        self.mode
    }

    /// Highlight one line as HTML
    pub fn highlight_line(&self, line: &str) -> String {
        match self.mode {
            HighlightMode::Tokenized => {
                let tokens = self.tokenize_line(line);
                markup::render(line, &tokens, self.escape_html)
            }
            HighlightMode::Chained => chained::highlight(&self.chained_rules, line),
        }
    }

    /// Tokens for one line
    pub fn tokenize_line(&self, line: &str) -> Vec<Token> {
        scanner::tokenize(&self.scanner_rules, line)
    }

    /// Non-overlapping styled spans for one line
    ///
    /// The terminal always draws from the scanner, whatever the mode: the
    /// chained output is markup and has no span structure to draw.
    pub fn spans(&self, line: &str) -> Vec<Span> {
        scanner::flatten(&self.tokenize_line(line))
    }

    /// Highlight every line of a text, split on `'\n'`
    pub fn highlight_text(&self, text: &str) -> Vec<String> {
        text.split('\n').map(|line| self.highlight_line(line)).collect()
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(HighlightMode::default(), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::tokens::Category;

    #[test]
    fn test_modes_differ() {
        let tokenized = Highlighter::new(HighlightMode::Tokenized, true);
        let chained = Highlighter::new(HighlightMode::Chained, true);
        assert_eq!(tokenized.highlight_line("// hi"), r#"<span class="comment">// hi</span>"#);
        assert_ne!(chained.highlight_line("// hi"), tokenized.highlight_line("// hi"));
    }

    #[test]
    fn test_escape_option() {
        let escaped = Highlighter::new(HighlightMode::Tokenized, true);
        let raw = Highlighter::new(HighlightMode::Tokenized, false);
        assert_eq!(escaped.highlight_line("a < b"), "a &lt; b");
        assert_eq!(raw.highlight_line("a < b"), "a < b");
    }

    #[test]
    fn test_highlight_text_keeps_line_count() {
        let highlighter = Highlighter::default();
        let lines = highlighter.highlight_text("a\n\nconst b = 1;\n");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "");
        assert_eq!(lines[3], "");
        assert!(lines[2].starts_with(r#"<span class="keyword">const</span>"#));
    }

    #[test]
    fn test_spans_in_chained_mode_come_from_scanner() {
        let chained = Highlighter::new(HighlightMode::Chained, false);
        let spans = chained.spans("return 1;");
        let categories: Vec<_> = spans.iter().map(|s| s.category).collect();
        assert_eq!(categories, vec![Category::Keyword, Category::Number]);
    }
}
