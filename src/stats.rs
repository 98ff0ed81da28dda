//! Code statistics shown under the panes

use std::sync::OnceLock;

use regex::Regex;

use crate::syntax::JS_SPACE;

/// Rough "function" heuristic: the `function` keyword, a `const ... =>`
/// assignment, or the `class` keyword. Substrings count too (`className`).
/// `.` stops at every line terminator, not only `\n`.
const FUNCTION_PATTERN: &str =
    "function|const[^\n\r\u{2028}\u{2029}]*=[^\n\r\u{2028}\u{2029}]*=>|class";

/// Counts derived from the whole text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodeStats {
    /// Lines after splitting on `'\n'`
    pub lines: usize,
    /// UTF-16 code units, so characters outside the BMP count twice
    pub characters: usize,
    /// Non-empty runs between whitespace
    pub words: usize,
    /// Matches of the function heuristic
    pub functions: usize,
}

impl CodeStats {
    pub fn compute(text: &str) -> Self {
        Self {
            lines: text.split('\n').count(),
            characters: text.encode_utf16().count(),
            words: count_words(text),
            functions: count_functions(text),
        }
    }
}

fn count_words(text: &str) -> usize {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    match PATTERN.get_or_init(|| Regex::new(&format!("{JS_SPACE}+")).ok()) {
        Some(re) => re.split(text).filter(|word| !word.is_empty()).count(),
        None => text.split_whitespace().count(),
    }
}

fn count_functions(text: &str) -> usize {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    match PATTERN.get_or_init(|| Regex::new(FUNCTION_PATTERN).ok()) {
        Some(re) => re.find_iter(text).count(),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let stats = CodeStats::compute("");
        assert_eq!(stats.lines, 1);
        assert_eq!(stats.characters, 0);
        assert_eq!(stats.words, 0);
        assert_eq!(stats.functions, 0);
    }

    quickcheck::quickcheck! {
        fn line_count_matches_split(text: String) -> bool {
            CodeStats::compute(&text).lines == text.split('\n').count()
        }

        fn characters_match_utf16_length(text: String) -> bool {
            CodeStats::compute(&text).characters == text.encode_utf16().count()
        }
    }

    #[test]
    fn test_line_count_matches_split() {
        for text in ["a", "a\n", "\n\n", "a\r\nb", "one\ntwo\nthree"] {
            assert_eq!(CodeStats::compute(text).lines, text.split('\n').count());
        }
        assert_eq!(CodeStats::compute("a\n").lines, 2);
    }

    #[test]
    fn test_whitespace_only() {
        let stats = CodeStats::compute(" \t\n  ");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.characters, 5);
        assert_eq!(stats.lines, 2);
    }

    #[test]
    fn test_characters_are_utf16_units() {
        assert_eq!(CodeStats::compute("héllo").characters, 5);
        assert_eq!(CodeStats::compute("a → b").characters, 5);
        // Astral characters take a surrogate pair
        assert_eq!(CodeStats::compute("a😀").characters, 3);
    }

    #[test]
    fn test_words() {
        assert_eq!(CodeStats::compute("let  x =\n5;").words, 4);
        assert_eq!(CodeStats::compute("a\u{feff}b\u{3000}c").words, 3);
        // NEL is not a separator
        assert_eq!(CodeStats::compute("a\u{85}b").words, 1);
    }

    #[test]
    fn test_function_heuristic() {
        let text = "function a() {}\nconst b = () => 1;\nclass C {}\nlet d = 2;";
        assert_eq!(CodeStats::compute(text).functions, 3);
        // It is a heuristic: attribute names containing `class` count as well
        assert_eq!(CodeStats::compute(r#"<div className="x">"#).functions, 1);
    }
}
