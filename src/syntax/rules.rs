//! Pattern rules for syntax highlighting
//!
//! This module defines the rule type used to match source text and the
//! fixed JavaScript/JSX rule set. Patterns rely on backreferences and
//! lookahead, so they are compiled with `fancy_regex`.

use fancy_regex::Regex;
use log::warn;

use super::tokens::Category;

/// Reserved keywords, matched as whole words
pub const KEYWORDS: &[&str] = &[
    "import", "export", "default", "const", "let", "var", "function", "return",
    "if", "else", "for", "while", "do", "break", "continue", "switch", "case",
    "try", "catch", "finally", "throw", "class", "extends", "super", "this",
    "new", "typeof", "instanceof", "true", "false", "null", "undefined",
];

/// Framework identifiers, matched as whole words
pub const FRAMEWORK_NAMES: &[&str] = &[
    "React", "useState", "useEffect", "useCallback", "useMemo", "useRef",
    "useContext", "Component", "Fragment", "JSX",
];

/// JavaScript's `\s`: Unicode spaces plus the BOM, without U+0085
pub const JS_SPACE: &str =
    "[\t\n\u{b}\u{c}\r \u{a0}\u{1680}\u{2000}-\u{200a}\u{2028}\u{2029}\u{202f}\u{205f}\u{3000}\u{feff}]";

/// JavaScript's ASCII `\b`; fancy-regex only offers the Unicode one
const WORD_BOUNDARY: &str =
    "(?:(?<=[A-Za-z0-9_])(?![A-Za-z0-9_])|(?<![A-Za-z0-9_])(?=[A-Za-z0-9_]))";

/// `//` runs up to the next line terminator, `\r` and U+2028/9 included
const COMMENT: &str = "(//[^\n\r\u{2028}\u{2029}]*|/\\*[\\s\\S]*?\\*/)";
/// An escape never swallows a line terminator
const STRING: &str = "([\"'`])((?:\\\\[^\n\r\u{2028}\u{2029}]|(?!\\1)[^\\\\])*?)\\1";
/// Attribute names for the scanner: `=` must follow directly and must not
/// start `==` or `=>`.
const ATTRIBUTE_STRICT_TAIL: &str = "(?==(?![=>]))";

/// A single-line pattern rule
///
/// Matches a regex pattern and assigns a category to the match.
pub struct PatternRule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Category to assign to matches
    pub category: Category,
}

impl PatternRule {
    /// Create a new pattern rule
    pub fn new(name: &str, pattern: &str, category: Category) -> Option<Self> {
        match Regex::new(pattern) {
            Ok(regex) => Some(Self {
                name: name.to_string(),
                pattern: regex,
                category,
            }),
            Err(err) => {
                warn!("skipping rule {}: {}", name, err);
                None
            }
        }
    }

    /// Find the first match in text starting at a byte position
    ///
    /// The whole text stays visible to the pattern, so word boundaries at
    /// `start` are judged against the preceding character.
    pub fn find_at(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        if start >= text.len() {
            return None;
        }
        match self.pattern.find_from_pos(text, start) {
            Ok(found) => found.map(|m| (m.start(), m.end())),
            Err(err) => {
                warn!("rule {} failed at byte {}: {}", self.name, start, err);
                None
            }
        }
    }

    /// Find every non-overlapping match, left to right
    pub fn find_all(&self, text: &str) -> Vec<(usize, usize)> {
        let mut matches = Vec::new();
        for found in self.pattern.find_iter(text) {
            match found {
                Ok(m) => matches.push((m.start(), m.end())),
                Err(err) => {
                    warn!("rule {} stopped early: {}", self.name, err);
                    break;
                }
            }
        }
        matches
    }
}

/// An ordered list of rules, applied or tried in sequence
pub struct RuleSet {
    rules: Vec<PatternRule>,
}

impl RuleSet {
    /// Rules exactly as the substitution chain applies them
    ///
    /// Whitespace may separate an attribute name from `=`, and `==`/`=>`
    /// count too.
    pub fn chained() -> Self {
        Self::build(&format!("(?={JS_SPACE}*=)"))
    }

    /// Rules for the single-pass scanner
    pub fn scanner() -> Self {
        Self::build(ATTRIBUTE_STRICT_TAIL)
    }

    fn build(attribute_tail: &str) -> Self {
        let b = WORD_BOUNDARY;
        let keywords = format!("{b}({}){b}", KEYWORDS.join("|"));
        let framework = format!("{b}({}){b}", FRAMEWORK_NAMES.join("|"));
        let number = format!("{b}[0-9]+\\.?[0-9]*{b}");
        let tag = format!("</?[A-Za-z][A-Za-z0-9]*(?:{JS_SPACE}[^>]*)?/?>");
        let attribute = format!("{b}[a-zA-Z-]+{attribute_tail}");

        let candidates = [
            PatternRule::new("comment", COMMENT, Category::Comment),
            PatternRule::new("string", STRING, Category::String),
            PatternRule::new("framework", &framework, Category::Framework),
            PatternRule::new("keyword", &keywords, Category::Keyword),
            PatternRule::new("number", &number, Category::Number),
            PatternRule::new("tag", &tag, Category::Tag),
            PatternRule::new("attribute", &attribute, Category::Attribute),
        ];

        Self {
            rules: candidates.into_iter().flatten().collect(),
        }
    }

    /// Rules in application order
    pub fn iter(&self) -> impl Iterator<Item = &PatternRule> {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(set: &RuleSet, category: Category) -> &PatternRule {
        set.iter().find(|r| r.category == category).unwrap()
    }

    #[test]
    fn test_all_rules_compile() {
        assert_eq!(RuleSet::chained().iter().count(), 7);
        assert_eq!(RuleSet::scanner().iter().count(), 7);
        let order: Vec<_> = RuleSet::chained().iter().map(|r| r.category).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn test_find_at() {
        let set = RuleSet::chained();
        let number = rule(&set, Category::Number);
        assert_eq!(number.find_at("abc 123 def", 0), Some((4, 7)));
        assert_eq!(number.find_at("abc 123 def", 7), None);
        assert_eq!(number.find_at("no numbers", 0), None);
        assert_eq!(number.find_at("x = 3.14;", 0), Some((4, 8)));
    }

    #[test]
    fn test_find_at_respects_word_boundary_before_start() {
        let set = RuleSet::chained();
        let number = rule(&set, Category::Number);
        // "5" is glued to "x", so there is no boundary before it
        assert_eq!(number.find_at("x5", 1), None);
    }

    #[test]
    fn test_string_requires_same_quote() {
        let set = RuleSet::chained();
        let string = rule(&set, Category::String);
        assert_eq!(string.find_at(r#"a = "it's";"#, 0), Some((4, 10)));
        assert_eq!(string.find_at(r#"'say "hi"'"#, 0), Some((0, 10)));
        assert_eq!(string.find_at(r#""a\"b""#, 0), Some((0, 6)));
        assert_eq!(string.find_at("`tpl`", 0), Some((0, 5)));
        assert_eq!(string.find_at("\"unterminated", 0), None);
    }

    #[test]
    fn test_comment_forms() {
        let set = RuleSet::chained();
        let comment = rule(&set, Category::Comment);
        assert_eq!(comment.find_at("x; // note", 0), Some((3, 10)));
        assert_eq!(comment.find_at("a /* b */ c", 0), Some((2, 9)));
        assert_eq!(comment.find_at("a /* open", 0), None);
    }

    #[test]
    fn test_line_comment_stops_at_any_line_terminator() {
        let set = RuleSet::chained();
        let comment = rule(&set, Category::Comment);
        assert_eq!(comment.find_at("// hi\r", 0), Some((0, 5)));
        assert_eq!(comment.find_at("// a\u{2028}b", 0), Some((0, 4)));
        // Block comments may still span them
        assert_eq!(comment.find_at("/* a\rb */", 0), Some((0, 9)));

        let string = rule(&set, Category::String);
        assert_eq!(string.find_at("'a\\\rb'", 0), None);
    }

    #[test]
    fn test_word_boundaries_are_ascii() {
        let set = RuleSet::chained();
        let keyword = rule(&set, Category::Keyword);
        // "é" is not a word character, so "const" stands alone
        assert_eq!(keyword.find_at("éconst x = 1;", 0), Some((2, 7)));
        assert_eq!(keyword.find_at("_const", 0), None);

        let number = rule(&set, Category::Number);
        assert_eq!(number.find_at("ñ5 + 3", 0), Some((2, 3)));
        // A trailing dot is kept when a word character follows
        assert_eq!(number.find_at("5.a", 0), Some((0, 2)));
        assert_eq!(number.find_at("5.", 0), Some((0, 1)));

        let attribute = rule(&set, Category::Attribute);
        assert_eq!(attribute.find_at("a -b = 1", 0), Some((3, 4)));
    }

    #[test]
    fn test_whole_word_keywords() {
        let set = RuleSet::chained();
        let keyword = rule(&set, Category::Keyword);
        assert_eq!(keyword.find_at("constant", 0), None);
        assert_eq!(keyword.find_at("const a", 0), Some((0, 5)));
        let framework = rule(&set, Category::Framework);
        assert_eq!(framework.find_at("useStateful", 0), None);
        assert_eq!(framework.find_at("x = useState(0)", 0), Some((4, 12)));
    }

    #[test]
    fn test_tag_forms() {
        let set = RuleSet::chained();
        let tag = rule(&set, Category::Tag);
        assert_eq!(tag.find_all("<p>hi</p>"), vec![(0, 3), (5, 9)]);
        assert_eq!(tag.find_at("<br/>", 0), Some((0, 5)));
        assert_eq!(tag.find_at("a < b", 0), None);
    }

    #[test]
    fn test_attribute_variants() {
        let loose = RuleSet::chained();
        let strict = RuleSet::scanner();
        let loose = rule(&loose, Category::Attribute);
        let strict = rule(&strict, Category::Attribute);

        assert_eq!(loose.find_at("let x = 5;", 0), Some((4, 5)));
        assert_eq!(strict.find_at("let x = 5;", 0), None);

        assert_eq!(strict.find_at(r#"className="a""#, 0), Some((0, 9)));
        assert_eq!(strict.find_at("data-id=1", 0), Some((0, 7)));
        assert_eq!(strict.find_at("a==b", 0), None);
        assert_eq!(strict.find_at("x=>x", 0), None);
    }
}
