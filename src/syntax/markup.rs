//! HTML rendering of highlighted lines
//!
//! Category markers are `<span class="CLASS">...</span>`. User text between
//! and inside markers is escaped unless the caller opts out.

#[cfg(test)]
use std::sync::OnceLock;

#[cfg(test)]
use regex::Regex;

use super::scanner::Token;
use super::tokens::Category;

/// Wrap already-rendered content in a category marker
pub fn wrap(category: Category, content: &str) -> String {
    format!("<span class=\"{}\">{}</span>", category.css_class(), content)
}

/// Escape the characters that would otherwise start or break markup
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render a tokenized line as HTML
pub fn render(line: &str, tokens: &[Token], escape: bool) -> String {
    let mut html = String::with_capacity(line.len() * 2);
    render_range(line, 0, line.len(), tokens, escape, &mut html);
    html
}

fn render_range(line: &str, from: usize, to: usize, tokens: &[Token], escape: bool, out: &mut String) {
    let mut pos = from;
    for token in tokens {
        push_text(&line[pos..token.start], escape, out);
        let mut inner = String::new();
        render_range(line, token.start, token.end, &token.children, escape, &mut inner);
        out.push_str(&wrap(token.category, &inner));
        pos = token.end;
    }
    push_text(&line[pos..to], escape, out);
}

fn push_text(text: &str, escape: bool, out: &mut String) {
    if escape {
        out.push_str(&escape_html(text));
    } else {
        out.push_str(text);
    }
}

/// Remove category markers and decode escapes, recovering the source line
#[cfg(test)]
pub fn strip_markup(html: &str) -> String {
    static MARKER: OnceLock<Option<Regex>> = OnceLock::new();
    let marker = MARKER.get_or_init(|| Regex::new(r#"<span class="[a-z-]+">|</span>"#).ok());

    let stripped = match marker {
        Some(re) => re.replace_all(html, "").into_owned(),
        None => html.to_string(),
    };
    stripped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::rules::RuleSet;
    use crate::syntax::scanner::tokenize;

    fn highlight(line: &str) -> String {
        let rules = RuleSet::scanner();
        render(line, &tokenize(&rules, line), true)
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_comment_line() {
        assert_eq!(highlight("// hi"), r#"<span class="comment">// hi</span>"#);
    }

    #[test]
    fn test_keyword_number_line() {
        assert_eq!(
            highlight("let x = 5;"),
            r#"<span class="keyword">let</span> x = <span class="number">5</span>;"#
        );
    }

    #[test]
    fn test_tag_line() {
        assert_eq!(
            highlight(r#"<div className="a">"#),
            concat!(
                r#"<span class="jsx-tag">&lt;div "#,
                r#"<span class="jsx-attribute">className</span>="#,
                r#"<span class="string">"a"</span>&gt;</span>"#
            )
        );
    }

    #[test]
    fn test_unrecognized_angle_brackets_escaped() {
        assert_eq!(highlight("a < b"), "a &lt; b");
        let rules = RuleSet::scanner();
        assert_eq!(render("a < b", &tokenize(&rules, "a < b"), false), "a < b");
    }

    quickcheck::quickcheck! {
        fn strip_reconstructs_any_line(line: String) -> bool {
            strip_markup(&highlight(&line)) == line
        }
    }

    #[test]
    fn test_strip_reconstructs_source() {
        let lines = [
            "",
            "// hi",
            "let x = 5;",
            r#"<div className="a">"#,
            r#"  const s = "<b>&amp;</b>"; // 1 < 2"#,
            "      <button onClick={() => setIsVisible(!isVisible)}>",
            "document.title = `Count: ${count}`;",
            "x = 'unterminated",
            "é ü → 3.5 < 4",
            r#"<span class="keyword">fake</span>"#,
        ];
        for line in lines {
            assert_eq!(strip_markup(&highlight(line)), line, "line: {:?}", line);
        }
    }
}
