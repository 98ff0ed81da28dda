//! Token categories for syntax highlighting
//!
//! This module defines the categories a highlighted substring can
//! belong to, their CSS class names and their default visual styles.

use super::style::{Color, Style};

/// Highlight categories, declared in application order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `// ...` to end of line, or a `/* ... */` closed on the same line
    Comment,
    /// Quoted with `'`, `"` or a backtick
    String,
    /// React names (hooks, component base names)
    Framework,
    /// Reserved JavaScript keywords
    Keyword,
    /// Integer or decimal literals
    Number,
    /// JSX opening, closing or self-closing tags
    Tag,
    /// JSX attribute names
    Attribute,
}

impl Category {
    /// All categories in the order the chained pipeline applies them
    pub const ALL: [Category; 7] = [
        Category::Comment,
        Category::String,
        Category::Framework,
        Category::Keyword,
        Category::Number,
        Category::Tag,
        Category::Attribute,
    ];

    /// CSS class used in the category marker
    pub fn css_class(&self) -> &'static str {
        match self {
            Category::Comment => "comment",
            Category::String => "string",
            Category::Framework => "react",
            Category::Keyword => "keyword",
            Category::Number => "number",
            Category::Tag => "jsx-tag",
            Category::Attribute => "jsx-attribute",
        }
    }

    /// Get the default style for this category
    pub fn default_style(&self) -> Style {
        match self {
            Category::Keyword => Style::fg(Color::Rgb(0xff, 0x79, 0xc6)).with_bold(),
            Category::String => Style::fg(Color::Rgb(0xf1, 0xfa, 0x8c)),
            Category::Comment => Style::fg(Color::Rgb(0x62, 0x72, 0xa4)).with_italic(),
            Category::Number => Style::fg(Color::Rgb(0xbd, 0x93, 0xf9)),
            Category::Framework => Style::fg(Color::Rgb(0x50, 0xfa, 0x7b)).with_bold(),
            Category::Tag => Style::fg(Color::Rgb(0x8b, 0xe9, 0xfd)),
            Category::Attribute => Style::fg(Color::Rgb(0xff, 0xb8, 0x6c)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_not_default() {
        for category in Category::ALL {
            assert_ne!(category.default_style().fg, Color::Default, "{:?}", category);
        }
    }

    #[test]
    fn test_css_classes_distinct() {
        let mut classes: Vec<_> = Category::ALL.iter().map(|c| c.css_class()).collect();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), Category::ALL.len());
    }

    #[test]
    fn test_application_order() {
        assert_eq!(Category::ALL[0], Category::Comment);
        assert_eq!(Category::ALL[6], Category::Attribute);
    }
}
