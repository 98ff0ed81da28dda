//! Style types for text rendering
//!
//! This module provides the foundation for styled text rendering,
//! shared by the terminal panes and the HTML page export.

use super::tokens::Category;

/// Display colors (24-bit, matching the palettes used by the HTML view)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Rgb(u8, u8, u8),
}

impl Color {
    /// CSS representation (`inherit` for the default color)
    pub fn to_css(&self) -> String {
        match self {
            Color::Default => "inherit".to_string(),
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        }
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set background color
    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Inline CSS declarations for this style
    pub fn to_css(&self) -> String {
        let mut css = format!("color: {};", self.fg.to_css());
        if self.bg != Color::Default {
            css.push_str(&format!(" background: {};", self.bg.to_css()));
        }
        if self.bold {
            css.push_str(" font-weight: bold;");
        }
        if self.italic {
            css.push_str(" font-style: italic;");
        }
        css
    }
}

/// A categorized span of text within a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Byte offset where this span ends (exclusive)
    pub end: usize,
    /// Category that decides the span's style
    pub category: Category,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize, category: Category) -> Self {
        Self { start, end, category }
    }

    /// Check if this span contains a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Style to draw this span with
    pub fn style(&self) -> Style {
        self.category.default_style()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_default() {
        let style = Style::default();
        assert_eq!(style.fg, Color::Default);
        assert!(!style.bold);
        assert!(!style.italic);
    }

    #[test]
    fn test_style_css() {
        let style = Style::fg(Color::Rgb(0x62, 0x72, 0xa4)).with_italic();
        assert_eq!(style.to_css(), "color: #6272a4; font-style: italic;");

        let style = Style::fg(Color::Default).with_bold().with_bg(Color::Rgb(0, 0, 0));
        assert_eq!(style.to_css(), "color: inherit; background: #000000; font-weight: bold;");
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(5, 10, Category::Number);
        assert!(!span.contains(4));
        assert!(span.contains(5));
        assert!(span.contains(9));
        assert!(!span.contains(10));
    }
}
