//! Single-pass scanner
//!
//! Assigns every byte of a line to at most one top-level token. At each
//! position the leftmost upcoming match among all rules wins; when two
//! rules match at the same byte the one earlier in application order wins.
//! Tag tokens are rescanned with the string and attribute rules so that
//! attribute names and quoted values nest inside them.

use super::rules::{PatternRule, RuleSet};
use super::style::Span;
use super::tokens::Category;

/// A categorized byte range of a line, possibly with nested tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub category: Category,
    /// Byte offset where this token starts (inclusive)
    pub start: usize,
    /// Byte offset where this token ends (exclusive)
    pub end: usize,
    /// Tokens nested inside this one, sorted and non-overlapping
    pub children: Vec<Token>,
}

impl Token {
    pub fn new(category: Category, start: usize, end: usize) -> Self {
        Self {
            category,
            start,
            end,
            children: Vec::new(),
        }
    }

    /// Flatten into non-overlapping spans; nested tokens override their parent
    pub fn flatten_into(&self, spans: &mut Vec<Span>) {
        let mut pos = self.start;
        for child in &self.children {
            if child.start > pos {
                spans.push(Span::new(pos, child.start, self.category));
            }
            child.flatten_into(spans);
            pos = child.end;
        }
        if pos < self.end {
            spans.push(Span::new(pos, self.end, self.category));
        }
    }
}

/// Tokenize a single line
pub fn tokenize(rules: &RuleSet, line: &str) -> Vec<Token> {
    let top: Vec<&PatternRule> = rules.iter().collect();
    let nested: Vec<&PatternRule> = rules
        .iter()
        .filter(|r| matches!(r.category, Category::String | Category::Attribute))
        .collect();

    let mut tokens = scan(&top, line, 0, line.len());
    for token in tokens.iter_mut().filter(|t| t.category == Category::Tag) {
        token.children = scan(&nested, line, token.start, token.end);
    }
    tokens
}

/// Flatten a token list into non-overlapping spans for styled output
pub fn flatten(tokens: &[Token]) -> Vec<Span> {
    let mut spans = Vec::new();
    for token in tokens {
        token.flatten_into(&mut spans);
    }
    spans
}

/// Scan `line[from..to]` with the given rules
fn scan(rules: &[&PatternRule], line: &str, from: usize, to: usize) -> Vec<Token> {
    let mut tokens = Vec::new();
    // Next known match per rule; None once a rule has nothing left before `to`
    let mut upcoming: Vec<Option<(usize, usize)>> = vec![None; rules.len()];
    let mut exhausted = vec![false; rules.len()];
    let mut pos = from;

    while pos < to {
        let mut best: Option<(usize, usize, Category)> = None;

        for (i, rule) in rules.iter().enumerate() {
            if exhausted[i] {
                continue;
            }
            let stale = upcoming[i].map_or(true, |(start, _)| start < pos);
            if stale {
                upcoming[i] = find_within(rule, line, pos, to);
                if upcoming[i].is_none() {
                    exhausted[i] = true;
                    continue;
                }
            }
            if let Some((start, end)) = upcoming[i] {
                // Strictly smaller start: ties keep the earlier rule
                if best.map_or(true, |(best_start, _, _)| start < best_start) {
                    best = Some((start, end, rule.category));
                }
            }
        }

        match best {
            Some((start, end, category)) => {
                tokens.push(Token::new(category, start, end));
                pos = end;
            }
            None => break,
        }
    }

    tokens
}

/// Find the next non-empty match of `rule` that lies inside `pos..to`
fn find_within(rule: &PatternRule, line: &str, mut pos: usize, to: usize) -> Option<(usize, usize)> {
    while pos < to {
        let (start, end) = rule.find_at(line, pos)?;
        if start >= to {
            return None;
        }
        if end > start && end <= to {
            return Some((start, end));
        }
        // Match runs past the region (or is empty); retry one char later
        pos = next_char_boundary(line, start);
    }
    None
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    let mut next = pos + 1;
    while next < text.len() && !text.is_char_boundary(next) {
        next += 1;
    }
    next
}
