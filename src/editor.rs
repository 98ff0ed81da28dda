//! Text editing on the raw pane
//!
//! The text is edited as a whole string: every operation returns the new
//! text and cursor, and the app hands the text to the reducer.

/// Cursor position: line index and byte offset within that line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub line: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

fn line_of(text: &str, index: usize) -> &str {
    text.split('\n').nth(index).unwrap_or("")
}

fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Pull a cursor back onto an existing line and char boundary
pub fn clamp(text: &str, cursor: Cursor) -> Cursor {
    let line = cursor.line.min(line_count(text) - 1);
    let content = line_of(text, line);
    let mut col = cursor.col.min(content.len());
    while col > 0 && !content.is_char_boundary(col) {
        col -= 1;
    }
    Cursor::new(line, col)
}

/// Byte offset of the cursor in the whole text
pub fn offset(text: &str, cursor: Cursor) -> usize {
    let cursor = clamp(text, cursor);
    let before: usize = text
        .split('\n')
        .take(cursor.line)
        .map(|line| line.len() + 1)
        .sum();
    before + cursor.col
}

/// Cursor for a byte offset in the whole text
pub fn cursor_at(text: &str, offset: usize) -> Cursor {
    let offset = offset.min(text.len());
    let before = &text[..offset];
    let line = before.matches('\n').count();
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    Cursor::new(line, offset - line_start)
}

/// Insert a string at the cursor
pub fn insert(text: &str, cursor: Cursor, s: &str) -> (String, Cursor) {
    let at = offset(text, cursor);
    let mut next = String::with_capacity(text.len() + s.len());
    next.push_str(&text[..at]);
    next.push_str(s);
    next.push_str(&text[at..]);
    let moved = cursor_at(&next, at + s.len());
    (next, moved)
}

/// Delete the character before the cursor (joins lines at column 0)
pub fn backspace(text: &str, cursor: Cursor) -> Option<(String, Cursor)> {
    let at = offset(text, cursor);
    let (start, _) = text[..at].char_indices().next_back()?;
    let mut next = text.to_string();
    next.replace_range(start..at, "");
    let moved = cursor_at(&next, start);
    Some((next, moved))
}

/// Delete the character under the cursor (joins lines at end of line)
pub fn delete(text: &str, cursor: Cursor) -> Option<(String, Cursor)> {
    let at = offset(text, cursor);
    let ch = text[at..].chars().next()?;
    let mut next = text.to_string();
    next.replace_range(at..at + ch.len_utf8(), "");
    let moved = cursor_at(&next, at);
    Some((next, moved))
}

pub fn move_left(text: &str, cursor: Cursor) -> Cursor {
    let at = offset(text, cursor);
    match text[..at].char_indices().next_back() {
        Some((prev, _)) => cursor_at(text, prev),
        None => clamp(text, cursor),
    }
}

pub fn move_right(text: &str, cursor: Cursor) -> Cursor {
    let at = offset(text, cursor);
    match text[at..].chars().next() {
        Some(ch) => cursor_at(text, at + ch.len_utf8()),
        None => clamp(text, cursor),
    }
}

pub fn move_up(text: &str, cursor: Cursor, lines: usize) -> Cursor {
    let cursor = clamp(text, cursor);
    clamp(text, Cursor::new(cursor.line.saturating_sub(lines), cursor.col))
}

pub fn move_down(text: &str, cursor: Cursor, lines: usize) -> Cursor {
    let cursor = clamp(text, cursor);
    clamp(text, Cursor::new(cursor.line.saturating_add(lines), cursor.col))
}

pub fn line_start(cursor: Cursor) -> Cursor {
    Cursor::new(cursor.line, 0)
}

pub fn line_end(text: &str, cursor: Cursor) -> Cursor {
    let cursor = clamp(text, cursor);
    Cursor::new(cursor.line, line_of(text, cursor.line).len())
}
