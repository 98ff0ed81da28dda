//! Display rendering
//!
//! Screen layout:
//! ```text
//! row 0        title and current view settings
//! rows 1..h-2  raw text pane | highlighted pane
//! row h-2      statistics
//! row h-1      notice, or the key hint
//! ```

use unicode_width::UnicodeWidthChar;

use crate::editor::Cursor;
use crate::error::Result;
use crate::state::{NoticeKind, ViewState};
use crate::syntax::{Color, Highlighter, Span, Style};
use crate::terminal::Terminal;

const KEY_HINT: &str =
    "C-y copy  C-s download  C-e export  C-t theme  C-l numbers  M-+/M-- font  C-p pin  C-q quit";

/// Screen regions for a terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub cols: usize,
    pub pane_top: u16,
    pub pane_height: usize,
    pub left_width: usize,
    pub right_start: usize,
    pub right_width: usize,
    pub stats_row: u16,
    pub notice_row: u16,
}

impl Layout {
    pub fn compute(cols: u16, rows: u16) -> Self {
        let cols = cols as usize;
        let left_width = cols / 2;
        let right_start = (left_width + 1).min(cols);
        Self {
            cols,
            pane_top: 1,
            pane_height: rows.saturating_sub(3) as usize,
            left_width,
            right_start,
            right_width: cols - right_start,
            stats_row: rows.saturating_sub(2),
            notice_row: rows.saturating_sub(1),
        }
    }

    /// Line index under a click in the highlighted pane
    pub fn line_at(&self, row: u16, col: u16, top_line: usize, line_count: usize) -> Option<usize> {
        if (col as usize) < self.right_start || row < self.pane_top {
            return None;
        }
        let offset = (row - self.pane_top) as usize;
        if offset >= self.pane_height {
            return None;
        }
        let line = top_line + offset;
        (line < line_count).then_some(line)
    }
}

/// Display state
pub struct Display {
    /// Whether a full redraw is needed
    needs_redraw: bool,
    /// Tab width for display
    tab_width: usize,
}

impl Display {
    pub fn new(tab_width: usize) -> Self {
        Self {
            needs_redraw: true,
            tab_width: tab_width.max(1),
        }
    }

    /// Mark that a full redraw is needed
    pub fn force_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Render the whole screen
    pub fn render(
        &mut self,
        terminal: &mut Terminal,
        state: &ViewState,
        highlighter: &Highlighter,
        cursor: Cursor,
        top_line: usize,
        left_col: usize,
    ) -> Result<()> {
        let layout = Layout::compute(terminal.cols(), terminal.rows());
        if layout.pane_height == 0 || layout.cols < 3 {
            return Ok(());
        }

        terminal.set_cursor_visible(false)?;
        if self.needs_redraw {
            terminal.clear_screen()?;
        }

        let palette = state.theme.palette();
        let base = Style::fg(palette.text).with_bg(palette.background);
        let lines = state.lines();
        let lnum_width = line_number_width(state.show_line_numbers, lines.len());

        self.render_title(terminal, state, highlighter, &layout)?;

        for offset in 0..layout.pane_height {
            let row = layout.pane_top + offset as u16;
            let index = top_line + offset;
            let line = lines.get(index).copied();

            // Raw pane, scrolled horizontally with the cursor
            terminal.move_cursor(row, 0)?;
            let used = match line {
                Some(text) => self.draw_cells(terminal, text, &[], base, left_col, layout.left_width)?,
                None => 0,
            };
            pad(terminal, base, layout.left_width - used)?;

            // Separator
            if layout.right_start > layout.left_width {
                terminal.reset_attributes()?;
                terminal.apply_style(&Style::fg(palette.border).with_bg(palette.background))?;
                terminal.write_str("│")?;
            }

            // Highlighted pane
            let line_style = if state.is_pinned(index) {
                base.with_bg(palette.highlight)
            } else {
                base
            };
            let mut used = 0;
            if let Some(text) = line {
                if lnum_width > 0 && lnum_width <= layout.right_width {
                    terminal.reset_attributes()?;
                    terminal.apply_style(&Style::fg(palette.line_number).with_bg(line_style.bg))?;
                    terminal.write_str(&format!("{:>width$} ", index + 1, width = lnum_width - 1))?;
                    used = lnum_width;
                }
                let spans = highlighter.spans(text);
                used += self.draw_cells(terminal, text, &spans, line_style, 0, layout.right_width - used)?;
            }
            pad(terminal, line_style, layout.right_width - used)?;
        }

        self.render_stats(terminal, state, &layout)?;
        self.render_notice(terminal, state, &layout)?;

        // Hardware cursor sits in the raw pane
        if cursor.line >= top_line && cursor.line < top_line + layout.pane_height {
            let text = lines.get(cursor.line).copied().unwrap_or("");
            let col = display_col(text, cursor.col, self.tab_width).saturating_sub(left_col);
            let col = col.min(layout.left_width.saturating_sub(1));
            let row = layout.pane_top + (cursor.line - top_line) as u16;
            terminal.move_cursor(row, col as u16)?;
            terminal.set_cursor_visible(true)?;
        }

        terminal.flush()?;
        self.needs_redraw = false;
        Ok(())
    }

    fn render_title(
        &self,
        terminal: &mut Terminal,
        state: &ViewState,
        highlighter: &Highlighter,
        layout: &Layout,
    ) -> Result<()> {
        let title = format!(
            " React Code Visualizer | Theme: {} | Font: {}px | Line numbers: {} | Mode: {}",
            state.theme.name(),
            state.font_size,
            if state.show_line_numbers { "on" } else { "off" },
            highlighter.mode().name()
        );
        terminal.move_cursor(0, 0)?;
        terminal.reset_attributes()?;
        terminal.set_reverse(true)?;
        terminal.write_str(&fit_to_width(&title, layout.cols))?;
        terminal.reset_attributes()?;
        Ok(())
    }

    fn render_stats(&self, terminal: &mut Terminal, state: &ViewState, layout: &Layout) -> Result<()> {
        let stats = state.stats();
        let line = format!(
            " Lines: {}  Characters: {}  Words: {}  Functions: {}",
            stats.lines, stats.characters, stats.words, stats.functions
        );
        terminal.move_cursor(layout.stats_row, 0)?;
        terminal.reset_attributes()?;
        terminal.set_reverse(true)?;
        terminal.write_str(&fit_to_width(&line, layout.cols))?;
        terminal.reset_attributes()?;
        Ok(())
    }

    fn render_notice(&self, terminal: &mut Terminal, state: &ViewState, layout: &Layout) -> Result<()> {
        terminal.move_cursor(layout.notice_row, 0)?;
        terminal.reset_attributes()?;
        let text = match &state.notice {
            Some(notice) => {
                let color = match notice.kind {
                    NoticeKind::Info => Color::Rgb(0x50, 0xfa, 0x7b),
                    NoticeKind::Error => Color::Rgb(0xff, 0x55, 0x55),
                };
                terminal.apply_style(&Style::fg(color).with_bold())?;
                notice.message.as_str()
            }
            None => KEY_HINT,
        };
        terminal.write_str(&fit_to_width(text, layout.cols))?;
        terminal.reset_attributes()?;
        Ok(())
    }

    /// Draw a line into at most `max_cols` cells, starting at display
    /// column `skip`; returns the cells used
    fn draw_cells(
        &self,
        terminal: &mut Terminal,
        text: &str,
        spans: &[Span],
        base: Style,
        skip: usize,
        max_cols: usize,
    ) -> Result<usize> {
        let (runs, used) = styled_runs(text, spans, base, skip, max_cols, self.tab_width);
        for (run, style) in &runs {
            flush_run(terminal, run, *style)?;
        }
        Ok(used)
    }
}

/// Split the visible part of a line into runs of equal style
///
/// Cells left of `skip` are dropped; a wide character cut by `skip` shows
/// as spaces for its visible half.
fn styled_runs(
    text: &str,
    spans: &[Span],
    base: Style,
    skip: usize,
    max_cols: usize,
    tab_width: usize,
) -> (Vec<(String, Style)>, usize) {
    let mut runs: Vec<(String, Style)> = Vec::new();
    let mut col = 0;
    let mut used = 0;
    let mut span_idx = 0;

    for (byte, ch) in text.char_indices() {
        while span_idx < spans.len() && spans[span_idx].end <= byte {
            span_idx += 1;
        }
        let style = match spans.get(span_idx) {
            Some(span) if span.contains(byte) => Style { bg: base.bg, ..span.style() },
            _ => base,
        };

        let (cell, width) = cell(ch, col, tab_width);
        let end = col + width;
        col = end;
        if end <= skip {
            continue;
        }
        let (cell, width) = if end - width < skip {
            (" ".repeat(end - skip), end - skip)
        } else {
            (cell, width)
        };
        if used + width > max_cols {
            break;
        }

        match runs.last_mut() {
            Some((run, run_style)) if *run_style == style => run.push_str(&cell),
            _ => runs.push((cell, style)),
        }
        used += width;
    }

    (runs, used)
}

/// Screen text and width of one character at a display column
fn cell(ch: char, col: usize, tab_width: usize) -> (String, usize) {
    match ch {
        '\t' => {
            let width = tab_width - col % tab_width;
            (" ".repeat(width), width)
        }
        // A carriage return from CRLF text takes no room
        '\r' => (String::new(), 0),
        c if c.is_control() => ("?".to_string(), 1),
        c => (c.to_string(), UnicodeWidthChar::width(c).unwrap_or(1)),
    }
}

/// Display column of a byte offset within a line
pub fn display_col(text: &str, byte_col: usize, tab_width: usize) -> usize {
    let tab_width = tab_width.max(1);
    let mut col = 0;
    for (byte, ch) in text.char_indices() {
        if byte >= byte_col {
            break;
        }
        col += cell(ch, col, tab_width).1;
    }
    col
}

/// Width of the line-number gutter (including separator)
fn line_number_width(show: bool, line_count: usize) -> usize {
    if !show {
        return 0;
    }
    let digits = line_count.max(1).to_string().len();
    digits.max(3) + 1 // minimum 3 digits + space
}

fn flush_run(terminal: &mut Terminal, run: &str, style: Style) -> Result<()> {
    terminal.reset_attributes()?;
    terminal.apply_style(&style)?;
    terminal.write_str(run)
}

fn pad(terminal: &mut Terminal, style: Style, width: usize) -> Result<()> {
    if width == 0 {
        return Ok(());
    }
    flush_run(terminal, &" ".repeat(width), style)
}

/// Truncate or pad a string to exactly fill a display width
fn fit_to_width(s: &str, width: usize) -> String {
    let mut result = String::new();
    let mut used = 0;

    for ch in s.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if used + ch_width > width {
            break;
        }
        result.push(ch);
        used += ch_width;
    }

    result.push_str(&" ".repeat(width - used));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Category;

    #[test]
    fn test_layout() {
        let layout = Layout::compute(80, 24);
        assert_eq!(layout.left_width, 40);
        assert_eq!(layout.right_start, 41);
        assert_eq!(layout.right_width, 39);
        assert_eq!(layout.pane_height, 21);
        assert_eq!(layout.stats_row, 22);
        assert_eq!(layout.notice_row, 23);
    }

    #[test]
    fn test_line_at() {
        let layout = Layout::compute(80, 24);
        // Raw pane clicks never pin
        assert_eq!(layout.line_at(1, 10, 0, 5), None);
        assert_eq!(layout.line_at(1, 50, 0, 5), Some(0));
        assert_eq!(layout.line_at(3, 50, 10, 20), Some(12));
        // Past the last line
        assert_eq!(layout.line_at(10, 50, 0, 5), None);
        // Title and status rows
        assert_eq!(layout.line_at(0, 50, 0, 5), None);
        assert_eq!(layout.line_at(22, 50, 0, 100), None);
    }

    #[test]
    fn test_display_col_expands_tabs() {
        assert_eq!(display_col("\tx", 1, 4), 4);
        assert_eq!(display_col("ab\tx", 3, 4), 4);
        assert_eq!(display_col("日本", 3, 4), 2);
        assert_eq!(display_col("a\r", 2, 4), 1);
    }

    fn visible(text: &str, skip: usize, max_cols: usize) -> (String, usize) {
        let (runs, used) = styled_runs(text, &[], Style::default(), skip, max_cols, 4);
        (runs.into_iter().map(|(run, _)| run).collect(), used)
    }

    #[test]
    fn test_styled_runs_scroll() {
        assert_eq!(visible("abcdef", 0, 4), ("abcd".to_string(), 4));
        assert_eq!(visible("abcdef", 2, 3), ("cde".to_string(), 3));
        assert_eq!(visible("abcdef", 6, 3), (String::new(), 0));
        // Tabs keep their absolute stops; a cut tab shows its tail
        assert_eq!(visible("a\tb", 2, 10), ("  b".to_string(), 3));
        // A cut wide character leaves a blank cell
        assert_eq!(visible("日本", 1, 10), (" 本".to_string(), 3));
    }

    #[test]
    fn test_styled_runs_merge_styles() {
        let spans = [Span::new(0, 3, Category::Keyword)];
        let (runs, used) = styled_runs("let x", &spans, Style::default(), 0, 80, 4);
        assert_eq!(used, 5);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].0, "let");
        assert_eq!(runs[0].1.fg, Category::Keyword.default_style().fg);
        assert_eq!(runs[1], (" x".to_string(), Style::default()));
    }

    #[test]
    fn test_line_number_width() {
        assert_eq!(line_number_width(false, 10), 0);
        assert_eq!(line_number_width(true, 1), 4);
        assert_eq!(line_number_width(true, 12345), 6);
    }

    #[test]
    fn test_fit_to_width() {
        assert_eq!(fit_to_width("abc", 5), "abc  ");
        assert_eq!(fit_to_width("abcdef", 3), "abc");
        assert_eq!(fit_to_width("日本語", 5), "日本 ");
    }
}
