//! View state and reducer
//!
//! Every user action produces a new `ViewState` from the old one; nothing
//! else mutates it. Side effects (clipboard, files) live in the app layer
//! and report back through `Action::ShowNotice`.

use crate::config::{Config, FontRange};
use crate::stats::CodeStats;
use crate::theme::Theme;

/// Severity of a transient notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Transient message shown on the status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// State transitions driven by user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the whole text
    EditText(String),
    SetTheme(Theme),
    CycleTheme,
    /// Set an absolute font size (clamped)
    SetFontSize(i64),
    /// Move the font size by a delta (clamped)
    StepFontSize(i64),
    ToggleLineNumbers,
    /// Pin the line, move the pin to it, or clear it if already pinned
    TogglePin(usize),
    ShowNotice(Notice),
    DismissNotice,
}

/// Everything the view renders from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub text: String,
    pub theme: Theme,
    pub font_size: u16,
    pub font_range: FontRange,
    pub show_line_numbers: bool,
    pub pinned_line: Option<usize>,
    pub notice: Option<Notice>,
}

impl ViewState {
    pub fn new(text: impl Into<String>, config: &Config) -> Self {
        Self {
            text: text.into(),
            theme: config.theme,
            font_size: config.font_range.clamp(i64::from(config.font_size)),
            font_range: config.font_range,
            show_line_numbers: config.show_line_numbers,
            pinned_line: None,
            notice: None,
        }
    }

    /// Lines of the text, split on `'\n'`
    pub fn lines(&self) -> Vec<&str> {
        self.text.split('\n').collect()
    }

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    pub fn stats(&self) -> CodeStats {
        CodeStats::compute(&self.text)
    }

    pub fn is_pinned(&self, line: usize) -> bool {
        self.pinned_line == Some(line)
    }

    /// Apply an action, producing the next state
    pub fn reduce(&self, action: Action) -> ViewState {
        let mut next = self.clone();
        match action {
            Action::EditText(text) => {
                next.text = text;
                // A pin past the last line no longer names anything
                if let Some(line) = next.pinned_line {
                    if line >= next.line_count() {
                        next.pinned_line = None;
                    }
                }
            }
            Action::SetTheme(theme) => next.theme = theme,
            Action::CycleTheme => next.theme = self.theme.next(),
            Action::SetFontSize(size) => next.font_size = self.font_range.clamp(size),
            Action::StepFontSize(delta) => {
                let size = i64::from(self.font_size).saturating_add(delta);
                next.font_size = self.font_range.clamp(size);
            }
            Action::ToggleLineNumbers => next.show_line_numbers = !self.show_line_numbers,
            Action::TogglePin(line) => {
                next.pinned_line = if self.pinned_line == Some(line) {
                    None
                } else {
                    Some(line)
                };
            }
            Action::ShowNotice(notice) => next.notice = Some(notice),
            Action::DismissNotice => next.notice = None,
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(text: &str) -> ViewState {
        ViewState::new(text, &Config::default())
    }

    #[test]
    fn test_initial_state_from_config() {
        let s = state("a\nb");
        assert_eq!(s.theme, Theme::Dark);
        assert_eq!(s.font_size, 14);
        assert!(s.show_line_numbers);
        assert_eq!(s.pinned_line, None);
        assert_eq!(s.lines(), vec!["a", "b"]);
    }

    #[test]
    fn test_reduce_does_not_touch_previous_state() {
        let before = state("x");
        let after = before.reduce(Action::EditText("y".to_string()));
        assert_eq!(before.text, "x");
        assert_eq!(after.text, "y");
    }

    #[test]
    fn test_pin_toggle_move_clear() {
        let s = state("a\nb\nc");
        let s = s.reduce(Action::TogglePin(1));
        assert_eq!(s.pinned_line, Some(1));
        let s = s.reduce(Action::TogglePin(2));
        assert_eq!(s.pinned_line, Some(2));
        assert!(!s.is_pinned(1));
        let s = s.reduce(Action::TogglePin(2));
        assert_eq!(s.pinned_line, None);
    }

    #[test]
    fn test_edit_clears_stale_pin() {
        let s = state("a\nb\nc").reduce(Action::TogglePin(2));
        let kept = s.reduce(Action::EditText("a\nb\nc!".to_string()));
        assert_eq!(kept.pinned_line, Some(2));
        let cleared = s.reduce(Action::EditText("a".to_string()));
        assert_eq!(cleared.pinned_line, None);
    }

    quickcheck::quickcheck! {
        fn font_size_stays_in_any_bounds(a: u16, b: u16, start: i64, sizes: Vec<i64>) -> bool {
            let config = Config {
                font_range: FontRange::new(a, b),
                font_size: start.clamp(0, i64::from(u16::MAX)) as u16,
                ..Config::default()
            };
            let mut s = ViewState::new("", &config);
            if !s.font_range.contains(s.font_size) {
                return false;
            }
            for (i, size) in sizes.into_iter().enumerate() {
                let action = if i % 2 == 0 {
                    Action::StepFontSize(size)
                } else {
                    Action::SetFontSize(size)
                };
                s = s.reduce(action);
                if !s.font_range.contains(s.font_size) {
                    return false;
                }
            }
            true
        }

        fn pin_is_single_and_valid(text: String, lines: Vec<usize>) -> bool {
            let mut s = ViewState::new(text, &Config::default());
            for line in lines {
                let before = s.pinned_line;
                s = s.reduce(Action::TogglePin(line));
                let expected = if before == Some(line) { None } else { Some(line) };
                if s.pinned_line != expected {
                    return false;
                }
            }
            true
        }
    }

    #[test]
    fn test_font_size_stays_in_bounds() {
        let mut s = state("");
        let actions = [
            Action::SetFontSize(100),
            Action::StepFontSize(1),
            Action::SetFontSize(-5),
            Action::StepFontSize(-1),
            Action::StepFontSize(i64::MAX),
            Action::StepFontSize(i64::MIN),
            Action::SetFontSize(15),
            Action::StepFontSize(3),
        ];
        for action in actions {
            s = s.reduce(action);
            assert!(s.font_range.contains(s.font_size), "size {}", s.font_size);
        }
        assert_eq!(s.font_size, 18);
    }

    #[test]
    fn test_theme_and_line_numbers() {
        let s = state("").reduce(Action::SetTheme(Theme::Light));
        assert_eq!(s.theme, Theme::Light);
        let s = s.reduce(Action::CycleTheme);
        assert_eq!(s.theme, Theme::Monokai);
        let s = s.reduce(Action::ToggleLineNumbers);
        assert!(!s.show_line_numbers);
        let s = s.reduce(Action::ToggleLineNumbers);
        assert!(s.show_line_numbers);
    }

    #[test]
    fn test_notices() {
        let s = state("").reduce(Action::ShowNotice(Notice::error("nope")));
        assert_eq!(s.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Error));
        let s = s.reduce(Action::DismissNotice);
        assert_eq!(s.notice, None);
    }
}
