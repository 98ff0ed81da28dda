//! Input handling - event translation
//!
//! Key bindings:
//! ```text
//! printable, Tab, Enter     insert
//! Backspace, Delete         delete
//! arrows, Home, End         move cursor
//! PageUp, PageDown          scroll by a page
//! C-t                       cycle theme
//! M-1, M-2, M-3             Dark, Light, Monokai theme
//! C-l                       toggle line numbers
//! M-+ / M-=, M--            font size up / down
//! M-0                       configured font size
//! C-p                       pin the cursor line
//! mouse click               pin the clicked line (highlighted pane)
//! C-y                       copy to clipboard
//! C-s                       download code.js
//! C-e                       export code.html
//! Esc                       dismiss notice
//! C-q                       quit
//! ```

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::theme::Theme;

/// What the app should do in response to an input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Insert(char),
    Paste(String),
    Newline,
    Backspace,
    Delete,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    LineStart,
    LineEnd,
    PageUp,
    PageDown,
    CycleTheme,
    SelectTheme(Theme),
    ToggleLineNumbers,
    FontBigger,
    FontSmaller,
    ResetFontSize,
    PinCursorLine,
    /// Left click at a screen cell
    Click { row: u16, col: u16 },
    Copy,
    Download,
    ExportHtml,
    DismissNotice,
    Redraw,
    Quit,
    Ignore,
}

/// Translate a terminal event into a command
pub fn translate(event: &Event) -> Command {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse),
        Event::Paste(text) => Command::Paste(text.clone()),
        Event::Resize(_, _) => Command::Redraw,
        _ => Command::Ignore,
    }
}

fn translate_key(key: &KeyEvent) -> Command {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return Command::Ignore;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char(ch) if ctrl => match ch.to_ascii_lowercase() {
            't' => Command::CycleTheme,
            'l' => Command::ToggleLineNumbers,
            'p' => Command::PinCursorLine,
            'y' => Command::Copy,
            's' => Command::Download,
            'e' => Command::ExportHtml,
            'q' => Command::Quit,
            _ => Command::Ignore,
        },
        KeyCode::Char(ch) if alt => match ch {
            '+' | '=' => Command::FontBigger,
            '-' => Command::FontSmaller,
            '0' => Command::ResetFontSize,
            '1'..='3' => {
                let index = (ch as usize) - ('1' as usize);
                Command::SelectTheme(Theme::ALL[index])
            }
            _ => Command::Ignore,
        },
        KeyCode::Char(ch) => Command::Insert(ch),
        KeyCode::Tab => Command::Insert('\t'),
        KeyCode::Enter => Command::Newline,
        KeyCode::Backspace => Command::Backspace,
        KeyCode::Delete => Command::Delete,
        KeyCode::Left => Command::MoveLeft,
        KeyCode::Right => Command::MoveRight,
        KeyCode::Up => Command::MoveUp,
        KeyCode::Down => Command::MoveDown,
        KeyCode::Home => Command::LineStart,
        KeyCode::End => Command::LineEnd,
        KeyCode::PageUp => Command::PageUp,
        KeyCode::PageDown => Command::PageDown,
        KeyCode::Esc => Command::DismissNotice,
        _ => Command::Ignore,
    }
}

fn translate_mouse(mouse: &MouseEvent) -> Command {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Command::Click {
            row: mouse.row,
            col: mouse.column,
        },
        _ => Command::Ignore,
    }
}
