//! Session state and main loop

use std::path::PathBuf;

use log::{debug, error};

use crate::clipboard::{copy_text, Clipboard};
use crate::config::Config;
use crate::display::{self, Display, Layout};
use crate::editor::{self, Cursor};
use crate::error::Result;
use crate::export;
use crate::input::{self, Command};
use crate::state::{Action, Notice, ViewState};
use crate::syntax::Highlighter;
use crate::terminal::Terminal;

/// Everything the loop works on apart from the terminal itself
pub struct Session {
    pub state: ViewState,
    pub cursor: Cursor,
    /// First line shown in both panes
    pub top_line: usize,
    /// First display column shown in the raw pane
    pub left_col: usize,
    pub highlighter: Highlighter,
    clipboard: Box<dyn Clipboard>,
    download_dir: PathBuf,
    /// Font size `ResetFontSize` returns to
    default_font_size: u16,
    tab_width: usize,
}

impl Session {
    pub fn new(text: impl Into<String>, config: &Config, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            state: ViewState::new(text, config),
            cursor: Cursor::default(),
            top_line: 0,
            left_col: 0,
            highlighter: Highlighter::new(config.highlight_mode, config.escape_html),
            clipboard,
            download_dir: config.download_dir.clone(),
            default_font_size: config.font_size,
            tab_width: config.tab_width,
        }
    }

    fn dispatch(&mut self, action: Action) {
        debug!("action {:?}", action);
        self.state = self.state.reduce(action);
    }

    fn edit(&mut self, text: String, cursor: Cursor) {
        self.dispatch(Action::EditText(text));
        if self.state.notice.is_some() {
            self.dispatch(Action::DismissNotice);
        }
        self.cursor = cursor;
    }

    /// Handle one command; returns false when the session should end
    pub fn handle(&mut self, command: Command, layout: &Layout) -> bool {
        let text = self.state.text.as_str();
        let page = layout.pane_height.max(1);

        match command {
            Command::Insert(ch) => {
                let (text, cursor) = editor::insert(text, self.cursor, ch.encode_utf8(&mut [0; 4]));
                self.edit(text, cursor);
            }
            Command::Paste(pasted) => {
                // Terminals deliver pasted line breaks as carriage returns
                let pasted = pasted.replace("\r\n", "\n").replace('\r', "\n");
                let (text, cursor) = editor::insert(text, self.cursor, &pasted);
                self.edit(text, cursor);
            }
            Command::Newline => {
                let (text, cursor) = editor::insert(text, self.cursor, "\n");
                self.edit(text, cursor);
            }
            Command::Backspace => {
                if let Some((text, cursor)) = editor::backspace(text, self.cursor) {
                    self.edit(text, cursor);
                }
            }
            Command::Delete => {
                if let Some((text, cursor)) = editor::delete(text, self.cursor) {
                    self.edit(text, cursor);
                }
            }
            Command::MoveLeft => self.cursor = editor::move_left(text, self.cursor),
            Command::MoveRight => self.cursor = editor::move_right(text, self.cursor),
            Command::MoveUp => self.cursor = editor::move_up(text, self.cursor, 1),
            Command::MoveDown => self.cursor = editor::move_down(text, self.cursor, 1),
            Command::PageUp => self.cursor = editor::move_up(text, self.cursor, page),
            Command::PageDown => self.cursor = editor::move_down(text, self.cursor, page),
            Command::LineStart => self.cursor = editor::line_start(self.cursor),
            Command::LineEnd => self.cursor = editor::line_end(text, self.cursor),
            Command::CycleTheme => self.dispatch(Action::CycleTheme),
            Command::SelectTheme(theme) => self.dispatch(Action::SetTheme(theme)),
            Command::ToggleLineNumbers => self.dispatch(Action::ToggleLineNumbers),
            Command::FontBigger => self.dispatch(Action::StepFontSize(1)),
            Command::FontSmaller => self.dispatch(Action::StepFontSize(-1)),
            Command::ResetFontSize => {
                self.dispatch(Action::SetFontSize(i64::from(self.default_font_size)))
            }
            Command::PinCursorLine => self.dispatch(Action::TogglePin(self.cursor.line)),
            Command::Click { row, col } => {
                let line_count = self.state.line_count();
                if let Some(line) = layout.line_at(row, col, self.top_line, line_count) {
                    self.dispatch(Action::TogglePin(line));
                }
            }
            Command::Copy => {
                let notice = copy_text(self.clipboard.as_mut(), &self.state.text);
                self.dispatch(Action::ShowNotice(notice));
            }
            Command::Download => {
                let notice = match export::download(&self.download_dir, &self.state.text) {
                    Ok(path) => Notice::info(format!("Saved {}", path.display())),
                    Err(err) => {
                        error!("download failed: {}", err);
                        Notice::error(format!("Download failed: {}", err))
                    }
                };
                self.dispatch(Action::ShowNotice(notice));
            }
            Command::ExportHtml => {
                let result = export::export_html(&self.download_dir, &self.state, &self.highlighter);
                let notice = match result {
                    Ok(path) => Notice::info(format!("Exported {}", path.display())),
                    Err(err) => {
                        error!("export failed: {}", err);
                        Notice::error(format!("Export failed: {}", err))
                    }
                };
                self.dispatch(Action::ShowNotice(notice));
            }
            Command::DismissNotice => self.dispatch(Action::DismissNotice),
            Command::Quit => return false,
            Command::Redraw | Command::Ignore => {}
        }

        self.scroll_to_cursor(layout);
        true
    }

    /// Keep the cursor inside the visible raw pane
    fn scroll_to_cursor(&mut self, layout: &Layout) {
        let height = layout.pane_height.max(1);
        if self.cursor.line < self.top_line {
            self.top_line = self.cursor.line;
        } else if self.cursor.line >= self.top_line + height {
            self.top_line = self.cursor.line + 1 - height;
        }

        let line = self.state.text.split('\n').nth(self.cursor.line).unwrap_or("");
        let col = display::display_col(line, self.cursor.col, self.tab_width);
        let width = layout.left_width.max(1);
        if col < self.left_col {
            self.left_col = col;
        } else if col >= self.left_col + width {
            self.left_col = col + 1 - width;
        }
    }
}

/// Interactive visualizer bound to a terminal
pub struct App {
    session: Session,
    terminal: Terminal,
    display: Display,
}

impl App {
    pub fn new(session: Session, terminal: Terminal, config: &Config) -> Self {
        Self {
            session,
            terminal,
            display: Display::new(config.tab_width),
        }
    }

    /// Run until the user quits
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.display.render(
                &mut self.terminal,
                &self.session.state,
                &self.session.highlighter,
                self.session.cursor,
                self.session.top_line,
                self.session.left_col,
            )?;

            let event = self.terminal.read_event()?;
            let command = input::translate(&event);
            if command == Command::Redraw {
                self.display.force_redraw();
            }

            let layout = Layout::compute(self.terminal.cols(), self.terminal.rows());
            if !self.session.handle(command, &layout) {
                return Ok(());
            }
        }
    }
}
