//! codeviz - a terminal code visualizer
//!
//! Paste or type JavaScript/JSX on the left, read it highlighted on the
//! right, with statistics, copy, download and HTML export.

mod app;
mod clipboard;
mod config;
mod display;
mod editor;
mod error;
mod export;
mod input;
mod sample;
mod state;
mod stats;
mod syntax;
mod terminal;
mod theme;

use std::env;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::process;

use env_logger::{Builder, Env, Target};
use log::info;

use app::{App, Session};
use clipboard::SystemClipboard;
use config::Config;
use error::{Result, VisualizerError};
use state::ViewState;
use stats::CodeStats;
use syntax::{HighlightMode, Highlighter};
use terminal::Terminal;

/// What the command line asked for
#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    help: bool,
    version: bool,
    html: bool,
    stats: bool,
    chained: bool,
    file: Option<PathBuf>,
}

impl Options {
    fn parse(args: &[String]) -> Result<Self> {
        let mut options = Options::default();
        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => options.help = true,
                "--version" | "-V" => options.version = true,
                "--html" => options.html = true,
                "--stats" => options.stats = true,
                "--chained" => options.chained = true,
                flag if flag.starts_with('-') => {
                    return Err(VisualizerError::Message(format!("unknown option: {}", flag)));
                }
                path => {
                    if options.file.is_some() {
                        return Err(VisualizerError::Message("only one FILE may be given".to_string()));
                    }
                    options.file = Some(PathBuf::from(path));
                }
            }
        }
        Ok(options)
    }

    fn interactive(&self) -> bool {
        !(self.help || self.version || self.html || self.stats)
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = Options::parse(&args)?;

    if options.help {
        print_usage();
        return Ok(());
    }
    if options.version {
        print_version();
        return Ok(());
    }

    init_logging(options.interactive());

    let mut config = Config::load();
    if options.chained {
        config.highlight_mode = HighlightMode::Chained;
    }

    let text = match &options.file {
        Some(path) => fs::read_to_string(path)?,
        None => sample::WELCOME.to_string(),
    };
    info!("loaded {} bytes", text.len());

    if !options.interactive() {
        print!("{}", batch_output(&options, &text, &config));
        return Ok(());
    }

    let session = Session::new(text, &config, Box::new(SystemClipboard));
    let terminal = Terminal::new()?;
    let mut app = App::new(session, terminal, &config);
    app.run()
}

/// Output of the non-interactive modes, statistics first
fn batch_output(options: &Options, text: &str, config: &Config) -> String {
    let mut out = String::new();
    if options.stats {
        let stats = CodeStats::compute(text);
        out.push_str(&format!("Lines:      {}\n", stats.lines));
        out.push_str(&format!("Characters: {}\n", stats.characters));
        out.push_str(&format!("Words:      {}\n", stats.words));
        out.push_str(&format!("Functions:  {}\n", stats.functions));
    }
    if options.html {
        let state = ViewState::new(text, config);
        let highlighter = Highlighter::new(config.highlight_mode, config.escape_html);
        out.push_str(&export::render_page(&state, &highlighter));
    }
    out
}

/// Log to stderr, or to a file while the terminal UI owns the screen
fn init_logging(interactive: bool) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if interactive {
        let path = env::temp_dir().join("codeviz.log");
        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => {
                builder.target(Target::Pipe(Box::new(file)));
            }
            Err(_) => {
                // Nowhere to write without corrupting the screen
                builder.filter_level(log::LevelFilter::Off);
            }
        }
    }
    let _ = builder.try_init();
}

fn print_usage() {
    println!("codeviz {} - terminal code visualizer", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: codeviz [OPTIONS] [FILE]");
    println!();
    println!("Options:");
    println!("  -h, --help     Show this help message");
    println!("  -V, --version  Show version information");
    println!("      --html     Print the highlighted page as HTML and exit");
    println!("      --stats    Print code statistics and exit");
    println!("      --chained  Use the ordered substitution highlighter");
    println!();
    println!("Key bindings:");
    println!("  C-y            Copy code to clipboard");
    println!("  C-s            Download as code.js");
    println!("  C-e            Export highlighted view as code.html");
    println!("  C-t            Cycle theme (Dark, Light, Monokai)");
    println!("  M-1, M-2, M-3  Select Dark, Light or Monokai");
    println!("  C-l            Toggle line numbers");
    println!("  M-+, M--       Font size up / down");
    println!("  M-0            Reset font size");
    println!("  C-p, click     Pin or unpin a line");
    println!("  Esc            Dismiss notice");
    println!("  C-q            Quit");
    println!();
    println!("Settings are read from ~/.codeviz.toml");
}

fn print_version() {
    println!("codeviz {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_options() {
        let options = Options::parse(&args(&["--html", "--chained", "app.jsx"])).unwrap();
        assert!(options.html);
        assert!(options.chained);
        assert_eq!(options.file, Some(PathBuf::from("app.jsx")));
        assert!(!options.interactive());

        let options = Options::parse(&args(&[])).unwrap();
        assert!(options.interactive());
        assert_eq!(options.file, None);
    }

    #[test]
    fn test_batch_output() {
        let config = Config::default();
        let options = Options::parse(&args(&["--stats", "--html"])).unwrap();
        let out = batch_output(&options, "let x = 5;\nlet y;", &config);
        assert!(out.starts_with("Lines:      2\nCharacters: 17\n"));
        assert!(out.contains("Words:      6\n"));
        assert!(out.contains("<!DOCTYPE html>"));
        assert!(out.contains(r#"<span class="keyword">let</span> x = <span class="number">5</span>;"#));

        let options = Options::parse(&args(&["--stats"])).unwrap();
        assert!(!batch_output(&options, "", &config).contains("<html>"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(Options::parse(&args(&["--frobnicate"])).is_err());
        assert!(Options::parse(&args(&["a.js", "b.js"])).is_err());
    }
}
