//! Configuration file support
//!
//! Reads settings from ~/.codeviz.toml (or %USERPROFILE%\.codeviz.toml on
//! Windows). The file is optional and never written back.
//!
//! Example:
//! ```text
//! # codeviz configuration
//! theme = "monokai"
//! font_size = 16
//! min_font_size = 10
//! max_font_size = 20
//! line_numbers = true
//! highlight_mode = "tokenized"
//! escape_html = true
//! tab_width = 4
//! download_dir = "/tmp"
//! ```

use std::fs;
use std::path::PathBuf;

use log::{debug, warn};
use serde::Deserialize;

use crate::error::Result;
use crate::syntax::HighlightMode;
use crate::theme::Theme;

/// Inclusive font-size bounds for the size slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontRange {
    pub min: u16,
    pub max: u16,
}

impl FontRange {
    /// Build a range, swapping inverted bounds
    pub fn new(a: u16, b: u16) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Clamp any requested size into the range
    pub fn clamp(&self, size: i64) -> u16 {
        size.clamp(i64::from(self.min), i64::from(self.max)) as u16
    }

    #[cfg(test)]
    pub fn contains(&self, size: u16) -> bool {
        size >= self.min && size <= self.max
    }
}

impl Default for FontRange {
    fn default() -> Self {
        Self { min: 10, max: 20 }
    }
}

/// Configuration settings
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme at startup
    pub theme: Theme,
    /// Font size at startup, inside `font_range`
    pub font_size: u16,
    /// Bounds for font-size changes
    pub font_range: FontRange,
    /// Whether to show line numbers
    pub show_line_numbers: bool,
    /// Highlighting pipeline
    pub highlight_mode: HighlightMode,
    /// Escape user text in HTML output
    pub escape_html: bool,
    /// Tab width for display
    pub tab_width: usize,
    /// Where downloads and exports are written
    pub download_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            font_size: 14,
            font_range: FontRange::default(),
            show_line_numbers: true,
            highlight_mode: HighlightMode::Tokenized,
            escape_html: true,
            tab_width: 4,
            download_dir: PathBuf::from("."),
        }
    }
}

/// On-disk shape; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    theme: Option<Theme>,
    font_size: Option<i64>,
    min_font_size: Option<u16>,
    max_font_size: Option<u16>,
    line_numbers: Option<bool>,
    highlight_mode: Option<HighlightMode>,
    escape_html: Option<bool>,
    tab_width: Option<usize>,
    download_dir: Option<PathBuf>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".codeviz.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".codeviz.toml"))
        }
    }

    /// Load configuration, falling back to defaults on any problem
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        let Ok(contents) = fs::read_to_string(&path) else {
            debug!("no config at {}", path.display());
            return Config::default();
        };

        match Self::parse(&contents) {
            Ok(config) => config,
            Err(err) => {
                warn!("ignoring {}: {}", path.display(), err);
                Config::default()
            }
        }
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents)?;
        let mut config = Config::default();
        config.apply(file);
        Ok(config)
    }

    /// Apply settings from a parsed file
    fn apply(&mut self, file: ConfigFile) {
        if let Some(theme) = file.theme {
            self.theme = theme;
        }

        let min = file.min_font_size.unwrap_or(self.font_range.min);
        let max = file.max_font_size.unwrap_or(self.font_range.max);
        self.font_range = FontRange::new(min, max);

        let size = file.font_size.unwrap_or(i64::from(self.font_size));
        self.font_size = self.font_range.clamp(size);

        if let Some(value) = file.line_numbers {
            self.show_line_numbers = value;
        }

        if let Some(mode) = file.highlight_mode {
            self.highlight_mode = mode;
        }

        if let Some(value) = file.escape_html {
            self.escape_html = value;
        }

        if let Some(n) = file.tab_width {
            self.tab_width = n.clamp(1, 16); // Between 1 and 16
        }

        if let Some(dir) = file.download_dir {
            self.download_dir = dir;
        }
    }
}
