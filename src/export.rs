//! Download and HTML export
//!
//! The download writes the current text verbatim as `code.js`; the export
//! writes the highlighted view as a standalone page.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::Result;
use crate::state::ViewState;
use crate::syntax::{Category, Highlighter};

/// File name of the downloaded text
pub const DOWNLOAD_FILE_NAME: &str = "code.js";
/// Content type of the download; a file on disk carries none, so it only
/// appears in the download log line
pub const DOWNLOAD_MIME_TYPE: &str = "text/javascript";
/// File name of the exported page
pub const EXPORT_FILE_NAME: &str = "code.html";

/// Write the text verbatim to `dir/code.js`, replacing any previous file
pub fn download(dir: &Path, text: &str) -> Result<PathBuf> {
    let path = dir.join(DOWNLOAD_FILE_NAME);
    fs::write(&path, text)?;
    info!("wrote {} ({}, {} bytes)", path.display(), DOWNLOAD_MIME_TYPE, text.len());
    Ok(path)
}

/// Write the highlighted page to `dir/code.html`
pub fn export_html(dir: &Path, state: &ViewState, highlighter: &Highlighter) -> Result<PathBuf> {
    let path = dir.join(EXPORT_FILE_NAME);
    fs::write(&path, render_page(state, highlighter))?;
    info!("exported {}", path.display());
    Ok(path)
}

/// Render the highlighted view as a complete HTML document
pub fn render_page(state: &ViewState, highlighter: &Highlighter) -> String {
    let palette = state.theme.palette();
    let mut page = String::new();

    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str("<title>React Code Visualizer</title>\n<style>\n");
    page.push_str(&format!(
        "body {{ background: {}; color: {}; }}\n",
        palette.background.to_css(),
        palette.text.to_css()
    ));
    page.push_str(&format!(
        "pre {{ font-family: monospace; font-size: {}px; border: 1px solid {}; padding: 1em; }}\n",
        state.font_size,
        palette.border.to_css()
    ));
    page.push_str(".line { display: flex; }\n");
    page.push_str(&format!(".line.pinned {{ background: {}; }}\n", palette.highlight.to_css()));
    page.push_str(&format!(
        ".line-number {{ color: {}; width: 3em; text-align: right; padding-right: 0.75em; user-select: none; }}\n",
        palette.line_number.to_css()
    ));
    for category in Category::ALL {
        page.push_str(&format!(
            ".{} {{ {} }}\n",
            category.css_class(),
            category.default_style().to_css()
        ));
    }
    page.push_str("</style>\n</head>\n<body>\n<pre>\n");

    for (index, html) in highlighter.highlight_text(&state.text).into_iter().enumerate() {
        let class = if state.is_pinned(index) { "line pinned" } else { "line" };
        page.push_str(&format!("<div class=\"{}\">", class));
        if state.show_line_numbers {
            page.push_str(&format!("<span class=\"line-number\">{}</span>", index + 1));
        }
        let html = if html.is_empty() { "<br>".to_string() } else { html };
        page.push_str(&format!("<code>{}</code></div>\n", html));
    }

    page.push_str("</pre>\n</body>\n</html>\n");
    page
}
