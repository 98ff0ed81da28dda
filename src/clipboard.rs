//! Clipboard access
//!
//! Copy never fails the caller: the outcome comes back as a notice.

use log::{error, info};

use crate::error::Result;
use crate::state::Notice;

/// Something that can receive copied text
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard
///
/// A fresh handle is opened for each copy so a clipboard that appears
/// later (or a display that goes away) is picked up.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.to_string())?;
        Ok(())
    }
}

/// Copy text and describe the outcome
pub fn copy_text(clipboard: &mut dyn Clipboard, text: &str) -> Notice {
    match clipboard.set_text(text) {
        Ok(()) => {
            info!("copied {} bytes to clipboard", text.len());
            Notice::info("Code copied to clipboard!")
        }
        Err(err) => {
            error!("Failed to copy code: {}", err);
            Notice::error(format!("Failed to copy code: {}", err))
        }
    }
}
