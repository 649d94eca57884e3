//! System clipboard access via arboard, behind the `clipboard` feature.

use crate::prelude::{eprintln, *};
use colored::Colorize;

/// Copy text to the system clipboard.
#[cfg(feature = "clipboard")]
pub fn copy(text: &str) -> std::result::Result<(), Error> {
    if text.is_empty() {
        return Err(Error::Clipboard("Cannot copy empty text".to_string()));
    }

    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| Error::Clipboard(e.to_string()))
}

#[cfg(not(feature = "clipboard"))]
pub fn copy(_text: &str) -> std::result::Result<(), Error> {
    Err(Error::ClipboardDisabled)
}

/// Copy and report the outcome on stderr. Failures never abort the command.
pub fn copy_or_warn(text: &str) {
    match copy(text) {
        Ok(()) => {
            log::debug!("Copied {} bytes to clipboard", text.len());
            eprintln!("{}", "Copied to clipboard".green());
        }
        Err(err) => {
            log::warn!("Clipboard copy failed: {err}");
            eprintln!("{}: {}", "Warning".yellow().bold(), err);
        }
    }
}
