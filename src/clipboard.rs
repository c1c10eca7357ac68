//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;
use zeroize::Zeroize;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write to clipboard: {0}")]
    Write(String),
}

/// Open the platform clipboard.
pub fn open() -> Result<ClipboardContext, ClipboardError> {
    ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))
}

/// Replace the clipboard contents with exactly `text`.
pub fn write<C: ClipboardProvider>(clipboard: &mut C, text: &str) -> Result<(), ClipboardError> {
    clipboard
        .set_contents(text.to_owned())
        .map_err(|e| ClipboardError::Write(e.to_string()))?;

    // Reading back makes X11 take ownership before we return; wipe the copy.
    if let Ok(mut retrieved) = clipboard.get_contents() {
        retrieved.zeroize();
    }
    Ok(())
}
