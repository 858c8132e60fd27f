//! Clipboard helper for copying a short URL to the system clipboard
//!
//! Uses `arboard` for cross-platform support. The clipboard handle is
//! created fresh per copy so no resource is held between copies; failures
//! (headless session, denied access) surface as errors the caller turns
//! into a toast.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}
