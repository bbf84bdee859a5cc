//! Terminal clipboard mechanisms

use anyhow::{Context, Result};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use ddlform_designer::Clipboard;
use std::io::Write;
use std::path::PathBuf;

use crate::settings::{ClipboardBackend, ClipboardSettings};

/// Copies through the OSC 52 escape sequence understood by most terminal
/// emulators (and forwarded by tmux/ssh), so no display server is needed.
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn sequence(text: &str) -> String {
        format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(Self::sequence(text).as_bytes())
            .context("Failed to write clipboard sequence")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Writes copied text to a file
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Clipboard for FileClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
        std::fs::write(&self.path, text)
            .with_context(|| format!("Failed to write clipboard file {:?}", self.path))?;
        tracing::debug!(path = %self.path.display(), "clipboard file written");
        Ok(())
    }
}

/// Build the clipboard selected in settings
pub fn from_settings(settings: &ClipboardSettings) -> Result<Box<dyn Clipboard>> {
    let clipboard: Box<dyn Clipboard> = match settings.backend {
        ClipboardBackend::Osc52 => Box::new(Osc52Clipboard::new(std::io::stdout())),
        ClipboardBackend::File => Box::new(FileClipboard::new(settings.resolved_file_path()?)),
    };
    Ok(clipboard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn osc52_sequence_wraps_base64() {
        let mut out = Vec::new();
        Osc52Clipboard::new(&mut out)
            .set_text("SELECT 1")
            .expect("copy");

        assert_eq!(String::from_utf8(out).expect("utf8"), "\x1b]52;c;U0VMRUNUIDE=\x07");
    }

    #[test]
    fn file_clipboard_creates_parent_dirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("copy.sql");

        FileClipboard::new(&path).set_text("CREATE TABLE").expect("copy");

        assert_eq!(std::fs::read_to_string(&path).expect("read"), "CREATE TABLE");
    }
}
