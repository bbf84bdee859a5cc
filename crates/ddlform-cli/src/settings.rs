//! CLI settings
//!
//! Read from `<config dir>/ddlform/settings.json`, or from the path given
//! with `--config`. A missing file means defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub clipboard: ClipboardSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter used when RUST_LOG is not set
    pub default_filter: String,
    /// Include file/line information in log lines
    pub include_location: bool,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            default_filter: "warn,ddlform_cli=info,ddlform_designer=info".to_string(),
            include_location: cfg!(debug_assertions),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    /// OSC 52 escape sequence; the terminal puts the text on the system clipboard
    #[default]
    Osc52,
    /// Write the text to a file
    File,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ClipboardSettings {
    pub backend: ClipboardBackend,
    /// Target of the file backend; defaults to `<data dir>/ddlform/clipboard.sql`
    pub file_path: Option<PathBuf>,
}

impl ClipboardSettings {
    pub fn resolved_file_path(&self) -> Result<PathBuf> {
        match &self.file_path {
            Some(path) => Ok(path.clone()),
            None => dirs::data_dir()
                .context("Could not determine data directory")
                .map(|p| p.join("ddlform").join("clipboard.sql")),
        }
    }
}

impl Settings {
    /// Load from an explicit path, or from the default location
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::settings_path()?,
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        serde_json::from_str(&content).with_context(|| "Failed to parse settings JSON")
    }

    pub fn settings_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not find config directory")?;
        Ok(config_dir.join("ddlform").join("settings.json"))
    }
}
