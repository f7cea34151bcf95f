//! Shell configuration (`vox.toml`).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, VoxError};

/// Configuration for the interactive shell.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    /// Path of the board file to load on startup and save on exit.
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,
    /// Whether `quit` writes the board back to `catalog`.
    #[serde(default = "yes")]
    pub auto_save: bool,
    /// Prompt string shown before each input line.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_catalog() -> PathBuf {
    PathBuf::from("board.txt")
}
fn default_prompt() -> String {
    "vox> ".to_string()
}
fn yes() -> bool {
    true
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            auto_save: true,
            prompt: default_prompt(),
        }
    }
}

impl BoardConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| VoxError::Config(format!("vox.toml: {e}")))
    }

    /// Load a configuration file. A missing file yields the defaults;
    /// an unreadable or malformed file is an error.
    pub fn from_file(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            },
            Err(e) => Err(VoxError::Config(format!("{}: {e}", path.display()))),
        }
    }
}
