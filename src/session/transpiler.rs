//! Transpiler — wraps a rendered session with optional header/footer text.
//!
//! The wrapper text can come from an optional YAML file under
//! `~/.tidalscript/transpiler.yaml`, so a user can keep a standard preamble
//! (imports, comments) without threading it through every call site.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::session::TidalSession;
use crate::value::ToTidal;

/// Header/footer configuration for transpiled output.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TranspilerConfig {
    /// Text emitted before the session, e.g. a `-- generated` comment.
    #[serde(default)]
    pub header: Option<String>,
    /// Text emitted after the session.
    #[serde(default)]
    pub footer: Option<String>,
}

/// Default path for the user transpiler config.
pub fn default_config_path() -> PathBuf {
    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(".tidalscript");
    path.push("transpiler.yaml");
    path
}

impl TranspilerConfig {
    /// Load configuration from a YAML file. Returns the default (no header,
    /// no footer) if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, io::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Load configuration from the default user path
    /// (`~/.tidalscript/transpiler.yaml`).
    pub fn load_default() -> Result<Self, io::Error> {
        Self::load(&default_config_path())
    }

    /// Save configuration to a YAML file, creating parent directories as
    /// needed.
    pub fn save(&self, path: &Path) -> Result<(), io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(io::Error::other)?;
        std::fs::write(path, yaml)
    }
}

/// Renders a session to its final script text, applying the configured
/// header and footer.
#[derive(Debug, Clone, Default)]
pub struct TidalTranspiler {
    config: TranspilerConfig,
}

impl TidalTranspiler {
    /// Transpiler with no header or footer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transpiler with the given configuration.
    pub fn with_config(config: TranspilerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &TranspilerConfig {
        &self.config
    }

    /// Render the session, wrapped in the configured header/footer.
    pub fn transpile(&self, session: &TidalSession) -> String {
        let mut parts = Vec::new();
        if let Some(header) = &self.config.header {
            parts.push(header.clone());
        }
        parts.push(session.to_tidal());
        if let Some(footer) = &self.config.footer {
            parts.push(footer.clone());
        }
        parts.join("\n")
    }
}
