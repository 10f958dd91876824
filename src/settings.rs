//! Persistent user settings.

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Context, Result};
use filebatch_core::EngineConfig;
use serde::{Deserialize, Serialize};

/// Settings read from `settings.toml`. Missing fields fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Move deleted items to the system trash.
    pub use_trash: bool,
    /// List entries starting with a dot.
    pub show_hidden: bool,
    /// Color error output.
    pub color: bool,
    /// Batch engine options.
    pub engine: EngineConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            use_trash: false,
            show_hidden: true,
            color: true,
            engine: EngineConfig::default(),
        }
    }
}

impl Settings {
    /// Get the config file path.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("filebatch").join("settings.toml"))
    }

    /// Load settings from the config directory, or return defaults.
    pub fn load() -> Self {
        let Some(path) = Self::config_path().filter(|p| p.exists()) else {
            return Self::default();
        };
        Self::load_from(&path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring settings file: {e:#}");
            Self::default()
        })
    }

    /// Load settings from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content)?;
        if settings.engine.max_path_len == 0 {
            color_eyre::eyre::bail!("engine.max_path_len must be greater than zero");
        }
        Ok(settings)
    }
}
