//! User configuration for the termina front-end.
//!
//! Loaded from `~/.config/termina/config.toml` (platform equivalent via
//! `directories`). Every field is optional; a missing file means defaults.
//!
//! ```toml
//! username = "neo"
//! hostname = "nebuchadnezzar"
//! default_category = "files"
//! advance_delay_ms = 500
//! show_best_practices = false
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use termina_kernel::SessionOptions;

/// Settings read from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TerminaConfig {
    /// Shown in the prompt and used for the home directory.
    #[serde(default = "default_username")]
    pub username: String,

    #[serde(default = "default_hostname")]
    pub hostname: String,

    /// Category started by `!tutorial` and selected at startup.
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Pause between a completed challenge and the next one.
    #[serde(default = "default_advance_delay_ms")]
    pub advance_delay_ms: u64,

    #[serde(default = "default_show_best_practices")]
    pub show_best_practices: bool,
}

fn default_username() -> String {
    "user".to_string()
}

fn default_hostname() -> String {
    "terminal".to_string()
}

fn default_category() -> String {
    "default".to_string()
}

fn default_advance_delay_ms() -> u64 {
    1000
}

fn default_show_best_practices() -> bool {
    true
}

impl Default for TerminaConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            hostname: default_hostname(),
            default_category: default_category(),
            advance_delay_ms: default_advance_delay_ms(),
            show_best_practices: default_show_best_practices(),
        }
    }
}

impl TerminaConfig {
    /// Load from the default path, falling back to defaults if absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load from a specific path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// The username becomes `/home/<username>`, so it must be a single
    /// plain path segment.
    pub fn validate(&self) -> Result<()> {
        let name = self.username.as_str();
        if name.is_empty() || name == "." || name == ".." || name.contains('/') {
            anyhow::bail!("Invalid username {name:?}: must be a single path segment");
        }
        Ok(())
    }

    /// `<config dir>/termina/config.toml`.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "termina")
            .context("Could not determine config directory")?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn to_session_options(&self) -> SessionOptions {
        SessionOptions {
            username: self.username.clone(),
            hostname: self.hostname.clone(),
            default_category: self.default_category.clone(),
            advance_delay: Duration::from_millis(self.advance_delay_ms),
            show_best_practices: self.show_best_practices,
        }
    }
}
