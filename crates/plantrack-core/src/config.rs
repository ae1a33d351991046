//! User configuration
//!
//! Read from `~/.plantrack/config.toml`. Every field is optional; a missing
//! file yields the defaults.
//!
//! ```toml
//! theme = "nord"
//! log_level = "debug"
//! expanded = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;

/// Default theme name
pub const DEFAULT_THEME: &str = "plantrack";

/// Default log filter directive
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Config loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme used when rendering plan views
    pub theme: String,
    /// Log filter directive (overridden by `RUST_LOG`)
    pub log_level: String,
    /// Render the detailed plan view without truncation
    pub expanded: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            expanded: false,
        }
    }
}

impl Config {
    /// Load from the default config location
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&paths::config_file())
    }

    /// Load from a specific file, falling back to defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}
