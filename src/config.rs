//! Configuration file handling for render options.
//!
//! This module provides loading and parsing of `.command_as_sql.json` configuration files.
//! A missing file is not an error during discovery: defaults apply.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::literal::TabularStrings;
use crate::reconstruct::RenderOptions;

/// Name of the configuration file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = ".command_as_sql.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    InvalidJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level configuration file structure.
///
/// ```json
/// {
///   "render": {
///     "use_database": true,
///     "tabular_strings": "escaped"
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub render: RenderConfig,
}

/// Render options as written in the configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Emit `use <database>;` when the command names its database
    #[serde(default = "default_use_database")]
    pub use_database: bool,
    /// `escaped` (default) or `verbatim`
    #[serde(default)]
    pub tabular_strings: TabularStrings,
}

fn default_use_database() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            use_database: default_use_database(),
            tabular_strings: TabularStrings::default(),
        }
    }
}

impl ConfigFile {
    /// Load configuration from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the JSON is invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: ConfigFile =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidJson {
                path: path.display().to_string(),
                source: e,
            })?;

        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load `.command_as_sql.json` from `dir`, or defaults if it doesn't exist.
    pub fn discover_in(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            debug!(path = %config_path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&config_path)
    }

    /// Load `.command_as_sql.json` from the current directory, or defaults.
    pub fn discover() -> Result<Self, ConfigError> {
        Self::discover_in(&PathBuf::from("."))
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            use_database: self.render.use_database,
            tabular_strings: self.render.tabular_strings,
        }
    }
}
