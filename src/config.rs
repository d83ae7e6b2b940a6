//! Configuration file handling.
//!
//! The config file only carries CLI-surface preferences (default output
//! format, filler removal). The pipeline itself takes every option by
//! value per invocation and never reads global state.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::defaults;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub merge: MergeConfig,
}

/// Output rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default format: plain, markdown, json, srt, vtt.
    pub format: String,
}

/// Merge pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MergeConfig {
    /// Drop unambiguous filler words before grouping.
    pub remove_fillers: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: defaults::DEFAULT_FORMAT.to_string(),
        }
    }
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            remove_fillers: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    ///
    /// Only returns defaults if the file is missing.
    /// Returns errors for invalid TOML.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                if e.downcast_ref::<std::io::Error>()
                    .map(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
                    .unwrap_or(false)
                {
                    Self::default()
                } else {
                    panic!("Failed to load config from {}: {}", path.display(), e);
                }
            }
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - TURNSCRIBE_FORMAT → output.format
    /// - TURNSCRIBE_REMOVE_FILLERS → merge.remove_fillers ("1"/"true")
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(format) = std::env::var("TURNSCRIBE_FORMAT")
            && !format.is_empty()
        {
            self.output.format = format;
        }

        if let Ok(flag) = std::env::var("TURNSCRIBE_REMOVE_FILLERS")
            && !flag.is_empty()
        {
            self.merge.remove_fillers = flag == "1" || flag.eq_ignore_ascii_case("true");
        }

        self
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/turnscribe/config.toml on Linux
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .expect("Could not determine config directory")
            .join("turnscribe")
            .join("config.toml")
    }
}
