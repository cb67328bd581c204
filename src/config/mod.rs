//! Configuration system for pathquill.
//!
//! This module provides the configuration structure with sensible defaults
//! and support for serialization/deserialization via serde. Configuration is
//! loaded from a TOML file and merged with command-line arguments, which take
//! precedence.
//!
//! # Example
//!
//! ```
//! use pathquill::config::Config;
//! use pathquill::file::output::OutputFormat;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert!(!config.strict_reserved);
//! assert_eq!(config.max_depth, 512);
//!
//! // Create custom configuration
//! let custom = Config {
//!     output_format: OutputFormat::Json,
//!     indent_size: 4,
//!     ..Config::default()
//! };
//! ```

use crate::file::output::OutputFormat;
use crate::tree::DEFAULT_MAX_DEPTH;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Configuration for the pathquill command.
///
/// # Fields
///
/// * `strict_reserved` - Reject reserved segment names instead of neutralizing them (default: false)
/// * `max_depth` - Nesting limit when listing paths (default: 512)
/// * `output_format` - "yaml" or "json" (default: "yaml")
/// * `indent_size` - Spaces per indentation level for JSON output (default: 2)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Reject reserved segment names instead of neutralizing them
    #[serde(default)]
    pub strict_reserved: bool,

    /// Nesting limit when listing paths
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Output format for printed values
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Number of spaces per indentation level
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_indent_size() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_reserved: false,
            max_depth: default_max_depth(),
            output_format: OutputFormat::default(),
            indent_size: default_indent_size(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/pathquill/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("pathquill");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from a specific file, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                warn!(path = %path.display(), %err, "invalid config file, using defaults");
                Self::default()
            }),
            Err(err) => {
                warn!(path = %path.display(), %err, "failed to read config file, using defaults");
                Self::default()
            }
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to a specific file.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let toml_string = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, toml_string)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        debug!(path = %path.display(), "saved config");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("strict_reserved = true").unwrap();
        assert!(config.strict_reserved);
        assert_eq!(config.max_depth, 512);
        assert_eq!(config.output_format, OutputFormat::Yaml);
    }

    #[test]
    fn test_output_format_lowercase() {
        let config: Config = toml::from_str("output_format = \"json\"").unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
    }
}
