//! Application configuration
//!
//! Loaded from `.parse-diff.toml`, see [`crate::config_file`] for the lookup order.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or validating a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("line_ending must not be empty")]
    EmptyLineEnding,

    #[error("Ignoring config file {}: {source}", .path.display())]
    Ignored {
        path: PathBuf,
        source: Box<ConfigError>,
    },
}

/// How the CLI prints parsed diffs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One summary line per file plus totals.
    #[default]
    Text,
    /// The parsed model as JSON.
    Json,
}

/// Application configuration loaded from .parse-diff.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Delimiter used to split the input into lines.
    /// Accepts `lf`, `crlf`, `cr` or a literal string.
    #[serde(default = "default_line_ending")]
    pub line_ending: String,

    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format of the summary
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_line_ending() -> String {
    "\n".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            line_ending: default_line_ending(),
            log_level: default_log_level(),
            output: OutputFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load config from the first config file found, or use defaults
    ///
    /// An invalid file does not abort: defaults are used and the error is
    /// handed back so the caller can report it once logging is set up.
    pub fn load() -> (Self, Option<ConfigError>) {
        Self::load_from(&crate::config_file_candidates())
    }

    /// Same as [`AppConfig::load`] over an explicit list of candidates.
    pub fn load_from(candidates: &[PathBuf]) -> (Self, Option<ConfigError>) {
        let Some((path, content)) = crate::load_first_config(candidates) else {
            return (Self::default(), None);
        };

        match Self::from_toml_str(&content) {
            Ok(config) => (config, None),
            Err(e) => (
                Self::default(),
                Some(ConfigError::Ignored {
                    path,
                    source: Box::new(e),
                }),
            ),
        }
    }

    /// Read and validate a specific config file.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|source| ConfigError::Read { path, source })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate TOML config content.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.line_ending = resolve_line_ending(&config.line_ending);

        if config.line_ending.is_empty() {
            return Err(ConfigError::EmptyLineEnding);
        }

        Ok(config)
    }
}

/// Map the names `lf`, `crlf` and `cr` (any case) to their delimiters;
/// anything else is used literally.
pub fn resolve_line_ending(value: &str) -> String {
    match value.to_ascii_lowercase().as_str() {
        "lf" => "\n".to_string(),
        "crlf" => "\r\n".to_string(),
        "cr" => "\r".to_string(),
        _ => value.to_string(),
    }
}
