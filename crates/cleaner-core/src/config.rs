//! Configuration structures for the cleaners and their front ends.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::NormResult;
use crate::types::CleanerKind;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleanerConfig {
    /// Pipeline used when the caller does not name one.
    #[serde(default)]
    pub cleaner: CleanerKind,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CleanerConfig {
    /// Load configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> NormResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json_str(json: &str) -> NormResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format (json or text).
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
