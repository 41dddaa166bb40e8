//! Adapter configuration via `bsonbridge.toml`
//!
//! Selects which adapters [`Registry::from_config`](crate::Registry::from_config)
//! registers. Every key is optional; an empty file enables everything.

use bsonbridge_core::{CodecError, CodecResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Conventional config file name.
pub const CONFIG_FILE_NAME: &str = "bsonbridge.toml";

/// Which adapters to register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Register the time decoder for `chrono::DateTime<Utc>`.
    #[serde(default = "default_enabled")]
    pub time: bool,
    /// Register the decimal decoder and encoder for `bigdecimal::BigDecimal`.
    #[serde(default = "default_enabled")]
    pub decimal: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            time: default_enabled(),
            decimal: default_enabled(),
        }
    }
}

/// Configuration loaded from `bsonbridge.toml`.
///
/// # Example
///
/// ```toml
/// [adapters]
/// time = true
/// decimal = false
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Adapter selection.
    #[serde(default)]
    pub adapters: AdapterConfig,
}

impl CodecConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# bsonbridge adapter configuration

[adapters]
# Decode BSON date-times into chrono::DateTime<Utc> (default: true)
time = true
# Decode and encode BSON Decimal128 as bigdecimal::BigDecimal (default: true)
decimal = true
"#
    }

    /// Parse config from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Config` if the string is not valid config TOML.
    pub fn from_toml_str(content: &str) -> CodecResult<Self> {
        toml::from_str(content)
            .map_err(|e| CodecError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Config` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> CodecResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CodecError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        toml::from_str(&content).map_err(|e| {
            CodecError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Serialize this config to TOML.
    pub fn to_toml_string(&self) -> CodecResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CodecError::Config(format!("Failed to serialize config: {}", e)))
    }
}
