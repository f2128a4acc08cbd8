// src/config/app.rs
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use super::defaults::*;
use crate::consts::DEFAULT_CONFIG_PATH;
use crate::core::generator::LengthPolicy;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_generator")]
    pub generator: GeneratorSettings,
    #[serde(default = "default_tokens")]
    pub tokens: TokenSettings,
    #[serde(default = "default_logging")]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorSettings {
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenSettings {
    /// Reject tokens older than this; unset means no expiry
    #[serde(default)]
    pub ttl_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSettings {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generator: default_generator(),
            tokens: default_tokens(),
            logging: default_logging(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.length_policy()?;
        Ok(config)
    }

    /// Validated generator bounds
    pub fn length_policy(&self) -> Result<LengthPolicy> {
        LengthPolicy::new(self.generator.min_length, self.generator.max_length)
    }

    pub fn token_ttl(&self) -> Option<Duration> {
        self.tokens.ttl_secs.map(Duration::from_secs)
    }
}

/// Load the file named by `EPV_CONFIG` (or the default path)
///
/// A missing file is not an error: built-in defaults are used instead.
pub fn load() -> Result<Config> {
    let config_path =
        std::env::var("EPV_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_from(config_path)
}

pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    if !path.exists() {
        #[cfg(feature = "logging")]
        tracing::warn!("{} not found, using built-in defaults", path.display());
        return Ok(Config::default());
    }
    let content = std::fs::read_to_string(path)?;
    Config::from_toml_str(&content)
}
