//! Configuration loading and validation
//!
//! Configuration is a YAML file with three sections. Every field has a
//! default, so an empty or missing file yields a working configuration.
//!
//! ```yaml
//! storage:
//!   path: /var/lib/savant/sessions.db
//! lookup:
//!   api_base: https://en.wikipedia.org
//!   timeout_seconds: 10
//! speech:
//!   enabled: true
//! ```

use crate::error::{Result, SavantError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Session store settings
    #[serde(default)]
    pub storage: StorageConfig,
    /// Encyclopedia lookup settings
    #[serde(default)]
    pub lookup: LookupConfig,
    /// Speech output settings
    #[serde(default)]
    pub speech: SpeechConfig,
}

/// Where session history is persisted
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Database path; the platform data directory when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Encyclopedia lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Base URL of the summary API
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Speech output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Whether assistant replies are spoken aloud
    #[serde(default = "default_speech_enabled")]
    pub enabled: bool,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: default_speech_enabled(),
        }
    }
}

fn default_api_base() -> String {
    crate::lookup::DEFAULT_API_BASE.to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_speech_enabled() -> bool {
    true
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, fails to parse, or
    /// fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field values
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.lookup.api_base.trim().is_empty() {
            return Err(SavantError::Config("lookup.api_base must not be empty".to_string()).into());
        }
        if !self.lookup.api_base.starts_with("http://")
            && !self.lookup.api_base.starts_with("https://")
        {
            return Err(SavantError::Config(format!(
                "lookup.api_base must be an http(s) URL, got '{}'",
                self.lookup.api_base
            ))
            .into());
        }
        if self.lookup.timeout_seconds == 0 {
            return Err(
                SavantError::Config("lookup.timeout_seconds must be positive".to_string()).into(),
            );
        }
        Ok(())
    }

    /// Lookup timeout as a [`Duration`]
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup.timeout_seconds)
    }
}
