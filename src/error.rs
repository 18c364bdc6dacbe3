//! Error types for Savant
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Savant operations
///
/// This enum encompasses all possible errors that can occur during
/// session management, configuration loading, encyclopedia lookups,
/// and speech device handling.
#[derive(Error, Debug)]
pub enum SavantError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session store and persistence errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Encyclopedia lookup errors (network, parse)
    #[error("Lookup error: {0}")]
    Lookup(String),

    /// Speech device errors
    #[error("Speech error: {0}")]
    Speech(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Savant operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = SavantError::Config("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_storage_error_display() {
        let error = SavantError::Storage("database unavailable".to_string());
        assert_eq!(error.to_string(), "Storage error: database unavailable");
    }

    #[test]
    fn test_lookup_error_display() {
        let error = SavantError::Lookup("request timed out".to_string());
        assert_eq!(error.to_string(), "Lookup error: request timed out");
    }

    #[test]
    fn test_speech_error_display() {
        let error = SavantError::Speech("no device".to_string());
        assert_eq!(error.to_string(), "Speech error: no device");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: SavantError = io_error.into();
        assert!(matches!(error, SavantError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_str = "{invalid json}";
        let json_error = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let error: SavantError = json_error.into();
        assert!(matches!(error, SavantError::Serialization(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_str = "invalid: : yaml";
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let error: SavantError = yaml_error.into();
        assert!(matches!(error, SavantError::Yaml(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SavantError>();
    }
}
