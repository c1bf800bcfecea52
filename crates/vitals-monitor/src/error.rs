//! Error types for the Vitals Monitor
//!
//! A vital sign out of range is a normal evaluation outcome and is never
//! reported through these types. They cover configuration, parsing,
//! rendering and telemetry failures only.

use thiserror::Error;

/// Main error type for monitor operations
#[derive(Error, Debug)]
pub enum MonitorError {
    /// Invalid input data or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration file access or content error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration parsing error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization of output failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// An alert renderer failed to deliver a notification
    #[error("Alert error: {0}")]
    Alert(String),

    /// The background alert dispatcher is not accepting notifications
    #[error("Dispatch error: {0}")]
    Dispatch(String),

    /// Metrics registration or encoding failed
    #[error("Metrics error: {0}")]
    Metrics(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MonitorError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        MonitorError::InvalidInput(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        MonitorError::Config(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        MonitorError::Parse(msg.into())
    }

    /// Create an alert error
    pub fn alert(msg: impl Into<String>) -> Self {
        MonitorError::Alert(msg.into())
    }

    /// Check if this is a user-facing error (vs internal)
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            MonitorError::InvalidInput(_) | MonitorError::Config(_) | MonitorError::Parse(_)
        )
    }
}

impl From<serde_json::Error> for MonitorError {
    fn from(err: serde_json::Error) -> Self {
        MonitorError::Parse(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for MonitorError {
    fn from(err: serde_yaml::Error) -> Self {
        MonitorError::Parse(format!("YAML error: {}", err))
    }
}

impl From<toml::de::Error> for MonitorError {
    fn from(err: toml::de::Error) -> Self {
        MonitorError::Parse(format!("TOML error: {}", err))
    }
}

impl From<prometheus::Error> for MonitorError {
    fn from(err: prometheus::Error) -> Self {
        MonitorError::Metrics(err.to_string())
    }
}

/// Result type alias for monitor operations
pub type Result<T> = std::result::Result<T, MonitorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MonitorError::InvalidInput("pulse must be a number".to_string());
        assert_eq!(err.to_string(), "Invalid input: pulse must be a number");
    }

    #[test]
    fn test_is_user_error() {
        assert!(MonitorError::invalid_input("x").is_user_error());
        assert!(MonitorError::config("x").is_user_error());
        assert!(MonitorError::parse("x").is_user_error());
        assert!(!MonitorError::alert("x").is_user_error());
        assert!(!MonitorError::Internal("x".to_string()).is_user_error());
    }

    #[test]
    fn test_toml_error_maps_to_parse() {
        let bad: std::result::Result<toml::Value, _> = toml::from_str("language = ");
        let err: MonitorError = bad.unwrap_err().into();
        assert!(matches!(err, MonitorError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error: TOML error"));
    }
}
