//! Error types for advisor-core
//!
//! Rule evaluation itself is total; errors only arise at the boundaries
//! where features or configuration are parsed.

use thiserror::Error;

/// Result type alias for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Main error type for advisor operations
#[derive(Error, Debug)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error), uniffi(flat_error))]
pub enum AdvisorError {
    /// Feature input errors
    #[error("Feature error: {0}")]
    Feature(#[from] FeatureError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while turning raw input into [`crate::StudentFeatures`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeatureError {
    /// Document is not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(String),

    /// Document is valid JSON but not an object
    #[error("Feature document must be a JSON object")]
    NotAnObject,

    /// A recognized key holds a value of the wrong type
    #[error("Feature `{key}` must be {expected}")]
    WrongType { key: String, expected: &'static str },
}

/// Configuration loading and validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config text could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Config could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for FeatureError {
    fn from(err: serde_json::Error) -> Self {
        FeatureError::Json(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err.to_string())
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}
