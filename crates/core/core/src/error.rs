//! Error types for Auth0 parameter handling.
//!
//! Building parameters never fails; these errors come from the edges of the
//! crate: parsing typed values from strings and loading client configuration.

use thiserror::Error;

/// The main error type for parameter and configuration operations.
#[derive(Debug, Error)]
pub enum ParamsError {
    // ==================== Parsing Errors ====================
    /// The string is not a known passwordless delivery channel.
    #[error("Unknown passwordless type: {value}")]
    UnknownPasswordlessType { value: String },

    /// The string is not a known grant type identifier.
    #[error("Unknown grant type: {value}")]
    UnknownGrantType { value: String },

    /// A field value is invalid.
    #[error("Invalid field value for '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    // ==================== Configuration Errors ====================
    /// The configuration file could not be read.
    #[error("Failed to read configuration: {message}")]
    ConfigIo { message: String },

    /// The configuration file could not be parsed.
    #[error("Failed to parse configuration: {message}")]
    ConfigParse { message: String },

    /// A required configuration value is missing.
    #[error("Missing configuration: {key}")]
    MissingConfiguration { key: String },

    // ==================== Internal Errors ====================
    /// Serialization/deserialization failed.
    #[error("Serialization error: {message}")]
    SerializationError { message: String },
}

impl ParamsError {
    /// Creates a new unknown passwordless type error.
    pub fn unknown_passwordless_type(value: impl Into<String>) -> Self {
        Self::UnknownPasswordlessType {
            value: value.into(),
        }
    }

    /// Creates a new unknown grant type error.
    pub fn unknown_grant_type(value: impl Into<String>) -> Self {
        Self::UnknownGrantType {
            value: value.into(),
        }
    }

    /// Creates a new invalid field error.
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new missing configuration error.
    pub fn missing_config(key: impl Into<String>) -> Self {
        Self::MissingConfiguration { key: key.into() }
    }

    /// Returns true if the error was caused by loading configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigIo { .. } | Self::ConfigParse { .. } | Self::MissingConfiguration { .. }
        )
    }
}

/// A Result type alias using ParamsError.
pub type ParamsResult<T> = Result<T, ParamsError>;

impl From<std::io::Error> for ParamsError {
    fn from(err: std::io::Error) -> Self {
        Self::ConfigIo {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ParamsError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigParse {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ParamsError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            message: err.to_string(),
        }
    }
}
