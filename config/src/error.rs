//! # Config Errors
//!
//! Errors raised while validating settings, before any generator sees them.

use thiserror::Error;

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A property key that no generator understands.
    #[error("unknown property '{0}'")]
    UnknownProperty(String),

    /// A boolean property whose value could not be parsed.
    #[error("property '{key}' expects a boolean, got '{value}'")]
    InvalidBool {
        /// Property key
        key: String,
        /// Raw value as supplied
        value: String,
    },

    /// A scale that is zero, negative or not finite.
    #[error("{name} scale must be positive and finite: {value}")]
    InvalidScale {
        /// Which scale was rejected (length, time, ...)
        name: &'static str,
        /// Rejected value
        value: f64,
    },
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
