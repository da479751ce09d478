//! Error types for switch configuration.

use thiserror::Error;

/// Error loading or validating a [`SwitchConfig`](crate::SwitchConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error (includes malformed hex colors)
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML parsing error (includes malformed hex colors)
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A field parsed but its value is unusable
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: &'static str,
        /// Error message
        message: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}
