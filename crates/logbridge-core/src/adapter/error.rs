//! Adapter error types

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while building an adapter
///
/// Logging itself never fails; only construction can.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// An option rejected its input
    #[error("invalid {option} option: {message}")]
    InvalidOption { option: String, message: String },

    /// Settings could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AdapterError {
    /// Create an invalid option error
    pub fn invalid_option(option: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            message: message.into(),
        }
    }
}

pub type AdapterResult<T> = Result<T, AdapterError>;
