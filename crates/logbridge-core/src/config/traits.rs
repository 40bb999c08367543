//! Settings source trait

use std::path::PathBuf;

use super::settings::AdapterSettings;

/// Where adapter settings come from
///
/// Implementations:
/// - `FileSettings`: YAML file
pub trait SettingsSource: Send + Sync {
    /// Load the current settings
    fn load(&self) -> ConfigResult<AdapterSettings>;
}

/// Errors that can occur while loading settings
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Settings file not found: {0}")]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
