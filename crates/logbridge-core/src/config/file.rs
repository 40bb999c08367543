//! File-based settings source (YAML)

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::settings::AdapterSettings;
use super::traits::{ConfigError, ConfigResult, SettingsSource};

/// Settings read from a YAML file
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use logbridge_core::config::{FileSettings, SettingsSource};
/// use logbridge_core::logging::TracingSink;
///
/// let settings = FileSettings::new("/etc/myapp/sdk-logging.yaml").load()?;
/// let adapter = settings.build(Arc::new(TracingSink::new()))?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileSettings {
    path: PathBuf,
}

impl FileSettings {
    /// Create a settings source for a specific path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the settings file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the settings file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write settings to the file, creating parent directories
    pub fn save(&self, settings: &AdapterSettings) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, settings.to_yaml()?)?;
        Ok(())
    }
}

impl SettingsSource for FileSettings {
    fn load(&self) -> ConfigResult<AdapterSettings> {
        if !self.exists() {
            return Err(ConfigError::NotFound(self.path.clone()));
        }

        debug!(path = %self.path.display(), "loading adapter settings");
        let content = fs::read_to_string(&self.path)?;
        AdapterSettings::from_yaml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Classification, Verbosity};
    use tempfile::tempdir;

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let source = FileSettings::new(dir.path().join("missing.yaml"));

        assert!(!source.exists());
        assert!(matches!(source.load(), Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_yaml_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logging.yaml");
        fs::write(&path, "context_key: request\nlevels:\n  debug: 3\n").unwrap();

        let settings = FileSettings::new(&path).load().unwrap();
        assert_eq!(settings.context_key, "request");
        assert_eq!(settings.classification_levels().get(&Classification::Debug), Verbosity(3));
    }

    #[test]
    fn test_invalid_yaml_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logging.yaml");
        fs::write(&path, "context_key: [unterminated").unwrap();

        assert!(matches!(FileSettings::new(&path).load(), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let source = FileSettings::new(dir.path().join("nested").join("logging.yaml"));
        let settings = AdapterSettings::default().with_level("retry", Verbosity(2));

        source.save(&settings).unwrap();
        assert!(source.exists());
        assert_eq!(source.load().unwrap(), settings);
    }
}
