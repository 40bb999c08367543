//! Serializable adapter settings

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::file::FileSettings;
use super::traits::{ConfigResult, SettingsSource};
use crate::adapter::{
    with_classification_levels, with_context_key, Adapter, AdapterOption, AdapterResult,
    ClassificationLevels, DEFAULT_CONTEXT_KEY,
};
use crate::logging::SharedSink;
use crate::types::{Classification, Verbosity};

fn default_context_key() -> String {
    DEFAULT_CONTEXT_KEY.to_string()
}

fn default_levels() -> BTreeMap<Classification, Verbosity> {
    ClassificationLevels::default().levels
}

/// Adapter settings as written in a YAML file
///
/// ```yaml
/// context_key: ctx
/// default_level: 0
/// levels:
///   debug: 1
///   retry: 2
/// ```
///
/// Omitted fields keep the adapter defaults. When `levels` is given it
/// replaces the default table entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterSettings {
    /// Attribute key for the ambient context; empty disables it
    #[serde(default = "default_context_key")]
    pub context_key: String,

    /// Verbosity for classifications not listed in `levels`
    #[serde(default)]
    pub default_level: Verbosity,

    /// Classification to verbosity table
    #[serde(default = "default_levels")]
    pub levels: BTreeMap<Classification, Verbosity>,
}

impl Default for AdapterSettings {
    fn default() -> Self {
        Self {
            context_key: default_context_key(),
            default_level: Verbosity::INFO,
            levels: default_levels(),
        }
    }
}

impl AdapterSettings {
    /// Parse settings from a YAML document
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read settings from a YAML file
    ///
    /// A missing file is [`ConfigError::NotFound`](super::ConfigError::NotFound).
    pub fn from_file(path: impl Into<PathBuf>) -> ConfigResult<Self> {
        FileSettings::new(path).load()
    }

    /// Serialize settings to YAML
    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Set the context key
    pub fn with_context_key(mut self, key: impl Into<String>) -> Self {
        self.context_key = key.into();
        self
    }

    /// Map a classification to a verbosity
    pub fn with_level(mut self, classification: impl Into<Classification>, verbosity: Verbosity) -> Self {
        self.levels.insert(classification.into(), verbosity);
        self
    }

    /// The classification table these settings describe
    pub fn classification_levels(&self) -> ClassificationLevels {
        ClassificationLevels {
            levels: self.levels.clone(),
            fallback: self.default_level,
        }
    }

    /// Options equivalent to these settings, in application order
    pub fn into_options(self) -> Vec<AdapterOption> {
        let levels = self.classification_levels();
        vec![
            with_context_key(self.context_key),
            with_classification_levels(levels),
        ]
    }

    /// Build an adapter over `sink` with these settings
    pub fn build(self, sink: SharedSink) -> AdapterResult<Adapter> {
        Adapter::new(sink, self.into_options())
    }

    /// Read settings from a YAML file and build an adapter over `sink`
    pub fn build_from_file(path: impl Into<PathBuf>, sink: SharedSink) -> AdapterResult<Adapter> {
        Self::from_file(path)?.build(sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Arc;

    use tempfile::tempdir;

    use crate::adapter::AdapterError;
    use crate::config::ConfigError;
    use crate::logging::BufferSink;

    #[test]
    fn test_empty_document_keeps_defaults() {
        let settings = AdapterSettings::from_yaml_str("{}").unwrap();
        assert_eq!(settings, AdapterSettings::default());
        assert_eq!(settings.context_key, "context");
        assert_eq!(settings.levels.get(&Classification::Debug), Some(&Verbosity::DEBUG));
    }

    #[test]
    fn test_parse_full_document() {
        let yaml = r#"
context_key: ctx
default_level: 1
levels:
  debug: 2
  Retry: 3
"#;
        let settings = AdapterSettings::from_yaml_str(yaml).unwrap();
        assert_eq!(settings.context_key, "ctx");

        let levels = settings.classification_levels();
        assert_eq!(levels.get(&Classification::Debug), Verbosity(2));
        assert_eq!(levels.get(&Classification::parse("Retry")), Verbosity(3));
        assert_eq!(levels.get(&Classification::parse("retry")), Verbosity(1));
        assert_eq!(levels.get(&Classification::Warn), Verbosity(1));
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(AdapterSettings::from_yaml_str("levels: [1, 2").is_err());
        assert!(AdapterSettings::from_yaml_str("default_level: -1").is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let settings = AdapterSettings::default()
            .with_context_key("")
            .with_level("retry", Verbosity(4));
        let yaml = settings.to_yaml().unwrap();
        assert_eq!(AdapterSettings::from_yaml_str(&yaml).unwrap(), settings);
    }

    #[test]
    fn test_build_adapter() {
        let sink = Arc::new(BufferSink::with_max_verbosity(2));
        let adapter = AdapterSettings::default()
            .with_context_key("ctx")
            .with_level("retry", Verbosity(2))
            .build(sink.clone())
            .unwrap();

        assert_eq!(adapter.context_key(), "ctx");
        crate::logf!(adapter.with_context("r1"), Classification::parse("retry"), "attempt {}", 2);
        assert_eq!(sink.lines(), vec!["V[2] attempt 2 ctx r1".to_string()]);
    }

    #[test]
    fn test_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logging.yaml");
        fs::write(&path, "context_key: request
default_level: 2
").unwrap();

        let settings = AdapterSettings::from_file(&path).unwrap();
        assert_eq!(settings.context_key, "request");
        assert_eq!(settings.default_level, Verbosity(2));

        let missing = AdapterSettings::from_file(dir.path().join("missing.yaml"));
        assert!(matches!(missing, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_build_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logging.yaml");
        fs::write(&path, "context_key: ctx
levels:
  debug: 1
").unwrap();

        let sink = Arc::new(BufferSink::with_max_verbosity(1));
        let adapter = AdapterSettings::build_from_file(&path, sink.clone())
            .unwrap()
            .with_context("r2");
        crate::logf!(adapter, Classification::Debug, "loaded");
        assert_eq!(sink.lines(), vec!["V[1] loaded ctx r2".to_string()]);
    }

    #[test]
    fn test_build_from_missing_file_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.yaml");

        let result = AdapterSettings::build_from_file(&path, Arc::new(BufferSink::new()));
        match result {
            Err(AdapterError::Config(ConfigError::NotFound(missing))) => assert_eq!(missing, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_build_from_malformed_file_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logging.yaml");
        fs::write(&path, "levels: [1, 2").unwrap();

        let result = AdapterSettings::build_from_file(&path, Arc::new(BufferSink::new()));
        assert!(matches!(result, Err(AdapterError::Config(ConfigError::Parse(_)))));
    }
}
