//! Classification to verbosity mapping

use std::collections::BTreeMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::types::{Classification, Verbosity};

/// Total function from classification to verbosity
pub type Classifier = Arc<dyn Fn(&Classification) -> Verbosity + Send + Sync>;

static DEFAULT_CLASSIFIER: Lazy<Classifier> = Lazy::new(|| {
    Arc::new(|classification: &Classification| {
        if classification.is_debug() {
            Verbosity::DEBUG
        } else {
            Verbosity::INFO
        }
    })
});

/// The mapping used when none is configured: `Debug` is verbosity 1,
/// every other classification is verbosity 0
pub fn default_classifier() -> Classifier {
    Arc::clone(&DEFAULT_CLASSIFIER)
}

/// Finite classification table with an explicit fallback
///
/// Every classification missing from `levels` maps to `fallback`, so the
/// table is always total.
///
/// # Example
///
/// ```
/// use logbridge_core::adapter::ClassificationLevels;
/// use logbridge_core::types::{Classification, Verbosity};
///
/// let levels = ClassificationLevels::new(Verbosity::INFO)
///     .with_level(Classification::Debug, Verbosity(2))
///     .with_level("retry", Verbosity(3));
///
/// assert_eq!(levels.get(&Classification::parse("retry")), Verbosity(3));
/// assert_eq!(levels.get(&Classification::Warn), Verbosity::INFO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationLevels {
    #[serde(default)]
    pub levels: BTreeMap<Classification, Verbosity>,
    #[serde(default)]
    pub fallback: Verbosity,
}

impl Default for ClassificationLevels {
    fn default() -> Self {
        Self::new(Verbosity::INFO).with_level(Classification::Debug, Verbosity::DEBUG)
    }
}

impl ClassificationLevels {
    /// Create an empty table where everything maps to `fallback`
    pub fn new(fallback: Verbosity) -> Self {
        Self {
            levels: BTreeMap::new(),
            fallback,
        }
    }

    /// Map a classification to a verbosity
    pub fn with_level(mut self, classification: impl Into<Classification>, verbosity: Verbosity) -> Self {
        self.levels.insert(classification.into(), verbosity);
        self
    }

    /// Look up a classification, falling back when it is not listed
    pub fn get(&self, classification: &Classification) -> Verbosity {
        self.levels.get(classification).copied().unwrap_or(self.fallback)
    }

    /// Turn the table into a [`Classifier`]
    pub fn into_classifier(self) -> Classifier {
        Arc::new(move |classification: &Classification| self.get(classification))
    }
}

impl From<ClassificationLevels> for Classifier {
    fn from(levels: ClassificationLevels) -> Self {
        levels.into_classifier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classifier() {
        let classify = default_classifier();
        assert_eq!(classify(&Classification::Debug), Verbosity::DEBUG);
        assert_eq!(classify(&Classification::Warn), Verbosity::INFO);
        assert_eq!(classify(&Classification::parse("request")), Verbosity::INFO);
    }

    #[test]
    fn test_default_levels_match_default_classifier() {
        let classify = default_classifier();
        let table = ClassificationLevels::default().into_classifier();

        for tag in ["debug", "warn", "retry", "response", ""] {
            let c = Classification::parse(tag);
            assert_eq!(table(&c), classify(&c), "mismatch for {:?}", tag);
        }
    }

    #[test]
    fn test_levels_fallback() {
        let levels = ClassificationLevels::new(Verbosity(4));
        assert_eq!(levels.get(&Classification::Debug), Verbosity(4));
        assert_eq!(levels.get(&Classification::parse("anything")), Verbosity(4));
    }

    #[test]
    fn test_levels_deserialize() {
        let levels: ClassificationLevels =
            serde_json::from_str(r#"{"levels": {"debug": 2, "retry": 3}, "fallback": 1}"#).unwrap();
        assert_eq!(levels.get(&Classification::Debug), Verbosity(2));
        assert_eq!(levels.get(&Classification::parse("retry")), Verbosity(3));
        assert_eq!(levels.get(&Classification::Warn), Verbosity(1));
    }
}
