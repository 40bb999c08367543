//! Construction options and the adapter builder

use std::fmt;
use std::sync::Arc;

use super::classifier::{ClassificationLevels, Classifier};
use super::error::AdapterResult;
use super::logger::Adapter;
use crate::logging::SharedSink;
use crate::types::{Classification, Verbosity};

type ApplyFn = Box<dyn FnOnce(&mut Adapter) -> AdapterResult<()> + Send>;

/// A named configuration step applied to an adapter under construction
///
/// Options run in order against a default adapter. Any option may fail, in
/// which case construction stops and the error is returned.
pub struct AdapterOption {
    name: String,
    apply: ApplyFn,
}

impl AdapterOption {
    /// Create an option from a name and a fallible mutation
    pub fn new<F>(name: impl Into<String>, apply: F) -> Self
    where
        F: FnOnce(&mut Adapter) -> AdapterResult<()> + Send + 'static,
    {
        Self {
            name: name.into(),
            apply: Box::new(apply),
        }
    }

    /// Create an option that inspects the adapter and may reject it
    pub fn custom<F>(apply: F) -> Self
    where
        F: FnOnce(&mut Adapter) -> AdapterResult<()> + Send + 'static,
    {
        Self::new("custom", apply)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn apply(self, adapter: &mut Adapter) -> AdapterResult<()> {
        (self.apply)(adapter)
    }
}

impl fmt::Debug for AdapterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterOption")
            .field("name", &self.name)
            .finish()
    }
}

/// Set the attribute key the ambient context is logged under
///
/// An empty key suppresses the context attribute entirely.
pub fn with_context_key(key: impl Into<String>) -> AdapterOption {
    let key = key.into();
    AdapterOption::new("context_key", move |adapter| {
        adapter.context_key = key;
        Ok(())
    })
}

/// Replace the classification to verbosity mapping
///
/// The function must return a verbosity for every classification,
/// including ones it does not recognise.
pub fn with_classification_level<F>(f: F) -> AdapterOption
where
    F: Fn(&Classification) -> Verbosity + Send + Sync + 'static,
{
    with_classifier(Arc::new(f))
}

/// Replace the mapping with an already shared [`Classifier`]
pub fn with_classifier(classifier: Classifier) -> AdapterOption {
    AdapterOption::new("classification_level", move |adapter| {
        adapter.classify = classifier;
        Ok(())
    })
}

/// Replace the mapping with a classification table
pub fn with_classification_levels(levels: ClassificationLevels) -> AdapterOption {
    with_classifier(levels.into_classifier())
}

/// Chained construction API over [`AdapterOption`]s
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use logbridge_core::adapter::Adapter;
/// use logbridge_core::logging::BufferSink;
///
/// let sink = Arc::new(BufferSink::new());
/// let adapter = Adapter::builder(sink)
///     .with_context_key("ctx")
///     .build()
///     .unwrap();
/// assert_eq!(adapter.context_key(), "ctx");
/// ```
pub struct AdapterBuilder {
    sink: SharedSink,
    options: Vec<AdapterOption>,
}

impl AdapterBuilder {
    pub(crate) fn new(sink: SharedSink) -> Self {
        Self {
            sink,
            options: Vec::new(),
        }
    }

    /// Set the context attribute key
    pub fn with_context_key(self, key: impl Into<String>) -> Self {
        self.with_option(with_context_key(key))
    }

    /// Set the classification mapping
    pub fn with_classification_level<F>(self, f: F) -> Self
    where
        F: Fn(&Classification) -> Verbosity + Send + Sync + 'static,
    {
        self.with_option(with_classification_level(f))
    }

    /// Set the classification mapping from a table
    pub fn with_classification_levels(self, levels: ClassificationLevels) -> Self {
        self.with_option(with_classification_levels(levels))
    }

    /// Append any option, including third-party ones
    pub fn with_option(mut self, option: AdapterOption) -> Self {
        self.options.push(option);
        self
    }

    /// Append several options, keeping their order
    pub fn with_options(mut self, options: impl IntoIterator<Item = AdapterOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// Apply the collected options in order
    pub fn build(self) -> AdapterResult<Adapter> {
        Adapter::new(self.sink, self.options)
    }
}

impl fmt::Debug for AdapterBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterBuilder")
            .field("options", &self.options)
            .finish()
    }
}
