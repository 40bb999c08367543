//! The SDK logging adapter

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::classifier::{default_classifier, Classifier};
use super::error::AdapterResult;
use super::options::{AdapterBuilder, AdapterOption};
use crate::logging::{Attribute, SharedSink};
use crate::sdk::{ClassifiedLogger, ContextLogger};
use crate::types::{Classification, ContextValue, SharedContext, Verbosity};

/// Attribute key used for the ambient context unless configured otherwise
pub const DEFAULT_CONTEXT_KEY: &str = "context";

/// Adapter from the SDK's classification-based logging contract to a
/// leveled sink
///
/// Each call resolves a verbosity from the classification, checks whether
/// the sink has that verbosity enabled and only then renders the message.
/// If a context is attached and the context key is non-empty, the context
/// is emitted as a single attribute under that key.
///
/// The adapter is immutable once built. [`Adapter::with_context`] returns
/// a new adapter sharing the sink and the classifier, so clones can be
/// handed to concurrent callers freely.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use logbridge_core::adapter::Adapter;
/// use logbridge_core::logging::BufferSink;
/// use logbridge_core::types::{Classification, RequestContext};
///
/// let sink = Arc::new(BufferSink::with_max_verbosity(1));
/// let adapter = Adapter::builder(sink.clone())
///     .with_context_key("ctx")
///     .build()
///     .unwrap()
///     .with_context(RequestContext::new());
///
/// adapter.logf(Classification::Debug, format_args!("{}", "some debug"));
/// assert_eq!(sink.lines(), vec!["V[1] some debug ctx background".to_string()]);
/// ```
#[derive(Clone)]
pub struct Adapter {
    sink: SharedSink,
    pub(crate) classify: Classifier,
    context: Option<SharedContext>,
    pub(crate) context_key: String,
}

impl Adapter {
    /// Create an adapter over `sink`, applying `options` in order
    ///
    /// Defaults: context key `"context"`, `Debug` at verbosity 1 and every
    /// other classification at verbosity 0. The first failing option aborts
    /// construction and its error is returned unchanged.
    pub fn new(sink: SharedSink, options: impl IntoIterator<Item = AdapterOption>) -> AdapterResult<Self> {
        let mut adapter = Self {
            sink,
            classify: default_classifier(),
            context: None,
            context_key: DEFAULT_CONTEXT_KEY.to_string(),
        };

        for option in options {
            let name = option.name().to_string();
            if let Err(e) = option.apply(&mut adapter) {
                debug!(option = %name, error = %e, "adapter option rejected");
                return Err(e);
            }
        }

        Ok(adapter)
    }

    /// Start a chained construction over `sink`
    pub fn builder(sink: SharedSink) -> AdapterBuilder {
        AdapterBuilder::new(sink)
    }

    /// Log a message under a classification
    ///
    /// Nothing is formatted when the resolved verbosity is disabled. A
    /// `Display` implementation that errors leaves a truncated message
    /// rather than a panic.
    pub fn logf(&self, classification: Classification, args: fmt::Arguments<'_>) {
        let verbosity = self.verbosity_for(&classification);
        if !self.sink.enabled(verbosity) {
            return;
        }

        let mut message = String::new();
        let _ = fmt::write(&mut message, args);

        match self.attached_context() {
            Some(ctx) => {
                let attribute = Attribute::new(&self.context_key, ctx.as_ref());
                self.sink.info(verbosity, &message, &[attribute]);
            }
            None => self.sink.info(verbosity, &message, &[]),
        }
    }

    /// Derive an adapter that attaches `ctx` to every line
    pub fn with_context(&self, ctx: impl ContextValue + 'static) -> Self {
        self.with_shared_context(Some(Arc::new(ctx)))
    }

    /// Derive an adapter with the given context, or with none
    ///
    /// The receiver is not modified; the context key is carried over.
    pub fn with_shared_context(&self, ctx: Option<SharedContext>) -> Self {
        Self {
            sink: Arc::clone(&self.sink),
            classify: Arc::clone(&self.classify),
            context: ctx,
            context_key: self.context_key.clone(),
        }
    }

    /// Verbosity a classification resolves to
    pub fn verbosity_for(&self, classification: &Classification) -> Verbosity {
        (self.classify)(classification)
    }

    pub fn context_key(&self) -> &str {
        &self.context_key
    }

    pub fn context(&self) -> Option<&SharedContext> {
        self.context.as_ref()
    }

    pub fn sink(&self) -> &SharedSink {
        &self.sink
    }

    fn attached_context(&self) -> Option<&SharedContext> {
        if self.context_key.is_empty() {
            return None;
        }
        self.context.as_ref()
    }
}

impl fmt::Debug for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter")
            .field("context_key", &self.context_key)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

impl ClassifiedLogger for Adapter {
    fn logf(&self, classification: Classification, args: fmt::Arguments<'_>) {
        Adapter::logf(self, classification, args)
    }
}

impl ContextLogger for Adapter {
    fn with_context(&self, ctx: Option<SharedContext>) -> Box<dyn ClassifiedLogger> {
        Box::new(self.with_shared_context(ctx))
    }
}
