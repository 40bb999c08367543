//! Adapter from SDK logging hooks to leveled sinks
//!
//! ```rust
//! use std::sync::Arc;
//! use logbridge_core::adapter::{Adapter, with_context_key};
//! use logbridge_core::logging::BufferSink;
//! use logbridge_core::log_warnf;
//!
//! let sink = Arc::new(BufferSink::new());
//! let adapter = Adapter::new(sink.clone(), [with_context_key("ctx")])?;
//! log_warnf!(adapter.with_context("req-1"), "{}", "a warning");
//!
//! assert_eq!(sink.contents(), "INFO a warning ctx req-1\n");
//! # Ok::<(), logbridge_core::adapter::AdapterError>(())
//! ```

mod classifier;
mod error;
mod logger;
mod options;

pub use classifier::{default_classifier, Classifier, ClassificationLevels};
pub use error::{AdapterError, AdapterResult};
pub use logger::{Adapter, DEFAULT_CONTEXT_KEY};
pub use options::{
    AdapterOption, AdapterBuilder,
    with_context_key, with_classification_level, with_classification_levels, with_classifier,
};
