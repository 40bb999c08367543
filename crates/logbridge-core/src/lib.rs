//! logbridge Core
//!
//! Lets code built around a leveled, structured logger hand that logger to
//! a cloud SDK whose instrumentation only knows a classification-based
//! `logf`/`with_context` contract.
//!
//! ## Pieces
//!
//! - `logging`: the leveled sink trait and the shipped sinks
//! - `sdk`: the contract the SDK calls into, plus `logf!` macros
//! - `adapter`: the [`Adapter`] joining the two
//! - `config`: YAML settings that produce adapter options
//!
//! ```rust
//! use std::sync::Arc;
//! use logbridge_core::{Adapter, BufferSink, Classification, ContextLogger};
//! use logbridge_core::adapter::with_context_key;
//! use logbridge_core::types::RequestContext;
//!
//! let sink = Arc::new(BufferSink::with_max_verbosity(1));
//!
//! let adapter = Adapter::new(sink.clone(), [])?;
//! logbridge_core::logf!(adapter, Classification::Warn, "{}", "a warning");
//!
//! let adapter = Adapter::new(sink.clone(), [with_context_key("ctx")])?;
//! let sdk_logger = ContextLogger::with_context(&adapter, Some(RequestContext::new().shared()));
//! logbridge_core::logf!(sdk_logger, Classification::Warn, "{}", "another warning");
//! logbridge_core::logf!(sdk_logger, Classification::Debug, "{}", "some debug");
//!
//! assert_eq!(
//!     sink.contents(),
//!     "INFO a warning\nINFO another warning ctx background\nV[1] some debug ctx background\n"
//! );
//! # Ok::<(), logbridge_core::AdapterError>(())
//! ```

pub mod types;
pub mod logging;
pub mod sdk;
pub mod adapter;
pub mod config;

// Re-export commonly used types
pub use types::{Classification, Verbosity, ContextValue, RequestContext, SharedContext};

pub use logging::{
    Attribute, VerbositySink, SharedSink,
    NoOpSink, ConsoleSink, BufferSink, JsonLinesSink, TracingSink,
};

pub use sdk::{ClassifiedLogger, ContextLogger, ClassifiedLoggerExt};

pub use adapter::{
    Adapter, AdapterBuilder, AdapterOption, AdapterError, AdapterResult,
    Classifier, ClassificationLevels,
    with_context_key, with_classification_level,
};

pub use config::{AdapterSettings, SettingsSource, FileSettings, ConfigError};
