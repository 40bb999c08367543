//! Core types shared by sinks, the adapter and the SDK-facing traits

mod classification;
mod context;

pub use classification::{Classification, Verbosity};
pub use context::{ContextValue, RequestContext, SharedContext};
