//! Leveled sinks the adapter writes into
//!
//! - `NoOpSink`: Discards everything
//! - `ConsoleSink`: stderr
//! - `BufferSink`: In-memory, for tests and examples
//! - `JsonLinesSink`: JSON object per line to any writer
//! - `TracingSink`: `tracing` events

mod traits;
mod noop;
mod console;
mod buffer;
mod jsonl;
mod tracing_sink;

pub use traits::{Attribute, VerbositySink, SharedSink};
pub use noop::NoOpSink;
pub use console::ConsoleSink;
pub use buffer::BufferSink;
pub use jsonl::JsonLinesSink;
pub use tracing_sink::{TracingSink, TRACING_TARGET};
