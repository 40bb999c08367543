//! Leveled sink trait definition

use std::fmt;
use std::sync::Arc;

use crate::types::{ContextValue, Verbosity};

/// A single key/value pair attached to an emitted line
#[derive(Debug, Clone, Copy)]
pub struct Attribute<'a> {
    pub key: &'a str,
    pub value: &'a dyn ContextValue,
}

impl<'a> Attribute<'a> {
    pub fn new(key: &'a str, value: &'a dyn ContextValue) -> Self {
        Self { key, value }
    }
}

/// Leveled, structured logging backend
///
/// This is the capability the adapter writes into. A sink answers whether a
/// verbosity level is enabled and emits already formatted messages with
/// optional attributes.
///
/// Implementations:
/// - `NoOpSink`: Never enabled
/// - `ConsoleSink`: Writes to stderr
/// - `BufferSink`: Keeps rendered lines in memory
/// - `JsonLinesSink`: One JSON object per line to any writer
/// - `TracingSink`: Forwards to the `tracing` facade
pub trait VerbositySink: Send + Sync {
    /// Whether a line at this verbosity would be emitted
    fn enabled(&self, verbosity: Verbosity) -> bool;

    /// Emit a message at the given verbosity
    ///
    /// Callers are expected to check [`VerbositySink::enabled`] first.
    fn info(&self, verbosity: Verbosity, message: &str, attributes: &[Attribute<'_>]);
}

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn VerbositySink>;

impl<S: VerbositySink + ?Sized> VerbositySink for Arc<S> {
    fn enabled(&self, verbosity: Verbosity) -> bool {
        (**self).enabled(verbosity)
    }

    fn info(&self, verbosity: Verbosity, message: &str, attributes: &[Attribute<'_>]) {
        (**self).info(verbosity, message, attributes)
    }
}

impl<S: VerbositySink + ?Sized> VerbositySink for Box<S> {
    fn enabled(&self, verbosity: Verbosity) -> bool {
        (**self).enabled(verbosity)
    }

    fn info(&self, verbosity: Verbosity, message: &str, attributes: &[Attribute<'_>]) {
        (**self).info(verbosity, message, attributes)
    }
}

/// Renders attributes as `key value` pairs separated by spaces
pub(crate) struct AttributeList<'a, 'b>(pub &'a [Attribute<'b>]);

impl fmt::Display for AttributeList<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, attr) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{} {}", attr.key, attr.value)?;
        }
        Ok(())
    }
}

/// Plain text rendering shared by the text sinks: `<level> <message>[ <k> <v>]...`
pub(crate) fn render_line(verbosity: Verbosity, message: &str, attributes: &[Attribute<'_>]) -> String {
    if attributes.is_empty() {
        format!("{} {}", verbosity, message)
    } else {
        format!("{} {} {}", verbosity, message, AttributeList(attributes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_line_without_attributes() {
        assert_eq!(render_line(Verbosity::INFO, "hello", &[]), "INFO hello");
        assert_eq!(render_line(Verbosity(3), "hello", &[]), "V[3] hello");
    }

    #[test]
    fn test_render_line_with_attributes() {
        let ctx = "req-1";
        let n = 42;
        let attrs = [Attribute::new("ctx", &ctx), Attribute::new("n", &n)];
        assert_eq!(
            render_line(Verbosity::DEBUG, "some debug", &attrs),
            "V[1] some debug ctx req-1 n 42"
        );
    }

    #[test]
    fn test_wrapped_sinks_forward() {
        use crate::logging::BufferSink;

        let inner = Arc::new(BufferSink::new());
        let boxed: Box<dyn VerbositySink> = Box::new(inner.clone());

        assert!(boxed.enabled(Verbosity::INFO));
        assert!(!boxed.enabled(Verbosity::DEBUG));
        boxed.info(Verbosity::INFO, "forwarded", &[]);
        assert_eq!(inner.lines(), vec!["INFO forwarded".to_string()]);
    }
}
