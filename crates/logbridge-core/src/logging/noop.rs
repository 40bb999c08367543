//! No-op sink implementation

use super::traits::{Attribute, VerbositySink};
use crate::types::Verbosity;

/// A sink that has no level enabled
///
/// Useful for testing or when SDK output should be discarded entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl NoOpSink {
    /// Create a new no-op sink
    pub fn new() -> Self {
        Self
    }
}

impl VerbositySink for NoOpSink {
    fn enabled(&self, _verbosity: Verbosity) -> bool {
        false
    }

    fn info(&self, _verbosity: Verbosity, _message: &str, _attributes: &[Attribute<'_>]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink() {
        let sink = NoOpSink::new();

        assert!(!sink.enabled(Verbosity::INFO));
        assert!(!sink.enabled(Verbosity::MAX));

        // Emitting anyway must not panic
        sink.info(Verbosity::INFO, "info message", &[]);
    }
}
