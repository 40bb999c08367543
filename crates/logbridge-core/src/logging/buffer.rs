//! In-memory sink

use parking_lot::Mutex;

use super::traits::{render_line, Attribute, VerbositySink};
use crate::types::Verbosity;

/// Sink that keeps every emitted line in memory
///
/// Lines are rendered as `INFO message key value` for level 0 and
/// `V[n] message key value` above it. Levels above `max_verbosity` are
/// reported as disabled.
///
/// # Example
///
/// ```
/// use logbridge_core::logging::{BufferSink, VerbositySink};
/// use logbridge_core::types::Verbosity;
///
/// let sink = BufferSink::new();
/// sink.info(Verbosity::INFO, "hello", &[]);
/// assert_eq!(sink.lines(), vec!["INFO hello".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct BufferSink {
    lines: Mutex<Vec<String>>,
    max_verbosity: Verbosity,
}

impl BufferSink {
    /// Create a buffer sink with only level 0 enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer sink with every level up to `max` enabled
    pub fn with_max_verbosity(max: u8) -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
            max_verbosity: Verbosity(max),
        }
    }

    /// Snapshot of the emitted lines
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// All lines joined, each terminated with a newline
    pub fn contents(&self) -> String {
        self.lines.lock().iter().map(|l| format!("{}\n", l)).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Drop all recorded lines
    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl VerbositySink for BufferSink {
    fn enabled(&self, verbosity: Verbosity) -> bool {
        verbosity <= self.max_verbosity
    }

    fn info(&self, verbosity: Verbosity, message: &str, attributes: &[Attribute<'_>]) {
        let line = render_line(verbosity, message, attributes);
        self.lines.lock().push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sink_levels() {
        let sink = BufferSink::new();
        assert!(sink.enabled(Verbosity::INFO));
        assert!(!sink.enabled(Verbosity::DEBUG));

        let sink = BufferSink::with_max_verbosity(2);
        assert!(sink.enabled(Verbosity::DEBUG));
        assert!(sink.enabled(Verbosity(2)));
        assert!(!sink.enabled(Verbosity(3)));
    }

    #[test]
    fn test_buffer_sink_records_lines() {
        let sink = BufferSink::with_max_verbosity(1);
        let ctx = "bg";

        sink.info(Verbosity::INFO, "first", &[]);
        sink.info(Verbosity::DEBUG, "second", &[Attribute::new("ctx", &ctx)]);

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.contents(), "INFO first\nV[1] second ctx bg\n");

        sink.clear();
        assert!(sink.is_empty());
    }
}
