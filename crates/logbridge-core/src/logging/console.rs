//! Console sink implementation

use super::traits::{render_line, Attribute, VerbositySink};
use crate::types::Verbosity;

/// A sink that writes rendered lines to stderr
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    prefix: String,
    max_verbosity: Verbosity,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink {
    /// Create a new console sink with default prefix, emitting level 0 only
    pub fn new() -> Self {
        Self {
            prefix: "[logbridge]".to_string(),
            max_verbosity: Verbosity::INFO,
        }
    }

    /// Create a console sink with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::new()
        }
    }

    /// Enable every level up to and including `max`
    pub fn max_verbosity(mut self, max: u8) -> Self {
        self.max_verbosity = Verbosity(max);
        self
    }

    fn format(&self, verbosity: Verbosity, message: &str, attributes: &[Attribute<'_>]) -> String {
        format!("{} {}", self.prefix, render_line(verbosity, message, attributes))
    }
}

impl VerbositySink for ConsoleSink {
    fn enabled(&self, verbosity: Verbosity) -> bool {
        verbosity <= self.max_verbosity
    }

    fn info(&self, verbosity: Verbosity, message: &str, attributes: &[Attribute<'_>]) {
        eprintln!("{}", self.format(verbosity, message, attributes));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_sink_creation() {
        let sink = ConsoleSink::new();
        assert_eq!(sink.prefix, "[logbridge]");
        assert!(sink.enabled(Verbosity::INFO));
        assert!(!sink.enabled(Verbosity::DEBUG));

        let custom = ConsoleSink::with_prefix("[MyApp]").max_verbosity(2);
        assert_eq!(custom.prefix, "[MyApp]");
        assert!(custom.enabled(Verbosity(2)));
        assert!(!custom.enabled(Verbosity(3)));
    }

    #[test]
    fn test_console_sink_format() {
        let sink = ConsoleSink::with_prefix("[aws]");
        let ctx = "req-9";
        assert_eq!(
            sink.format(Verbosity::INFO, "a warning", &[Attribute::new("context", &ctx)]),
            "[aws] INFO a warning context req-9"
        );

        // Must not panic
        sink.info(Verbosity::INFO, "info message", &[]);
    }
}
