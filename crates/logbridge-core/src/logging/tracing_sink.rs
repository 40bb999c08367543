//! Bridge into the `tracing` facade
//!
//! Verbosity 0 becomes an `INFO` event, verbosity 1 a `DEBUG` event and
//! anything higher a `TRACE` event. Whether a level is enabled is decided by
//! the current dispatcher.
//!
//! The adapter emits at most one attribute, recorded as `attribute.key` and
//! `attribute.value` fields. Any further attributes are joined into a single
//! `attributes` field.

use tracing::Level;

use super::traits::{Attribute, AttributeList, VerbositySink};
use crate::types::Verbosity;

/// Target used for every event emitted by [`TracingSink`]
pub const TRACING_TARGET: &str = "logbridge";

/// Sink that emits `tracing` events
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    max_verbosity: Verbosity,
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl TracingSink {
    /// Create a sink that defers entirely to the subscriber's filter
    pub fn new() -> Self {
        Self {
            max_verbosity: Verbosity::MAX,
        }
    }

    /// Additionally cap the verbosity, regardless of the subscriber
    pub fn max_verbosity(mut self, max: u8) -> Self {
        self.max_verbosity = Verbosity(max);
        self
    }

    /// The `tracing` level a verbosity is emitted at
    pub fn level_for(verbosity: Verbosity) -> Level {
        match verbosity.level() {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

impl VerbositySink for TracingSink {
    fn enabled(&self, verbosity: Verbosity) -> bool {
        if verbosity > self.max_verbosity {
            return false;
        }

        match verbosity.level() {
            0 => tracing::enabled!(target: TRACING_TARGET, Level::INFO),
            1 => tracing::enabled!(target: TRACING_TARGET, Level::DEBUG),
            _ => tracing::enabled!(target: TRACING_TARGET, Level::TRACE),
        }
    }

    fn info(&self, verbosity: Verbosity, message: &str, attributes: &[Attribute<'_>]) {
        // Event levels must be constants at the callsite.
        macro_rules! emit {
            ($level:expr) => {
                match attributes {
                    [] => tracing::event!(
                        target: TRACING_TARGET,
                        $level,
                        verbosity = verbosity.level(),
                        "{}",
                        message
                    ),
                    [attr] => tracing::event!(
                        target: TRACING_TARGET,
                        $level,
                        verbosity = verbosity.level(),
                        attribute.key = %attr.key,
                        attribute.value = %attr.value,
                        "{}",
                        message
                    ),
                    [attr, rest @ ..] => tracing::event!(
                        target: TRACING_TARGET,
                        $level,
                        verbosity = verbosity.level(),
                        attribute.key = %attr.key,
                        attribute.value = %attr.value,
                        attributes = %AttributeList(rest),
                        "{}",
                        message
                    ),
                }
            };
        }

        match verbosity.level() {
            0 => emit!(Level::INFO),
            1 => emit!(Level::DEBUG),
            _ => emit!(Level::TRACE),
        }
    }
}
