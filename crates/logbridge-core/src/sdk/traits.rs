//! SDK-facing logger traits

use std::fmt;
use std::sync::Arc;

use crate::types::{Classification, SharedContext};

/// Logger contract SDK instrumentation hooks call into
///
/// The SDK hands over a classification and lazily formatted arguments; the
/// implementation decides whether and where the line goes. Implementations
/// must never fail or panic.
pub trait ClassifiedLogger: Send + Sync {
    /// Log a formatted message under a classification
    fn logf(&self, classification: Classification, args: fmt::Arguments<'_>);
}

/// Optional extension: loggers that can carry an ambient context
///
/// Deriving a context-bound logger leaves the receiver untouched.
pub trait ContextLogger: ClassifiedLogger {
    /// Return a logger that attaches `ctx` to everything it logs
    fn with_context(&self, ctx: Option<SharedContext>) -> Box<dyn ClassifiedLogger>;
}

/// Type alias for a boxed SDK logger
pub type BoxedClassifiedLogger = Box<dyn ClassifiedLogger>;

/// Type alias for an Arc-wrapped SDK logger
pub type SharedClassifiedLogger = Arc<dyn ClassifiedLogger>;

/// Extension trait with one method per known classification
pub trait ClassifiedLoggerExt: ClassifiedLogger {
    /// Log under [`Classification::Warn`]
    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.logf(Classification::Warn, args);
    }

    /// Log under [`Classification::Debug`]
    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(Classification::Debug, args);
    }
}

// Implement ClassifiedLoggerExt for all ClassifiedLogger implementations
impl<T: ClassifiedLogger + ?Sized> ClassifiedLoggerExt for T {}

impl<T: ClassifiedLogger + ?Sized> ClassifiedLogger for &T {
    fn logf(&self, classification: Classification, args: fmt::Arguments<'_>) {
        (**self).logf(classification, args)
    }
}

impl<T: ClassifiedLogger + ?Sized> ClassifiedLogger for Box<T> {
    fn logf(&self, classification: Classification, args: fmt::Arguments<'_>) {
        (**self).logf(classification, args)
    }
}

impl<T: ClassifiedLogger + ?Sized> ClassifiedLogger for Arc<T> {
    fn logf(&self, classification: Classification, args: fmt::Arguments<'_>) {
        (**self).logf(classification, args)
    }
}

/// Log through a [`ClassifiedLogger`] with `format!`-style arguments
///
/// Arguments are captured with `format_args!`, so nothing is rendered unless
/// the logger decides to emit the line.
#[macro_export]
macro_rules! logf {
    ($logger:expr, $classification:expr, $($arg:tt)*) => {
        $crate::sdk::ClassifiedLogger::logf(&$logger, $classification, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warnf {
    ($logger:expr, $($arg:tt)*) => {
        $crate::sdk::ClassifiedLogger::logf(&$logger, $crate::types::Classification::Warn, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debugf {
    ($logger:expr, $($arg:tt)*) => {
        $crate::sdk::ClassifiedLogger::logf(&$logger, $crate::types::Classification::Debug, format_args!($($arg)*))
    };
}
