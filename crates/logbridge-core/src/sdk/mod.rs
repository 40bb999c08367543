//! Logger contract exposed to SDK instrumentation hooks

mod traits;

pub use traits::{
    ClassifiedLogger, ContextLogger, ClassifiedLoggerExt,
    BoxedClassifiedLogger, SharedClassifiedLogger,
};
