//! Ambient context values attached to log lines

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Any value that can be logged as an attribute
///
/// Implemented for everything that is `Display + Debug + Send + Sync`, so
/// callers can attach whatever request-scoped value they already carry.
pub trait ContextValue: fmt::Display + fmt::Debug + Send + Sync {}

impl<T> ContextValue for T where T: fmt::Display + fmt::Debug + Send + Sync + ?Sized {}

/// Type alias for a shared, immutable context value
pub type SharedContext = Arc<dyn ContextValue>;

/// Request-scoped context carrying trace identifiers
///
/// Displays as `background` when empty, otherwise as space separated
/// `key=value` pairs.
///
/// # Example
///
/// ```
/// use logbridge_core::types::RequestContext;
///
/// let ctx = RequestContext::new()
///     .with_trace_id("4bf92f35")
///     .with_field("operation", "PutObject");
/// assert_eq!(ctx.to_string(), "trace_id=4bf92f35 operation=PutObject");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span_id: Option<String>,
    /// Additional request-scoped fields
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
}

impl RequestContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trace id
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Set the span id
    pub fn with_span_id(mut self, span_id: impl Into<String>) -> Self {
        self.span_id = Some(span_id.into());
        self
    }

    /// Add an extra field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.trace_id.is_none() && self.span_id.is_none() && self.fields.is_empty()
    }

    /// Wrap into a [`SharedContext`] ready to hand to an adapter
    pub fn shared(self) -> SharedContext {
        Arc::new(self)
    }
}

impl fmt::Display for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("background");
        }

        let ids: [(&str, &Option<String>); 2] = [("trace_id", &self.trace_id), ("span_id", &self.span_id)];
        let mut pairs = ids
            .into_iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k, v)))
            .chain(self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        if let Some((k, v)) = pairs.next() {
            write!(f, "{}={}", k, v)?;
        }
        for (k, v) in pairs {
            write!(f, " {}={}", k, v)?;
        }
        Ok(())
    }
}
