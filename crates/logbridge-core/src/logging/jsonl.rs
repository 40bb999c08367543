//! JSON-lines sink
//!
//! Each emitted line is serialized as a single JSON object with `level`,
//! `v` and `msg` fields plus one string field per attribute. An attribute
//! whose key collides with one of those fields is written as `attr.<key>`.

use std::io::Write;

use parking_lot::Mutex;
use serde_json::{Map, Value};

use super::traits::{Attribute, VerbositySink};
use crate::types::Verbosity;

const RESERVED_KEYS: [&str; 3] = ["level", "v", "msg"];

/// Sink that writes one JSON object per line to any writer
///
/// Thread-safe via `Mutex<W>`. Write errors are ignored; a log line that
/// cannot be written is dropped.
pub struct JsonLinesSink<W: Write + Send> {
    writer: Mutex<W>,
    max_verbosity: Verbosity,
}

impl<W: Write + Send> JsonLinesSink<W> {
    /// Create a sink with only level 0 enabled
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            max_verbosity: Verbosity::INFO,
        }
    }

    /// Enable every level up to and including `max`
    pub fn max_verbosity(mut self, max: u8) -> Self {
        self.max_verbosity = Verbosity(max);
        self
    }

    /// Consume the sink and return the writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn record(verbosity: Verbosity, message: &str, attributes: &[Attribute<'_>]) -> Value {
        let mut map = Map::new();
        map.insert("level".to_string(), Value::String(verbosity.to_string()));
        map.insert("v".to_string(), Value::from(verbosity.level()));
        map.insert("msg".to_string(), Value::String(message.to_string()));

        for attr in attributes {
            let key = if RESERVED_KEYS.contains(&attr.key) {
                format!("attr.{}", attr.key)
            } else {
                attr.key.to_string()
            };
            map.insert(key, Value::String(attr.value.to_string()));
        }

        Value::Object(map)
    }
}

impl<W: Write + Send> VerbositySink for JsonLinesSink<W> {
    fn enabled(&self, verbosity: Verbosity) -> bool {
        verbosity <= self.max_verbosity
    }

    fn info(&self, verbosity: Verbosity, message: &str, attributes: &[Attribute<'_>]) {
        let record = Self::record(verbosity, message, attributes);
        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "{}", line);
        let _ = writer.flush();
    }
}

impl<W: Write + Send> std::fmt::Debug for JsonLinesSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesSink")
            .field("max_verbosity", &self.max_verbosity)
            .finish()
    }
}
