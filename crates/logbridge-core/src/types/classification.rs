//! Classification and verbosity types

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Semantic category an SDK attaches to each log call
///
/// The SDK contract only defines `Warn` and `Debug`. Anything else an SDK
/// (or a future version of one) sends is kept verbatim in `Other`, so a
/// classifier always has something to match on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
#[non_exhaustive]
pub enum Classification {
    /// Warnings and general SDK output
    Warn,
    /// Diagnostic output (request/response dumps, retries, signing details)
    Debug,
    /// Any classification not known to this crate
    Other(String),
}

impl Classification {
    /// Parse a classification tag
    ///
    /// `warn` and `debug` match case-insensitively. Anything else never
    /// fails; it becomes [`Classification::Other`] holding the tag as given.
    pub fn parse(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("warn") {
            Classification::Warn
        } else if tag.eq_ignore_ascii_case("debug") {
            Classification::Debug
        } else {
            Classification::Other(tag.to_string())
        }
    }

    /// Tag for this classification; lowercase for the named variants
    pub fn as_str(&self) -> &str {
        match self {
            Classification::Warn => "warn",
            Classification::Debug => "debug",
            Classification::Other(tag) => tag,
        }
    }

    pub fn is_debug(&self) -> bool {
        matches!(self, Classification::Debug)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Classification {
    fn from(tag: &str) -> Self {
        Self::parse(tag)
    }
}

impl From<String> for Classification {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl From<Classification> for String {
    fn from(classification: Classification) -> Self {
        classification.as_str().to_string()
    }
}

/// Verbosity level understood by leveled sinks
///
/// Higher numbers mean more detailed, less important output. Level 0 is
/// the level a sink normally always has enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Verbosity(pub u8);

impl Verbosity {
    /// Level 0, rendered as `INFO`
    pub const INFO: Verbosity = Verbosity(0);
    /// Level 1, used for debug classifications by default
    pub const DEBUG: Verbosity = Verbosity(1);
    /// Highest representable level
    pub const MAX: Verbosity = Verbosity(u8::MAX);

    pub fn new(level: u8) -> Self {
        Self(level)
    }

    pub fn level(self) -> u8 {
        self.0
    }
}

impl From<u8> for Verbosity {
    fn from(level: u8) -> Self {
        Self(level)
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => f.write_str("INFO"),
            n => write!(f, "V[{}]", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_classifications() {
        assert_eq!(Classification::parse("warn"), Classification::Warn);
        assert_eq!(Classification::parse("WARN"), Classification::Warn);
        assert_eq!(Classification::parse("Debug"), Classification::Debug);
    }

    #[test]
    fn test_parse_unknown_classification() {
        let c: Classification = "retry".parse().unwrap();
        assert_eq!(c, Classification::Other("retry".to_string()));
        assert_eq!(c.as_str(), "retry");
        assert!(!c.is_debug());
    }

    #[test]
    fn test_parse_keeps_unknown_tags_verbatim() {
        assert_eq!(Classification::parse("warning"), Classification::Other("warning".to_string()));
        assert_eq!(Classification::parse(" Retry "), Classification::Other(" Retry ".to_string()));
        assert_eq!(Classification::parse(" debug "), Classification::Other(" debug ".to_string()));
        assert_eq!(Classification::parse("Retry").as_str(), "Retry");
        assert_ne!(Classification::parse("Retry"), Classification::parse("retry"));
    }

    #[test]
    fn test_classification_serde() {
        let json = serde_json::to_string(&Classification::Debug).unwrap();
        assert_eq!(json, "\"debug\"");

        let parsed: Classification = serde_json::from_str("\"request\"").unwrap();
        assert_eq!(parsed.to_string(), "request");
    }

    #[test]
    fn test_verbosity_display() {
        assert_eq!(Verbosity::INFO.to_string(), "INFO");
        assert_eq!(Verbosity::DEBUG.to_string(), "V[1]");
        assert_eq!(Verbosity(7).to_string(), "V[7]");
        assert!(Verbosity::DEBUG > Verbosity::INFO);
    }
}
