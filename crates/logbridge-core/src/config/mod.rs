//! Adapter settings
//!
//! Settings are read from YAML, either as a string or through
//! `FileSettings`.

mod traits;
mod settings;
mod file;

pub use traits::{SettingsSource, ConfigError, ConfigResult};
pub use settings::AdapterSettings;
pub use file::FileSettings;
