//! Runtime configuration.
//!
//! Settings come from CLI arguments only. `RUST_LOG`, when set, takes
//! precedence over [`Config::log_level`] when the logger is installed.

use crate::DEFAULT_MODEL;

/// Main configuration struct
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Model whose tokenizer is used
    pub model: String,

    /// Default log filter directive (e.g. `warn`, `debug`)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Use a different model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the default log filter
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable debug logging
    pub fn verbose(self) -> Self {
        self.with_log_level("debug")
    }
}
