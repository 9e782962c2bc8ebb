//! Logger configuration.

use serde::Deserialize;

pub const DEFAULT_LEVEL: &str = "info";
pub const DEFAULT_FORMAT: &str = "json";

pub(crate) const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "warning", "error"];
pub(crate) const FORMATS: &[&str] = &["json", "text"];

/// Logging settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Logging verbosity: "debug", "info", "warn", "error" (default: info).
    pub level: String,
    /// Output encoding: "json" or "text" (default: json).
    pub format: String,
    /// Log destination. Empty or "stdout" for standard output, "stderr", or a file path.
    pub output_path: String,
}

impl LoggerConfig {
    pub(crate) fn apply_defaults(&mut self) {
        if self.level.is_empty() {
            self.level = DEFAULT_LEVEL.to_string();
        }
        if self.format.is_empty() {
            self.format = DEFAULT_FORMAT.to_string();
        }
    }
}
