//! Logger configuration shared by the sync and async loggers

use super::formatter::{format_string, placeholder, FormatParams, DEFAULT_FORMAT};
use super::log_level::LogLevel;
use super::timestamp::format_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Module name used when none is given
pub const DEFAULT_MODULE_NAME: &str = "GLOBAL";

/// Settings captured when a logger is created
///
/// A logger never mutates its configuration; build a new logger to change it.
/// Missing fields fall back to their defaults when deserialized:
///
/// ```
/// use module_logger::{LogLevel, LoggerConfig};
///
/// let config: LoggerConfig = serde_json::from_str(r#"{"min_level":"DEBUG"}"#).unwrap();
/// assert_eq!(config.module_name, "GLOBAL");
/// assert_eq!(config.min_level, LogLevel::Debug);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub module_name: String,
    /// Least severe level that is still emitted
    pub min_level: LogLevel,
    /// Output template with `$moduleName`, `$logLevel`, `$formattedTimestamp`
    /// and `$message` placeholders
    pub format: String,
}

impl LoggerConfig {
    pub fn new(
        module_name: impl Into<String>,
        min_level: LogLevel,
        format: impl Into<String>,
    ) -> Self {
        Self {
            module_name: module_name.into(),
            min_level,
            format: format.into(),
        }
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.is_enabled_for(self.min_level)
    }

    /// Per-call substitution values, in substitution order
    pub fn format_params(
        &self,
        level: LogLevel,
        message: &str,
        timestamp: &DateTime<Utc>,
    ) -> FormatParams {
        let mut params = FormatParams::with_capacity(4);
        params
            .insert(placeholder::MODULE_NAME, &self.module_name)
            .insert(placeholder::FORMATTED_TIMESTAMP, format_timestamp(timestamp))
            .insert(placeholder::LOG_LEVEL, level)
            .insert(placeholder::MESSAGE, message);
        params
    }

    /// Render one log line for the given timestamp
    ///
    /// Does not apply the level filter.
    #[must_use]
    pub fn render(&self, level: LogLevel, message: &str, timestamp: &DateTime<Utc>) -> String {
        format_string(&self.format, &self.format_params(level, message, timestamp))
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            module_name: DEFAULT_MODULE_NAME.to_string(),
            min_level: LogLevel::Info,
            format: DEFAULT_FORMAT.to_string(),
        }
    }
}
