//! Synchronous logger and the builder shared by both logger variants

use super::{
    config::LoggerConfig,
    error::Result,
    log_level::LogLevel,
    sink::Sink,
};
use crate::sinks::ConsoleSink;
use chrono::{DateTime, Utc};
use std::fmt;

#[cfg(feature = "async")]
use super::{async_logger::AsyncLogger, async_sink::AsyncSink};

/// Logger bound to a module name, a level threshold, a template and a sink
///
/// Calls at or above the threshold's severity are formatted and written to
/// the sink once, immediately. Anything else is a no-op.
///
/// # Example
///
/// ```
/// use module_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .module_name("MAIN")
///     .format("$logLevel $moduleName: $message")
///     .sink(sink.clone())
///     .build();
///
/// logger.info("started").unwrap();
/// logger.debug("hidden").unwrap();
///
/// assert_eq!(sink.lines(), vec!["INFO MAIN: started"]);
/// ```
pub struct Logger<S = ConsoleSink> {
    config: LoggerConfig,
    sink: S,
}

impl Logger {
    /// Logger with every default: `GLOBAL`, `Info`, the default template and
    /// stdout
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LoggerConfig::default(), ConsoleSink::new())
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use module_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .module_name("HTTP")
    ///     .min_level(LogLevel::Debug)
    ///     .build();
    /// assert_eq!(logger.module_name(), "HTTP");
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl<S: Sink> Logger<S> {
    pub fn with_config(config: LoggerConfig, sink: S) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn module_name(&self) -> &str {
        &self.config.module_name
    }

    pub fn min_level(&self) -> LogLevel {
        self.config.min_level
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.config.is_enabled(level)
    }

    /// Format `message` and write it to the sink if `level` passes the
    /// threshold
    ///
    /// The sink's error, if any, is returned as-is.
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) -> Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }

        let line = self.render_at(level, message.as_ref(), &Utc::now());
        self.sink.write(&line)
    }

    /// Render a line exactly as `log` would at `timestamp`, without the level
    /// filter and without touching the sink
    #[must_use]
    pub fn render_at(&self, level: LogLevel, message: &str, timestamp: &DateTime<Utc>) -> String {
        self.config.render(level, message, timestamp)
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) -> Result<()> {
        self.log(LogLevel::Error, message)
    }

    #[inline]
    pub fn warn(&self, message: impl AsRef<str>) -> Result<()> {
        self.log(LogLevel::Warn, message)
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) -> Result<()> {
        self.log(LogLevel::Info, message)
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) -> Result<()> {
        self.log(LogLevel::Debug, message)
    }

    #[inline]
    pub fn trace(&self, message: impl AsRef<str>) -> Result<()> {
        self.log(LogLevel::Trace, message)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for Logger<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Create a synchronous logger from explicit settings
///
/// Use [`Logger::new`] or [`Logger::builder`] to fall back to defaults.
pub fn create_logger<S: Sink>(
    module_name: impl Into<String>,
    min_level: LogLevel,
    format: impl Into<String>,
    sink: S,
) -> Logger<S> {
    Logger::with_config(LoggerConfig::new(module_name, min_level, format), sink)
}

/// Builder for constructing loggers with a fluent API
///
/// The sink defaults to [`ConsoleSink`]. Only sinks implementing
/// [`AsyncSink`] can produce an [`AsyncLogger`], so an async logger always
/// has an explicitly chosen sink.
///
/// # Example
/// ```
/// use module_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .module_name("DB")
///     .min_level(LogLevel::Warn)
///     .format("$logLevel|$message")
///     .sink(MemorySink::new())
///     .build();
///
/// logger.warn("slow query").unwrap();
/// assert_eq!(logger.sink().lines(), vec!["WARN|slow query"]);
/// ```
pub struct LoggerBuilder<S = ConsoleSink> {
    config: LoggerConfig,
    sink: S,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            sink: ConsoleSink::new(),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> LoggerBuilder<S> {
    #[must_use = "builder methods return a new value"]
    pub fn module_name(mut self, module_name: impl Into<String>) -> Self {
        self.config.module_name = module_name.into();
        self
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.config.min_level = level;
        self
    }

    /// Set the output template
    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.config.format = format.into();
        self
    }

    /// Replace all settings at once
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the output sink
    #[must_use = "builder methods return a new value"]
    pub fn sink<T>(self, sink: T) -> LoggerBuilder<T> {
        LoggerBuilder {
            config: self.config,
            sink,
        }
    }

    /// Build the synchronous Logger
    pub fn build(self) -> Logger<S>
    where
        S: Sink,
    {
        Logger::with_config(self.config, self.sink)
    }

    /// Build the asynchronous logger
    #[cfg(feature = "async")]
    pub fn build_async(self) -> AsyncLogger<S>
    where
        S: AsyncSink,
    {
        AsyncLogger::with_config(self.config, self.sink)
    }
}
