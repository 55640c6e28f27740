//! Core logger types and traits

pub mod config;
pub mod error;
pub mod formatter;
pub mod log_level;
pub mod logger;
pub mod sink;
pub mod timestamp;

#[cfg(feature = "async")]
pub mod async_logger;
#[cfg(feature = "async")]
pub mod async_sink;

pub use config::{LoggerConfig, DEFAULT_MODULE_NAME};
pub use error::{LoggerError, Result};
pub use formatter::{format_string, FormatParams, DEFAULT_FORMAT};
pub use log_level::LogLevel;
pub use logger::{create_logger, Logger, LoggerBuilder};
pub use sink::Sink;

#[cfg(feature = "async")]
pub use async_logger::{create_async_logger, AsyncLogger, LogFuture};
#[cfg(feature = "async")]
pub use async_sink::AsyncSink;
