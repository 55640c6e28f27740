//! # Module Logger
//!
//! A minimal leveled logging facade. Each logger is bound to a module name,
//! a minimum level, a `$placeholder` template and an output sink.
//!
//! ## Features
//!
//! - **Level filtering**: `ERROR < WARN < INFO < DEBUG < TRACE`; calls below
//!   the threshold are free no-ops
//! - **Templates**: `$moduleName`, `$logLevel`, `$formattedTimestamp` and
//!   `$message` placeholders
//! - **Pluggable sinks**: console by default, any closure or [`Sink`] type
//! - **Async variant**: [`AsyncLogger`] hands back the sink's future so
//!   delivery failures stay observable
//!
//! ```
//! use module_logger::prelude::*;
//!
//! let logger = Logger::new();
//! logger.info("written to stdout").unwrap();
//! logger.trace("filtered out").unwrap();
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        create_logger, format_string, FormatParams, LogLevel, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, Result, Sink, DEFAULT_FORMAT,
    };
    pub use crate::sinks::{ConsoleSink, MemorySink};

    #[cfg(feature = "async")]
    pub use crate::core::{create_async_logger, AsyncLogger, AsyncSink, LogFuture};
    #[cfg(feature = "async")]
    pub use crate::sinks::{from_async_fn, Blocking};
}

pub use crate::core::{
    create_logger, format_string, FormatParams, LogLevel, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, Result, Sink, DEFAULT_FORMAT, DEFAULT_MODULE_NAME,
};
pub use sinks::{ConsoleSink, MemorySink};

#[cfg(feature = "async")]
pub use crate::core::{create_async_logger, AsyncLogger, AsyncSink, LogFuture};
#[cfg(feature = "async")]
pub use sinks::{from_async_fn, Blocking};
