//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. They expand to the
//! matching logger method, so they evaluate to a `Result<()>` on a
//! [`Logger`](crate::Logger) and to a `LogFuture` on an `AsyncLogger`.
//!
//! # Examples
//!
//! ```
//! use module_logger::prelude::*;
//! use module_logger::info;
//!
//! let logger = Logger::builder().sink(MemorySink::new()).build();
//!
//! // Basic logging
//! info!(logger, "Server started").unwrap();
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//!
//! assert_eq!(logger.sink().len(), 2);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use module_logger::prelude::*;
/// # let logger = Logger::new();
/// use module_logger::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use module_logger::prelude::*;
/// # let logger = Logger::builder().min_level(LogLevel::Debug).sink(MemorySink::new()).build();
/// use module_logger::debug;
/// debug!(logger, "Counter value: {}", 10).unwrap();
/// assert!(logger.sink().lines()[0].ends_with("Counter value: 10"));
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}
