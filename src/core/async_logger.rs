//! Asynchronous logger
//!
//! Same filtering and formatting as [`Logger`](super::Logger), but every
//! logging method returns a [`LogFuture`] for the sink's delivery. The line
//! and its timestamp are produced when the method is called, not when the
//! future is polled.

use super::{
    async_sink::AsyncSink,
    config::LoggerConfig,
    error::Result,
    log_level::LogLevel,
    logger::LoggerBuilder,
};
use chrono::{DateTime, Utc};
use std::fmt;
use std::future::{self, Future};
use std::pin::Pin;

/// Pending completion of one log call
pub type LogFuture<'a> = Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

/// Logger whose sink completes asynchronously
///
/// There is no default sink. Calls are independent: the logger does not
/// queue, order or serialize overlapping deliveries, retry failures, or
/// apply timeouts.
///
/// # Example
///
/// ```
/// use module_logger::prelude::*;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<()> {
/// let sink = MemorySink::new();
/// let logger = AsyncLogger::builder(Blocking::new(sink.clone()))
///     .module_name("WORKER")
///     .format("$moduleName $message")
///     .build_async();
///
/// logger.info("job done").await?;
/// assert_eq!(sink.lines(), vec!["WORKER job done"]);
/// # Ok(())
/// # }
/// ```
pub struct AsyncLogger<S> {
    config: LoggerConfig,
    sink: S,
}

impl<S: AsyncSink> AsyncLogger<S> {
    /// Logger with default module name, level and template around `sink`
    pub fn new(sink: S) -> Self {
        Self::with_config(LoggerConfig::default(), sink)
    }

    pub fn with_config(config: LoggerConfig, sink: S) -> Self {
        Self { config, sink }
    }

    /// Builder preloaded with `sink`; finish with
    /// [`build_async`](LoggerBuilder::build_async)
    pub fn builder(sink: S) -> LoggerBuilder<S> {
        LoggerBuilder::new().sink(sink)
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

    /// Format `message` now and start delivery to the sink
    ///
    /// A suppressed call returns an already-completed `Ok(())` future and
    /// never touches the sink. Otherwise the sink's own future is returned
    /// unchanged, so its failure is the caller's to observe.
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) -> LogFuture<'_> {
        if !self.is_enabled(level) {
            return Box::pin(future::ready(Ok(())));
        }

        let line = self.render_at(level, message.as_ref(), &Utc::now());
        self.sink.write(line)
    }

    #[must_use]
    pub fn render_at(&self, level: LogLevel, message: &str, timestamp: &DateTime<Utc>) -> String {
        self.config.render(level, message, timestamp)
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) -> LogFuture<'_> {
        self.log(LogLevel::Error, message)
    }

    #[inline]
    pub fn warn(&self, message: impl AsRef<str>) -> LogFuture<'_> {
        self.log(LogLevel::Warn, message)
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) -> LogFuture<'_> {
        self.log(LogLevel::Info, message)
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) -> LogFuture<'_> {
        self.log(LogLevel::Debug, message)
    }

    #[inline]
    pub fn trace(&self, message: impl AsRef<str>) -> LogFuture<'_> {
        self.log(LogLevel::Trace, message)
    }
}

impl<S> fmt::Debug for AsyncLogger<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncLogger")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Create an asynchronous logger from explicit settings
pub fn create_async_logger<S: AsyncSink>(
    module_name: impl Into<String>,
    min_level: LogLevel,
    format: impl Into<String>,
    sink: S,
) -> AsyncLogger<S> {
    AsyncLogger::with_config(LoggerConfig::new(module_name, min_level, format), sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LoggerError;
    use crate::sinks::{from_async_fn, Blocking, MemorySink};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio_test::{assert_ready_err, assert_ready_ok, task};

    #[derive(Default)]
    struct SpySink {
        calls: AtomicUsize,
        lines: parking_lot::Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AsyncSink for SpySink {
        async fn write(&self, line: String) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.lines.lock().push(line);
            Ok(())
        }
    }

    struct RejectingSink;

    #[async_trait]
    impl AsyncSink for RejectingSink {
        async fn write(&self, _line: String) -> Result<()> {
            Err(LoggerError::sink("rejecting", "delivery refused"))
        }
    }

    #[test]
    fn test_suppressed_future_is_ready_without_sink_call() {
        let logger = AsyncLogger::new(SpySink::default());

        let mut fut = task::spawn(logger.debug("hidden"));
        assert_ready_ok!(fut.poll());
        drop(fut);

        let mut fut = task::spawn(logger.trace("hidden"));
        assert_ready_ok!(fut.poll());
        drop(fut);

        assert_eq!(logger.sink().calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_suppressed_call_skips_failing_sink() {
        let logger = create_async_logger("MAIN", LogLevel::Error, "$message", RejectingSink);
        let mut fut = task::spawn(logger.warn("below threshold"));
        assert_ready_ok!(fut.poll());
    }

    #[test]
    fn test_sink_failure_is_observable() {
        let logger = AsyncLogger::new(RejectingSink);
        let mut fut = task::spawn(logger.error("x"));
        let err = assert_ready_err!(fut.poll());
        assert!(matches!(err, LoggerError::SinkError { .. }));
    }

    #[tokio::test]
    async fn test_emitted_levels_at_info() {
        let logger = AsyncLogger::builder(SpySink::default())
            .format("$logLevel:$message")
            .build_async();

        logger.error("e").await.unwrap();
        logger.warn("w").await.unwrap();
        logger.info("i").await.unwrap();
        logger.debug("d").await.unwrap();
        logger.trace("t").await.unwrap();

        assert_eq!(logger.sink().calls.load(Ordering::SeqCst), 3);
        assert_eq!(*logger.sink().lines.lock(), vec!["ERROR:e", "WARN:w", "INFO:i"]);
    }

    #[tokio::test]
    async fn test_defaults() {
        let logger = AsyncLogger::new(Blocking::new(MemorySink::new()));
        assert_eq!(logger.module_name(), "GLOBAL");
        assert_eq!(logger.min_level(), LogLevel::Info);
        assert_eq!(logger.config(), &LoggerConfig::default());
    }

    #[tokio::test]
    async fn test_timestamp_captured_at_call_time() {
        let sink = MemorySink::new();
        let logger = AsyncLogger::builder(Blocking::new(sink.clone()))
            .format("$formattedTimestamp")
            .build_async();

        let before = Utc::now();
        let pending = logger.info("x");
        let after = Utc::now();
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        pending.await.unwrap();

        let stamped = DateTime::parse_from_rfc3339(&sink.lines()[0])
            .unwrap()
            .with_timezone(&Utc);
        let floor = before - chrono::Duration::milliseconds(1);
        assert!(stamped >= floor && stamped <= after);
    }

    #[tokio::test]
    async fn test_closure_sink() {
        let delivered = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let delivered_clone = Arc::clone(&delivered);

        let logger = create_async_logger(
            "FN",
            LogLevel::Debug,
            "$moduleName $message",
            from_async_fn(move |line: String| {
                let delivered = Arc::clone(&delivered_clone);
                async move {
                    delivered.lock().push(line);
                    Ok::<(), LoggerError>(())
                }
            }),
        );

        logger.debug("hi").await.unwrap();
        assert_eq!(*delivered.lock(), vec!["FN hi"]);
    }
}
