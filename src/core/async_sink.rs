//! Async sink trait for non-blocking log output

use super::error::Result;
use async_trait::async_trait;

/// Trait for asynchronous log sinks
///
/// The logger calls `write` at the moment the log call is made and hands the
/// resulting future straight back to the caller. Whatever the future resolves
/// to, success or failure, is what the caller observes.
///
/// # Example
///
/// ```no_run
/// use module_logger::core::{AsyncSink, Result};
/// use async_trait::async_trait;
///
/// struct HttpSink;
///
/// #[async_trait]
/// impl AsyncSink for HttpSink {
///     async fn write(&self, line: String) -> Result<()> {
///         // POST the line somewhere
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait AsyncSink: Send + Sync {
    /// Deliver one formatted line
    async fn write(&self, line: String) -> Result<()>;
}
