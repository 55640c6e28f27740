//! Sink trait for synchronous log output destinations

use super::error::Result;

/// Receives fully formatted log lines.
///
/// Any error returned here is handed back unchanged to the caller of the
/// logging method.
///
/// Closures of the shape `Fn(&str) -> Result<()>` are sinks too:
///
/// ```
/// use module_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .sink(|line: &str| -> Result<()> {
///         eprintln!("{}", line);
///         Ok(())
///     })
///     .build();
/// logger.info("to stderr").unwrap();
/// ```
pub trait Sink: Send + Sync {
    fn write(&self, line: &str) -> Result<()>;
}

impl<F> Sink for F
where
    F: Fn(&str) -> Result<()> + Send + Sync,
{
    #[inline]
    fn write(&self, line: &str) -> Result<()> {
        self(line)
    }
}
