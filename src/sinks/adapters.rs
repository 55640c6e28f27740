//! Adapters for building async sinks from plain sinks and closures

use crate::core::{AsyncSink, Result, Sink};
use async_trait::async_trait;
use std::fmt;
use std::future::Future;

/// Lifts a synchronous [`Sink`] into an [`AsyncSink`]
///
/// The wrapped sink runs when the returned future is first polled and the
/// future completes right after it.
#[derive(Debug, Clone, Default)]
pub struct Blocking<S> {
    inner: S,
}

impl<S: Sink> Blocking<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[async_trait]
impl<S: Sink> AsyncSink for Blocking<S> {
    async fn write(&self, line: String) -> Result<()> {
        self.inner.write(&line)
    }
}

/// Async sink backed by a closure returning a future
///
/// Built with [`from_async_fn`].
#[derive(Clone)]
pub struct FnAsyncSink<F> {
    f: F,
}

impl<F> fmt::Debug for FnAsyncSink<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnAsyncSink").finish_non_exhaustive()
    }
}

/// Wrap `f` as an [`AsyncSink`]
///
/// # Example
///
/// ```
/// use module_logger::prelude::*;
///
/// let logger = AsyncLogger::new(from_async_fn(|line: String| async move {
///     if line.is_empty() {
///         return Err(LoggerError::sink("remote", "empty line"));
///     }
///     Ok(())
/// }));
/// # drop(logger);
/// ```
pub fn from_async_fn<F, Fut>(f: F) -> FnAsyncSink<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    FnAsyncSink { f }
}

#[async_trait]
impl<F, Fut> AsyncSink for FnAsyncSink<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    async fn write(&self, line: String) -> Result<()> {
        (self.f)(line).await
    }
}
