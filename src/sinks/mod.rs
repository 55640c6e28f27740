//! Sink implementations

pub mod console;
pub mod memory;

#[cfg(feature = "async")]
pub mod adapters;

pub use console::{ConsoleSink, ConsoleTarget};
pub use memory::MemorySink;

#[cfg(feature = "async")]
pub use adapters::{from_async_fn, Blocking, FnAsyncSink};

pub use crate::core::Sink;
#[cfg(feature = "async")]
pub use crate::core::AsyncSink;
