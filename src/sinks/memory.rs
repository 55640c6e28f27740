//! In-memory sink that captures formatted lines

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Collects every written line in memory
///
/// Clones share the same buffer, so a test can hand one clone to a logger and
/// inspect the lines through another.
///
/// ```
/// use module_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder().format("$message").sink(sink.clone()).build();
/// logger.error("boom").unwrap();
/// assert_eq!(sink.lines(), vec!["boom"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Remove and return the captured lines
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, line: &str) -> Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }
}
