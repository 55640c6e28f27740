//! Console sink implementation

use crate::core::{Result, Sink};
use std::io::Write;

/// Which standard stream a [`ConsoleSink`] writes to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

/// Writes each line to standard output, followed by a newline
///
/// This is the default sink of [`Logger`](crate::Logger).
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    target: ConsoleTarget,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Console sink writing to standard error instead
    pub fn stderr() -> Self {
        Self {
            target: ConsoleTarget::Stderr,
        }
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }
}

impl Sink for ConsoleSink {
    fn write(&self, line: &str) -> Result<()> {
        // Lock for the whole line so concurrent writers don't interleave
        match self.target {
            ConsoleTarget::Stdout => writeln!(std::io::stdout().lock(), "{}", line)?,
            ConsoleTarget::Stderr => writeln!(std::io::stderr().lock(), "{}", line)?,
        }
        Ok(())
    }
}
