//! Error types for the logger system
//!
//! The logging path itself never fails: level filtering and formatting are
//! infallible. These errors are produced by sinks and handed back to the
//! caller of the logging method exactly as the sink returned them.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Sink failed to deliver a formatted line
    #[error("Sink '{sink}' failed: {message}")]
    SinkError { sink: String, message: String },

    /// Unknown level name
    #[error("Invalid log level: '{value}'")]
    InvalidLevel { value: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create a sink delivery error
    pub fn sink(sink: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::SinkError {
            sink: sink.into(),
            message: message.into(),
        }
    }

    pub fn invalid_level(value: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            value: value.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::sink("network", "connection reset");
        assert!(matches!(err, LoggerError::SinkError { .. }));

        let err = LoggerError::invalid_level("LOUD");
        assert!(matches!(err, LoggerError::InvalidLevel { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::sink("network", "connection reset");
        assert_eq!(err.to_string(), "Sink 'network' failed: connection reset");

        let err = LoggerError::invalid_level("LOUD");
        assert_eq!(err.to_string(), "Invalid log level: 'LOUD'");

        let err = LoggerError::other("boom");
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LoggerError = io_err.into();

        assert!(matches!(err, LoggerError::IoError(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
