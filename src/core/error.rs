//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Structured (non-JSON) encoding or decoding failure
    #[error("Encoding error ({format}): {message}")]
    Encoding { format: String, message: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// A destination failed to persist or display an entry
    #[error("Destination '{kind}' failed: {message}")]
    Destination { kind: String, message: String },

    /// Level could not be parsed from text
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an encoding error for the given wire format
    pub fn encoding(format: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Encoding {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a destination failure
    pub fn destination(kind: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Destination {
            kind: kind.into(),
            message: message.into(),
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
        let err = LoggerError::config("FilesDestination", "Invalid folder");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::destination("console", "stdout closed");
        assert!(matches!(err, LoggerError::Destination { .. }));

        let err = LoggerError::encoding("cbor", "unexpected end of input");
        assert!(matches!(err, LoggerError::Encoding { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::config("FilesDestination", "Permission denied");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for FilesDestination: Permission denied"
        );

        let err = LoggerError::destination("files", "Disk full");
        assert_eq!(err.to_string(), "Destination 'files' failed: Disk full");

        let err = LoggerError::encoding("cbor", "truncated");
        assert_eq!(err.to_string(), "Encoding error (cbor): truncated");

        let err = LoggerError::InvalidLevel("loud".to_string());
        assert_eq!(err.to_string(), "Invalid log level: 'loud'");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("creating log folder", "cannot create", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("creating log folder"));
        assert!(err.to_string().contains("cannot create"));
    }
}
