use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Local I/O (config files, log files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal setup, teardown, or event-channel failure.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Network or HTTP-level failure, including non-2xx responses.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body could not be parsed into the expected page shape.
    ///
    /// Surfaced to the user identically to `Transport`; the distinction
    /// only matters for logs.
    #[error("Decode error: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_via_from() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "no such config");
        let err = AppError::from(source);
        assert!(matches!(err, AppError::Io(_)));
        assert!(err.to_string().contains("no such config"));
    }

    #[test]
    fn transport_error_display() {
        let err = AppError::Transport("connection refused".into());
        assert_eq!(err.to_string(), "Transport error: connection refused");
    }

    #[test]
    fn decode_error_display() {
        let err = AppError::Decode("missing field `total`".into());
        assert_eq!(err.to_string(), "Decode error: missing field `total`");
    }

    #[test]
    fn terminal_error_display() {
        let err = AppError::Terminal("event channel closed".into());
        assert_eq!(err.to_string(), "Terminal error: event channel closed");
    }
}
