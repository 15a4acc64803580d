//! Error types for loading the metrics payload.

use thiserror::Error;

/// The metrics source could not be turned into a series at all.
///
/// Individual malformed rows never surface here; they are skipped or
/// zero-filled during normalization.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Fetching the payload failed
    #[error("Metrics source unavailable: {0}")]
    Unavailable(String),

    /// The payload is not JSON
    #[error("Metrics source returned invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl SourceError {
    /// Wrap a transport failure (network error, HTTP status, unreadable body).
    pub fn unavailable(reason: impl std::fmt::Display) -> Self {
        Self::Unavailable(reason.to_string())
    }
}

/// Type alias for Results using SourceError
pub type Result<T> = std::result::Result<T, SourceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_display() {
        let err = SourceError::unavailable("GET /health returned HTTP 503");
        assert_eq!(
            err.to_string(),
            "Metrics source unavailable: GET /health returned HTTP 503"
        );
    }

    #[test]
    fn test_invalid_json_display() {
        let err: SourceError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert!(matches!(err, SourceError::InvalidJson(_)));
        assert!(err
            .to_string()
            .starts_with("Metrics source returned invalid JSON: "));
    }
}
