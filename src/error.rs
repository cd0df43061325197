//! Error types
//!
//! Failures of a single dataset fetch. Every variant ends up as the empty
//! state on screen; the variant is kept for logs and exit codes.

use thiserror::Error;

use crate::dataset::DatasetKey;

/// Response body could not be turned into a payload
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Body is not JSON
    #[error("Malformed response body: {0}")]
    Malformed(#[source] serde_json::Error),

    /// Body is JSON but not the shape the dataset promises
    #[error("Unexpected {key} payload: {reason}")]
    Shape { key: DatasetKey, reason: String },
}

/// Errors that can occur while fetching a dataset
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection refused, DNS failure, reset, ...
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("Request timeout: {url}")]
    Timeout { url: String },

    /// Service answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Name outside the registered dataset set
    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),
}

/// Result type alias for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FetchError::UnknownDataset("wordCount".to_string());
        assert_eq!(err.to_string(), "Unknown dataset: wordCount");

        let err = FetchError::Status {
            url: "http://127.0.0.1:5328/api/raw-data".to_string(),
            status: 503,
        };
        assert_eq!(
            err.to_string(),
            "http://127.0.0.1:5328/api/raw-data returned HTTP 503"
        );

        let err = DecodeError::Shape {
            key: DatasetKey::TopicModeling,
            reason: "expected a sequence".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected topicModeling payload: expected a sequence"
        );
    }

    #[test]
    fn test_decode_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let fetch_err: FetchError = DecodeError::Malformed(json_err).into();
        assert!(matches!(fetch_err, FetchError::Decode(DecodeError::Malformed(_))));
        assert!(fetch_err.to_string().starts_with("Malformed response body"));
    }
}
