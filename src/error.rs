use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordSearchError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("HTTP request failed for {url} with status {status}: {body}")]
    RemoteError {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Failed to parse JSON data")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed processing DataFrame: {0}")]
    DataFrame(#[from] PolarsError),

    #[error("Unexpected data: {0}")]
    UnexpectedData(String),
}

impl RecordSearchError {
    /// HTTP status carried by a [`RecordSearchError::RemoteError`], if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            RecordSearchError::RemoteError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_display_includes_status_and_body() {
        let err = RecordSearchError::RemoteError {
            url: "http://example.test/id/stations".to_string(),
            status: 503,
            body: r#"{"error":"unavailable"}"#.to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("503"));
        assert!(text.contains("unavailable"));
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn status_is_none_for_other_kinds() {
        assert_eq!(RecordSearchError::NotFound("x".into()).status(), None);
    }
}
