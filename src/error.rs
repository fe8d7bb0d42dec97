//! Error taxonomy for a single analysis run.

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The submitted URL does not carry a `v=` video identifier
    #[error("Invalid video URL: {0}")]
    InvalidUrl(String),

    /// API key missing or rejected by the API
    #[error("API credential rejected: {0}")]
    Auth(String),

    /// Transport, HTTP status or response schema failure while paginating
    #[error("Failed to fetch comments: {0}")]
    Fetch(String),

    /// Nothing left to compute percentages or keywords from
    #[error("Insufficient data: {0}")]
    InsufficientData(String),
}

impl AnalysisError {
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        AnalysisError::InvalidUrl(msg.into())
    }

    pub fn auth(msg: impl Into<String>) -> Self {
        AnalysisError::Auth(msg.into())
    }

    pub fn fetch(msg: impl Into<String>) -> Self {
        AnalysisError::Fetch(msg.into())
    }

    pub fn insufficient_data(msg: impl Into<String>) -> Self {
        AnalysisError::InsufficientData(msg.into())
    }

    /// Short machine-readable kind, used in HTTP error payloads
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::InvalidUrl(_) => "input",
            AnalysisError::Auth(_) => "auth",
            AnalysisError::Fetch(_) => "fetch",
            AnalysisError::InsufficientData(_) => "insufficient_data",
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AnalysisError::Fetch(format!("request timed out: {}", e))
        } else if e.is_decode() {
            AnalysisError::Fetch(format!("unexpected response shape: {}", e))
        } else {
            AnalysisError::Fetch(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(AnalysisError::invalid_url("x").kind(), "input");
        assert_eq!(AnalysisError::auth("x").kind(), "auth");
        assert_eq!(AnalysisError::fetch("x").kind(), "fetch");
        assert_eq!(AnalysisError::insufficient_data("x").kind(), "insufficient_data");
    }

    #[test]
    fn test_display_is_user_readable() {
        let err = AnalysisError::invalid_url("no 'v=' parameter in 'https://youtu.be/abc'");
        assert_eq!(
            err.to_string(),
            "Invalid video URL: no 'v=' parameter in 'https://youtu.be/abc'"
        );
    }
}
