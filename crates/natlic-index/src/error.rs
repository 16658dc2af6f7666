//! Error types for index access

use thiserror::Error;

/// Result type alias for index operations
pub type Result<T> = std::result::Result<T, IndexError>;

#[derive(Error, Debug)]
pub enum IndexError {
    /// Transport-level failure (connection, timeout, body read)
    #[error("index request failed: {0}")]
    Request(String),

    /// Non-success HTTP status from the index
    #[error("index returned status {status} for {url}")]
    Status { status: u16, url: String },

    /// Response body did not parse as a search response
    #[error("invalid index response: {0}")]
    Parse(String),

    /// Malformed base URL or collection name
    #[error("invalid index url: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for IndexError {
    fn from(err: reqwest::Error) -> Self {
        IndexError::Request(err.to_string())
    }
}

impl From<serde_json::Error> for IndexError {
    fn from(err: serde_json::Error) -> Self {
        IndexError::Parse(err.to_string())
    }
}
