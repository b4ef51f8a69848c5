use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while talking to a roster data source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request never produced a response (connect, timeout, TLS)
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("'{url}' returned {status}: {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },

    /// Response body was not the expected JSON
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
