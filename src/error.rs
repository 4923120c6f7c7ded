//! Error types for wp-recon

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a reconnaissance run
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid target URL provided
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to create HTTP client
    #[error("failed to create HTTP client: {0}")]
    HttpClient(String),

    /// A single probe request failed at the network level
    #[error("request to {path} failed: {source}")]
    Request {
        /// Path that was being requested
        path: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// Output operation failed
    #[error("output failed: {0}")]
    OutputFailed(#[source] std::io::Error),
}
