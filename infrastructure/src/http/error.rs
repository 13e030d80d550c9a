//! Error types for the HTTP adapter

use thiserror::Error;

/// Result type alias for adapter construction
pub type Result<T> = std::result::Result<T, HttpServiceError>;

/// Errors that can occur while setting up the HTTP adapter
///
/// Per-request failures are reported through
/// [`ServiceError`](verdict_application::ServiceError) instead.
#[derive(Error, Debug)]
pub enum HttpServiceError {
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}
