//! Classification service port
//!
//! Defines the interface for asking the remote classifier whether a piece of
//! news is fake.

use async_trait::async_trait;
use thiserror::Error;
use verdict_domain::{AnalysisRequest, Classification};

/// Errors that can occur while talking to the classification service
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// The service answered with a non-success status.
    #[error("Service rejected request with status {status}")]
    Rejected {
        status: u16,
        /// Error string from the response body, if one could be read.
        message: Option<String>,
    },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timeout")]
    Timeout,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Gateway to the classification service
///
/// This port defines how the application layer reaches the classifier.
/// Implementations (adapters) live in the infrastructure layer. One call is
/// one best-effort attempt: implementations must not retry.
#[async_trait]
pub trait ClassificationService: Send + Sync {
    /// Classify a single request.
    async fn classify(&self, request: &AnalysisRequest) -> Result<Classification, ServiceError>;
}
