//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Please enter news text or title to analyze.")]
    EmptyInput,

    #[error("Confidence out of range: {0}")]
    InvalidConfidence(f64),
}
