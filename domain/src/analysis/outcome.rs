//! Analysis outcome value objects

use super::messages;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Binary verdict returned by the classification service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Fake,
    Real,
}

impl Verdict {
    pub fn from_is_fake(is_fake: bool) -> Self {
        if is_fake { Verdict::Fake } else { Verdict::Real }
    }

    pub fn is_fake(&self) -> bool {
        matches!(self, Verdict::Fake)
    }

    /// Headline shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Fake => "Fake News",
            Verdict::Real => "Real News",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A successful classification with a validated confidence
///
/// Confidence is a percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    is_fake: bool,
    confidence: f64,
}

impl Classification {
    pub fn new(is_fake: bool, confidence: f64) -> Result<Self, DomainError> {
        if !confidence.is_finite() || !(0.0..=100.0).contains(&confidence) {
            return Err(DomainError::InvalidConfidence(confidence));
        }
        Ok(Self {
            is_fake,
            confidence,
        })
    }

    pub fn is_fake(&self) -> bool {
        self.is_fake
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

/// Which class of problem produced a failure outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// Blank input, caught before any network activity
    Validation,
    /// The service answered with a non-success status
    Service,
    /// The service was unreachable, timed out, or answered unintelligibly
    Transport,
    /// Another submission was already in flight
    Busy,
}

/// Displayable result of one submission attempt
///
/// Serialized with a `status` tag so it can be emitted directly as JSON:
/// `{"status":"success","isFake":true,"confidence":87.0}` or
/// `{"status":"failure","kind":"service","message":"..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AnalysisOutcome {
    Success {
        #[serde(rename = "isFake")]
        is_fake: bool,
        confidence: f64,
    },
    Failure {
        kind: FailureKind,
        message: String,
    },
}

impl AnalysisOutcome {
    /// Failure for blank input
    pub fn validation_failure() -> Self {
        Self::Failure {
            kind: FailureKind::Validation,
            message: messages::EMPTY_INPUT.to_string(),
        }
    }

    /// Failure for a non-success response.
    ///
    /// Uses the service-provided message when it is present and non-empty,
    /// otherwise a generated message embedding the status code.
    pub fn service_failure(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| messages::server_error(status));
        Self::Failure {
            kind: FailureKind::Service,
            message,
        }
    }

    /// Failure for an unreachable or unintelligible service
    pub fn transport_failure() -> Self {
        Self::Failure {
            kind: FailureKind::Transport,
            message: messages::TRANSPORT_FAILURE.to_string(),
        }
    }

    /// Failure for an overlapping submission
    pub fn busy_failure() -> Self {
        Self::Failure {
            kind: FailureKind::Busy,
            message: messages::ALREADY_IN_FLIGHT.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn verdict(&self) -> Option<Verdict> {
        match self {
            Self::Success { is_fake, .. } => Some(Verdict::from_is_fake(*is_fake)),
            Self::Failure { .. } => None,
        }
    }

    pub fn confidence(&self) -> Option<f64> {
        match self {
            Self::Success { confidence, .. } => Some(*confidence),
            Self::Failure { .. } => None,
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message, .. } => Some(message),
        }
    }
}

impl From<Classification> for AnalysisOutcome {
    fn from(classification: Classification) -> Self {
        Self::Success {
            is_fake: classification.is_fake,
            confidence: classification.confidence,
        }
    }
}

impl From<DomainError> for AnalysisOutcome {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::EmptyInput => Self::validation_failure(),
            DomainError::InvalidConfidence(_) => Self::transport_failure(),
        }
    }
}
