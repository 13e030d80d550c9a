//! Domain layer for news-verdict
//!
//! This crate contains the value objects that describe a single news
//! analysis: what the user typed, what goes over the wire, and what comes
//! back. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Analysis
//!
//! - **Input**: an optional title and an optional body; at least one must be non-blank
//! - **Request**: the `{text, title}` payload sent verbatim to the classification service
//! - **Outcome**: either a verdict with a confidence percentage, or a failure message
//!
//! ## Request State
//!
//! - **Idle**: nothing in flight, a new submission may start
//! - **InFlight**: one submission is waiting on the classification service

pub mod analysis;
pub mod config;
pub mod core;
pub mod util;

// Re-export commonly used types
pub use analysis::{
    input::AnalysisInput,
    messages,
    outcome::{AnalysisOutcome, Classification, FailureKind, Verdict},
    request::AnalysisRequest,
    state::RequestState,
};
pub use config::OutputFormat;
pub use core::error::DomainError;
