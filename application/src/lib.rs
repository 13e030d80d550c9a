//! Application layer for news-verdict
//!
//! This crate contains the analysis controller, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ServiceParams;
pub use ports::{
    classification_service::{ClassificationService, ServiceError},
    progress::{AnalysisProgressNotifier, NoProgress},
};
pub use use_cases::submit_analysis::AnalysisController;
