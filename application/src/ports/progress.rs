//! Progress notification port
//!
//! Defines the interface for reporting the loading state of a submission.

use verdict_domain::{AnalysisOutcome, AnalysisRequest};

/// Callback for progress updates while a submission is in flight
///
/// Implementations live in the presentation layer (spinner, plain text, ...).
/// Only submissions that actually reach the service are reported; validation
/// and busy failures resolve without notifications.
pub trait AnalysisProgressNotifier: Send + Sync {
    /// Called right before the request is sent
    fn on_submit_start(&self, request: &AnalysisRequest);

    /// Called once the outcome is determined
    fn on_submit_complete(&self, outcome: &AnalysisOutcome);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl AnalysisProgressNotifier for NoProgress {
    fn on_submit_start(&self, _request: &AnalysisRequest) {}
    fn on_submit_complete(&self, _outcome: &AnalysisOutcome) {}
}
