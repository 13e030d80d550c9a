//! Submit Analysis use case.
//!
//! [`AnalysisController`] owns the state the user sees (request state and the
//! last outcome) and turns one [`AnalysisInput`] into one [`AnalysisOutcome`]:
//!
//! 1. Reject blank input without touching the network
//! 2. Reject the submission if another one is already in flight
//! 3. Enter `InFlight`, drop the previous outcome, call the service once
//! 4. Map the service result to an outcome, store it, return to `Idle`
//!
//! Every path resolves to a renderable outcome; nothing is returned as `Err`.

use crate::ports::classification_service::{ClassificationService, ServiceError};
use crate::ports::progress::{AnalysisProgressNotifier, NoProgress};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};
use verdict_domain::util::preview;
use verdict_domain::{AnalysisInput, AnalysisOutcome, Classification, RequestState};

#[derive(Debug, Default)]
struct ControllerState {
    request: RequestState,
    outcome: Option<AnalysisOutcome>,
}

/// Classification request controller.
///
/// State lives behind a `std::sync::Mutex` that is never held across the
/// network call, so `outcome()`, `state()` and `clear()` stay responsive while
/// a submission is in flight.
pub struct AnalysisController {
    service: Arc<dyn ClassificationService>,
    state: Mutex<ControllerState>,
}

impl AnalysisController {
    pub fn new(service: Arc<dyn ClassificationService>) -> Self {
        Self {
            service,
            state: Mutex::new(ControllerState::default()),
        }
    }

    /// Submit with default (no-op) progress
    pub async fn submit(&self, input: &AnalysisInput) -> AnalysisOutcome {
        self.submit_with_progress(input, &NoProgress).await
    }

    /// Submit with progress callbacks
    pub async fn submit_with_progress(
        &self,
        input: &AnalysisInput,
        progress: &dyn AnalysisProgressNotifier,
    ) -> AnalysisOutcome {
        let request = {
            let mut state = self.lock();

            let request = match input.to_request() {
                Ok(request) => request,
                Err(e) => {
                    debug!("Rejecting submission: {}", e);
                    let outcome = AnalysisOutcome::from(e);
                    // The in-flight submission owns the displayed outcome.
                    if !state.request.is_in_flight() {
                        state.outcome = Some(outcome.clone());
                    }
                    return outcome;
                }
            };

            if state.request.is_in_flight() {
                warn!("Rejecting submission: another analysis is in flight");
                return AnalysisOutcome::busy_failure();
            }

            state.request = RequestState::InFlight;
            state.outcome = None;
            debug!("Request state: {}", state.request);
            request
        };

        // Resets to Idle even if this future is dropped mid-request.
        let guard = InFlightGuard { controller: self };

        info!(
            "Submitting analysis (title: {:?}, body: {} chars)",
            preview(&request.title, 60),
            request.text.chars().count()
        );
        progress.on_submit_start(&request);

        let result = self.service.classify(&request).await;
        let outcome = Self::outcome_for(result);

        guard.finish(outcome.clone());
        progress.on_submit_complete(&outcome);

        outcome
    }

    /// Discard the current outcome.
    ///
    /// An in-flight submission is unaffected and will still store its outcome.
    pub fn clear(&self) {
        self.lock().outcome = None;
    }

    /// The outcome currently on display, if any
    pub fn outcome(&self) -> Option<AnalysisOutcome> {
        self.lock().outcome.clone()
    }

    pub fn state(&self) -> RequestState {
        self.lock().request
    }

    pub fn is_in_flight(&self) -> bool {
        self.state().is_in_flight()
    }

    fn outcome_for(result: Result<Classification, ServiceError>) -> AnalysisOutcome {
        match result {
            Ok(classification) => {
                info!(
                    "Service classified news as {} ({}%)",
                    if classification.is_fake() { "fake" } else { "real" },
                    classification.confidence()
                );
                classification.into()
            }
            Err(ServiceError::Rejected { status, message }) => {
                warn!("Service returned status {}: {:?}", status, message);
                AnalysisOutcome::service_failure(status, message)
            }
            Err(e) => {
                warn!("Classification request failed: {}", e);
                AnalysisOutcome::transport_failure()
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, ControllerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Returns the controller to `Idle` when dropped.
struct InFlightGuard<'a> {
    controller: &'a AnalysisController,
}

impl InFlightGuard<'_> {
    fn finish(self, outcome: AnalysisOutcome) {
        self.controller.lock().outcome = Some(outcome);
        // Drop performs the Idle transition.
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.controller.lock();
        state.request = RequestState::Idle;
        debug!("Request state: {}", state.request);
    }
}
