// src/orchestrator.rs
//! Drives a submission attempt from validation through the network exchange
//! and owns the single request state the UI renders from.

use tracing::{error, info};

use crate::error::ValidationError;
use crate::service_client::AnalysisService;
use crate::types::{AnalysisResult, SubmissionInput};

/// The one line shown to the user for any remote failure. The underlying
/// cause goes to the log, never to the screen.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze resume. Please try again.";

/// Where the current (or last) submission attempt stands. Exactly one
/// variant holds at a time; loading indicators, error banners and the result
/// panel are all derived from this value.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Idle,
    Submitting,
    Succeeded(AnalysisResult),
    Failed(String),
}

impl RequestState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, RequestState::Submitting)
    }
}

/// How a call to [`Orchestrator::attempt_submit`] was handled.
#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
    /// The request ran to completion; the state is now Succeeded or Failed.
    Settled,
    /// Local validation rejected the input; nothing was sent and the state
    /// was not touched.
    Rejected(ValidationError),
    /// A submission is already in flight; this attempt was dropped.
    AlreadyInFlight,
}

pub struct Orchestrator<S> {
    service: S,
    state: RequestState,
}

impl<S: AnalysisService> Orchestrator<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: RequestState::Idle,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Validate `input` and, if it passes, run one analysis exchange.
    /// Overlapping attempts are rejected rather than queued; a new attempt
    /// after Succeeded or Failed starts a fresh request.
    pub async fn attempt_submit(&mut self, input: &SubmissionInput) -> SubmitOutcome {
        if self.state.is_submitting() {
            return SubmitOutcome::AlreadyInFlight;
        }

        let (document, job_description) = match input.validated() {
            Ok(parts) => parts,
            Err(err) => return SubmitOutcome::Rejected(err),
        };

        self.state = RequestState::Submitting;

        match self.service.submit(document, job_description).await {
            Ok(result) => {
                info!(
                    "Resume analysis succeeded with match score {}",
                    result.match_score
                );
                self.state = RequestState::Succeeded(result);
            }
            Err(err) => {
                error!("Resume analysis failed: {}", err);
                self.state = RequestState::Failed(ANALYSIS_FAILED_MESSAGE.to_string());
            }
        }

        SubmitOutcome::Settled
    }
}
