pub mod cli;
pub mod error;
pub mod orchestrator;
pub mod service_client;
pub mod types;

pub use error::{TransportError, ValidationError};
pub use orchestrator::{Orchestrator, RequestState, SubmitOutcome, ANALYSIS_FAILED_MESSAGE};
pub use service_client::{AnalysisClient, AnalysisService, DEFAULT_BASE_URL};
pub use types::{AnalysisResult, ResumeDocument, SubmissionInput};
