// src/error.rs
use reqwest::StatusCode;
use thiserror::Error;

/// Local input rejection. No network call is made and the request state is
/// left untouched; the message is safe to show to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please upload a resume before analyzing.")]
    MissingResume,
    #[error("Please enter a job description before analyzing.")]
    EmptyJobDescription,
}

/// Anything that went wrong between sending the request and decoding the
/// response. Rendered to the user as one generic failure line; the variants
/// exist for the operational log.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to analysis service failed")]
    Request(#[from] reqwest::Error),
    #[error("analysis service returned status {status}")]
    Status { status: StatusCode, body: String },
    #[error("analysis service returned a malformed response")]
    MalformedResponse(#[source] serde_json::Error),
}
