// src/service_client.rs
//! HTTP adapter for the resume analysis service - multipart upload in,
//! decoded `AnalysisResult` out.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use tracing::{error, info};

use crate::error::TransportError;
use crate::types::{AnalysisResult, ResumeDocument};

const ANALYZE_ENDPOINT: &str = "/api/resume/analyze";

// Multipart field names are part of the service contract.
const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "job_description";

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Seam between the orchestrator and whatever actually performs the
/// analysis exchange.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn submit(
        &self,
        document: &ResumeDocument,
        job_description: &str,
    ) -> Result<AnalysisResult, TransportError>;
}

#[async_trait]
impl<S: AnalysisService + ?Sized> AnalysisService for Arc<S> {
    async fn submit(
        &self,
        document: &ResumeDocument,
        job_description: &str,
    ) -> Result<AnalysisResult, TransportError> {
        (**self).submit(document, job_description).await
    }
}

/// Stateless client for the analysis endpoint; safe to reuse across
/// submissions.
pub struct AnalysisClient {
    client: reqwest::Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(base_url: String) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl AnalysisService for AnalysisClient {
    async fn submit(
        &self,
        document: &ResumeDocument,
        job_description: &str,
    ) -> Result<AnalysisResult, TransportError> {
        let url = format!("{}{}", self.base_url, ANALYZE_ENDPOINT);

        let form = Form::new()
            .part(
                RESUME_FIELD,
                Part::bytes(document.content.clone())
                    .file_name(document.file_name.clone())
                    .mime_str("application/pdf")?,
            )
            .text(JOB_DESCRIPTION_FIELD, job_description.to_string());

        info!("Calling resume analysis service: {}", url);

        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("Analysis service error response ({}): {}", status, body);
        }

        decode_response(status, &body)
    }
}

/// Turn a raw HTTP exchange outcome into an `AnalysisResult`. Any non-2xx
/// status or undecodable body is a transport failure, never a partial
/// result.
fn decode_response(status: StatusCode, body: &str) -> Result<AnalysisResult, TransportError> {
    if !status.is_success() {
        return Err(TransportError::Status {
            status,
            body: body.to_string(),
        });
    }

    serde_json::from_str(body).map_err(TransportError::MalformedResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_decodes_exactly() {
        let result = decode_response(
            StatusCode::OK,
            r#"{"match_score": 82, "skills_detected": ["Python", "SQL"]}"#,
        )
        .unwrap();

        assert_eq!(result.match_score, 82.0);
        assert_eq!(result.skills_detected, vec!["Python", "SQL"]);
    }

    #[test]
    fn empty_skill_list_is_not_an_error() {
        let result = decode_response(
            StatusCode::OK,
            r#"{"match_score": 0, "skills_detected": []}"#,
        )
        .unwrap();

        assert!(result.skills_detected.is_empty());
    }

    #[test]
    fn non_success_status_maps_to_status_error() {
        let err = decode_response(StatusCode::INTERNAL_SERVER_ERROR, "boom").unwrap_err();

        match err {
            TransportError::Status { status, body } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, "boom");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[test]
    fn missing_required_field_is_malformed() {
        let err = decode_response(StatusCode::OK, r#"{"skills_detected": []}"#).unwrap_err();
        assert!(matches!(err, TransportError::MalformedResponse(_)));
    }

    #[test]
    fn non_json_body_is_malformed() {
        let err = decode_response(StatusCode::OK, "<html>proxy error</html>").unwrap_err();
        assert!(matches!(err, TransportError::MalformedResponse(_)));
    }
}
