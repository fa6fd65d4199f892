// src/types/submission.rs
use crate::error::ValidationError;

/// A resume file as the user handed it over. The upload side constrains
/// uploads to PDF; we only care that a file is present at all.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub file_name: String,
    pub content: Vec<u8>,
}

/// Everything the user has provided so far. Rebuilt whenever the selected
/// file or the job description text changes; read (not consumed) at
/// submission time.
#[derive(Debug, Clone, Default)]
pub struct SubmissionInput {
    pub document: Option<ResumeDocument>,
    pub job_description: String,
}

impl SubmissionInput {
    pub fn new(document: Option<ResumeDocument>, job_description: impl Into<String>) -> Self {
        Self {
            document,
            job_description: job_description.into(),
        }
    }

    /// Check that a submission is allowed: a document must be selected and
    /// the job description must contain something other than whitespace.
    /// Returns the parts the transport layer needs. The text is sent as
    /// typed, trimming is only for the emptiness check.
    pub fn validated(&self) -> Result<(&ResumeDocument, &str), ValidationError> {
        let document = self
            .document
            .as_ref()
            .ok_or(ValidationError::MissingResume)?;

        if self.job_description.trim().is_empty() {
            return Err(ValidationError::EmptyJobDescription);
        }

        Ok((document, self.job_description.as_str()))
    }
}
