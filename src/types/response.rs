// src/types/response.rs
use serde::{Deserialize, Serialize};

/// Analysis returned by the resume analysis service. `match_score` and
/// `skills_detected` are mandatory; the service may omit the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub match_score: f64,
    pub skills_detected: Vec<String>,
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub improvements: String,
    #[serde(default)]
    pub job_suggestions: Vec<String>,
    #[serde(default)]
    pub resume_preview: String,
}
