// src/cli.rs
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::orchestrator::{Orchestrator, RequestState, SubmitOutcome};
use crate::service_client::{AnalysisClient, DEFAULT_BASE_URL};
use crate::types::{ResumeDocument, SubmissionInput};

#[derive(Parser)]
#[command(name = "resumatch")]
#[command(about = "Analyze a resume against a job description")]
pub struct Cli {
    /// Path to the resume PDF
    pub resume: PathBuf,

    /// Job description text
    #[arg(long, conflicts_with = "job_file")]
    pub job_description: Option<String>,

    /// Read the job description from a file instead
    #[arg(long)]
    pub job_file: Option<PathBuf>,
}

pub async fn run(cli: Cli) -> Result<()> {
    let job_description = match (&cli.job_description, &cli.job_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read job description: {}", path.display()))?,
        // Left empty so validation produces the usual prompt.
        (None, None) => String::new(),
    };

    let file_name = cli
        .resume
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("resume.pdf")
        .to_string();

    let content = tokio::fs::read(&cli.resume)
        .await
        .with_context(|| format!("Failed to read resume file: {}", cli.resume.display()))?;

    let input = SubmissionInput::new(Some(ResumeDocument { file_name, content }), job_description);

    let client = AnalysisClient::new(DEFAULT_BASE_URL.to_string())?;
    let mut orchestrator = Orchestrator::new(client);

    match orchestrator.attempt_submit(&input).await {
        SubmitOutcome::Rejected(err) => anyhow::bail!("{}", err),
        SubmitOutcome::AlreadyInFlight => anyhow::bail!("An analysis is already in progress"),
        SubmitOutcome::Settled => {}
    }

    match orchestrator.state() {
        RequestState::Succeeded(result) => {
            println!("🎯 Match score: {}%", result.match_score);

            if result.skills_detected.is_empty() {
                println!("Detected skills: No skills detected");
            } else {
                println!("Detected skills: {}", result.skills_detected.join(", "));
            }

            if !result.matched_skills.is_empty() {
                println!("Matched skills: {}", result.matched_skills.join(", "));
            }
            if !result.missing_skills.is_empty() {
                println!("Missing skills: {}", result.missing_skills.join(", "));
            }
            if !result.summary.is_empty() {
                println!("\nSummary: {}", result.summary);
            }
            if !result.improvements.is_empty() {
                println!("Improvements: {}", result.improvements);
            }
            if !result.job_suggestions.is_empty() {
                println!("Suggested roles: {}", result.job_suggestions.join(", "));
            }

            Ok(())
        }
        RequestState::Failed(message) => anyhow::bail!("{}", message),
        // A settled attempt always lands in Succeeded or Failed.
        RequestState::Idle | RequestState::Submitting => Ok(()),
    }
}
