// src/types/mod.rs
pub mod response;
pub mod submission;

pub use response::AnalysisResult;
pub use submission::{ResumeDocument, SubmissionInput};
