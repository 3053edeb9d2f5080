//! Report structures combining findings, score, and generation metadata

use crate::matching::{Findings, MatchResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Taxonomy entries detected in the resume
    pub resume_findings: Findings,

    /// Taxonomy entries detected in the job description
    pub job_findings: Findings,

    /// Score and missing-skills gap report
    pub result: MatchResult,

    /// Report metadata and generation info
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub resume_file: String,
    pub job_source: String,
    pub taxonomy_entries: usize,
    pub processing_time_ms: u64,
    pub matcher_version: String,
}

impl MatchReport {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        resume_findings: Findings,
        job_findings: Findings,
        result: MatchResult,
        resume_file: String,
        job_source: String,
        taxonomy_entries: usize,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            resume_findings,
            job_findings,
            result,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                resume_file,
                job_source,
                taxonomy_entries,
                processing_time_ms,
                matcher_version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}
