//! Screening report that wraps a match result with a readable summary

use crate::processing::scorer::{ExperienceLevel, MatchResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningReport {
    #[serde(flatten)]
    pub result: MatchResult,

    /// One-line verdict shown next to the score
    pub analysis: String,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub resume_source: String,
    pub job_source: String,
    pub generated_at: DateTime<Utc>,
}

impl ScreeningReport {
    pub fn new(result: MatchResult, resume_source: impl Into<String>, job_source: impl Into<String>) -> Self {
        let analysis = analysis_summary(result.match_score, result.experience_level);
        Self {
            result,
            analysis,
            metadata: ReportMetadata {
                resume_source: resume_source.into(),
                job_source: job_source.into(),
                generated_at: Utc::now(),
            },
        }
    }

    pub fn skills_ratio(&self) -> String {
        format!(
            "{}/{}",
            self.result.skills_match_count, self.result.total_skills_considered
        )
    }
}

pub fn analysis_summary(match_score: u8, level: ExperienceLevel) -> String {
    format!(
        "Resume shows {}% match with job requirements. Candidate demonstrates {}-level expertise with strong alignment in key skill areas.",
        match_score,
        level.label().to_lowercase()
    )
}
