//! Keyword-overlap match scoring between a resume and a job description

use crate::config::ScreeningConfig;
use crate::processing::tokenizer::KeywordExtractor;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Junior,
    #[serde(rename = "Mid-Level")]
    MidLevel,
    Senior,
    Lead,
}

impl ExperienceLevel {
    /// Classify a score with the standard 85 / 70 / 50 thresholds.
    pub fn from_score(score: u8) -> Self {
        Self::classify(score, &ScreeningConfig::default())
    }

    /// Thresholds are strict: a score equal to a threshold falls into the
    /// level below it.
    pub fn classify(score: u8, config: &ScreeningConfig) -> Self {
        if score > config.lead_threshold {
            ExperienceLevel::Lead
        } else if score > config.senior_threshold {
            ExperienceLevel::Senior
        } else if score > config.mid_level_threshold {
            ExperienceLevel::MidLevel
        } else {
            ExperienceLevel::Junior
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "Junior",
            ExperienceLevel::MidLevel => "Mid-Level",
            ExperienceLevel::Senior => "Senior",
            ExperienceLevel::Lead => "Lead",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a single screening run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Percentage of job keywords found in the resume (0-100)
    pub match_score: u8,
    pub experience_level: ExperienceLevel,
    /// Matched resume keywords in resume order, capped
    pub matched_keywords: Vec<String>,
    pub skills_match_count: usize,
    pub total_skills_considered: usize,
}

/// Scores resumes against job descriptions by keyword overlap.
///
/// This is a token-overlap approximation, not a semantic matcher. The
/// scorer holds no mutable state and can be shared across threads.
#[derive(Debug, Clone)]
pub struct MatchScorer {
    extractor: KeywordExtractor,
    config: ScreeningConfig,
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new(ScreeningConfig::default())
    }
}

impl MatchScorer {
    pub fn new(config: ScreeningConfig) -> Self {
        Self {
            extractor: KeywordExtractor::new(config.min_keyword_length),
            config,
        }
    }

    pub fn config(&self) -> &ScreeningConfig {
        &self.config
    }

    pub fn score(&self, resume_text: &str, job_description_text: &str) -> MatchResult {
        let resume_keywords = self.extractor.extract(resume_text);
        let job_keywords = self.extractor.extract(job_description_text);

        let job_set: HashSet<&str> = job_keywords.iter().map(String::as_str).collect();
        let matched: Vec<String> = resume_keywords
            .into_iter()
            .filter(|keyword| job_set.contains(keyword.as_str()))
            .collect();

        let match_score = match_percentage(matched.len(), job_keywords.len());
        let experience_level = ExperienceLevel::classify(match_score, &self.config);

        debug!(
            "Matched {} resume keywords against {} job keywords ({}%)",
            matched.len(),
            job_keywords.len(),
            match_score
        );

        let matched_keywords: Vec<String> = matched
            .into_iter()
            .take(self.config.max_matched_keywords)
            .collect();
        let total_skills_considered = job_keywords.len().min(self.config.max_considered_skills);

        MatchResult {
            match_score,
            experience_level,
            skills_match_count: matched_keywords.len(),
            total_skills_considered,
            matched_keywords,
        }
    }
}

/// `round(100 * matched / total)` with halves rounded up, clamped to 100.
/// Resume duplicates can push the raw ratio above 1.
fn match_percentage(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let ratio = matched as f64 / total as f64;
    (ratio * 100.0).round().min(100.0) as u8
}

/// Score with the standard configuration.
pub fn score(resume_text: &str, job_description_text: &str) -> MatchResult {
    static DEFAULT_SCORER: OnceLock<MatchScorer> = OnceLock::new();
    DEFAULT_SCORER
        .get_or_init(MatchScorer::default)
        .score(resume_text, job_description_text)
}
