//! Text processing and match scoring

pub mod scorer;
pub mod tokenizer;

pub use scorer::{score, ExperienceLevel, MatchResult, MatchScorer};
