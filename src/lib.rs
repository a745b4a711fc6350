//! Resume screener library

pub mod assistant;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use assistant::FaqAssistant;
pub use config::Config;
pub use error::{Result, ScreenerError};
pub use output::ScreeningReport;
pub use processing::{score, ExperienceLevel, MatchResult, MatchScorer};
