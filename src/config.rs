//! Configuration management for the resume screener

use crate::error::{Result, ScreenerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub screening: ScreeningConfig,
    pub upload: UploadConfig,
    pub output: OutputConfig,
}

/// Knobs of the keyword-overlap heuristic.
///
/// The defaults are the behaviour the screening contract is written
/// against; changing them produces a different (non-standard) score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreeningConfig {
    /// Tokens must be strictly longer than this to count as keywords
    pub min_keyword_length: usize,
    pub max_matched_keywords: usize,
    pub max_considered_skills: usize,
    pub lead_threshold: u8,
    pub senior_threshold: u8,
    pub mid_level_threshold: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub max_file_size_mb: u64,
    pub allowed_extensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub detailed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            min_keyword_length: 4,
            max_matched_keywords: 10,
            max_considered_skills: 15,
            lead_threshold: 85,
            senior_threshold: 70,
            mid_level_threshold: 50,
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: 10,
            allowed_extensions: vec!["pdf".to_string(), "txt".to_string(), "md".to_string()],
        }
    }
}

impl UploadConfig {
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb * 1024 * 1024
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color_output: true,
            detailed: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screening: ScreeningConfig::default(),
            upload: UploadConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    /// Load an explicit config file. A missing file yields the defaults and
    /// nothing is written; missing keys or sections take their defaults.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ScreenerError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ScreenerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-screener")
            .join("config.toml")
    }

    /// Reject configurations whose level thresholds are out of order.
    pub fn validate(&self) -> Result<()> {
        let s = &self.screening;
        if !(s.mid_level_threshold <= s.senior_threshold && s.senior_threshold <= s.lead_threshold) {
            return Err(ScreenerError::Configuration(format!(
                "Experience thresholds must be ordered mid-level <= senior <= lead (got {}, {}, {})",
                s.mid_level_threshold, s.senior_threshold, s.lead_threshold
            )));
        }
        if s.lead_threshold > 100 {
            return Err(ScreenerError::Configuration(
                "Lead threshold cannot exceed 100".to_string(),
            ));
        }
        if self.upload.allowed_extensions.is_empty() {
            return Err(ScreenerError::Configuration(
                "At least one upload extension must be allowed".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_screening_values() {
        let config = Config::default();
        assert_eq!(config.screening.min_keyword_length, 4);
        assert_eq!(config.screening.max_matched_keywords, 10);
        assert_eq!(config.screening.max_considered_skills, 15);
        assert_eq!(config.upload.max_file_size_bytes(), 10 * 1024 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip_preserves_format() {
        let mut config = Config::default();
        config.output.format = OutputFormat::Markdown;
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("format = \"markdown\""));
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_fills_missing_sections() {
        let parsed: Config = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(parsed.output.format, OutputFormat::Json);
        assert!(parsed.output.color_output);
        assert_eq!(parsed.screening, ScreeningConfig::default());
        assert_eq!(parsed.upload, UploadConfig::default());

        let parsed: Config = toml::from_str("[screening]\nlead_threshold = 90\n").unwrap();
        assert_eq!(parsed.screening.lead_threshold, 90);
        assert_eq!(parsed.screening.senior_threshold, 70);
    }

    #[test]
    fn test_load_from_missing_file_does_not_create_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(!path.exists());
    }

    #[test]
    fn test_save_then_load_from() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.upload.max_file_size_mb = 2;
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_from_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[screening\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(ScreenerError::Configuration(_))));
    }

    #[test]
    fn test_unordered_thresholds_rejected() {
        let mut config = Config::default();
        config.screening.senior_threshold = 90;
        assert!(matches!(config.validate(), Err(ScreenerError::Configuration(_))));
    }
}
