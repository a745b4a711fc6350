//! CLI interface for the resume screener

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-screener")]
#[command(about = "Keyword-overlap resume screening and HR help assistant")]
#[command(long_about = "Score a resume against a job description by keyword overlap, or ask the HR assistant a question")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Screen a resume against a job description
    Screen(ScreenArgs),

    /// Ask the HR assistant a question
    Ask {
        /// Question text; prints the greeting when omitted
        message: Vec<String>,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Args)]
pub struct ScreenArgs {
    /// Path to resume file (PDF, TXT, MD)
    #[arg(short, long)]
    pub resume: PathBuf,

    /// Path to job description file (PDF, TXT, MD)
    #[arg(short, long, conflicts_with = "job_text", required_unless_present = "job_text")]
    pub job: Option<PathBuf>,

    /// Job description given inline
    #[arg(long)]
    pub job_text: Option<String>,

    /// Output format: console, json, markdown
    #[arg(short, long)]
    pub output: Option<String>,

    /// List every matched keyword and the input sources
    #[arg(short, long)]
    pub detailed: bool,

    /// Save output to file instead of printing it
    #[arg(short, long)]
    pub save: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").unwrap_err().contains("Supported"));
    }

    #[test]
    fn test_screen_requires_a_job_source() {
        assert!(Cli::try_parse_from(["resume-screener", "screen", "--resume", "cv.txt"]).is_err());
        assert!(Cli::try_parse_from([
            "resume-screener",
            "screen",
            "--resume",
            "cv.txt",
            "--job",
            "job.txt",
            "--job-text",
            "rust developer",
        ])
        .is_err());

        let cli = Cli::try_parse_from([
            "resume-screener",
            "screen",
            "-r",
            "cv.txt",
            "--job-text",
            "rust developer",
            "-o",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Screen(args) => {
                assert_eq!(args.job_text.as_deref(), Some("rust developer"));
                assert_eq!(args.output.as_deref(), Some("json"));
            }
            _ => panic!("expected screen command"),
        }
    }

    #[test]
    fn test_screen_accepts_pdf_job_file() {
        let cli = Cli::try_parse_from(["resume-screener", "screen", "-r", "cv.pdf", "-j", "posting.pdf"]).unwrap();
        match cli.command {
            Commands::Screen(args) => {
                assert_eq!(args.job, Some(PathBuf::from("posting.pdf")));
                assert!(args.job_text.is_none());
            }
            _ => panic!("expected screen command"),
        }
    }

    #[test]
    fn test_ask_collects_words() {
        let cli = Cli::try_parse_from(["resume-screener", "ask", "how", "do", "i", "run", "payroll"]).unwrap();
        match cli.command {
            Commands::Ask { message } => assert_eq!(message.join(" "), "how do i run payroll"),
            _ => panic!("expected ask command"),
        }
    }
}
