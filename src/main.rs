//! Resume screener: keyword-overlap resume screening tool

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use resume_screener::cli::{self, Cli, Commands, ConfigAction, ScreenArgs};
use resume_screener::config::Config;
use resume_screener::input::InputManager;
use resume_screener::output::{ReportGenerator, ScreeningReport};
use resume_screener::{FaqAssistant, MatchScorer, Result, ScreenerError};
use std::future::Future;
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Commands::Config { action: Some(ConfigAction::Path) } = &cli.command {
        let path = cli.config.clone().unwrap_or_else(Config::config_path);
        println!("{}", path.display());
        return;
    }

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_override: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Screen(args) => screen(args, &config).await?,

        Commands::Ask { message } => {
            let assistant = FaqAssistant::new()?;
            let message = message.join(" ");
            if message.trim().is_empty() {
                println!("{}", assistant.greeting());
            } else {
                println!("{}", assistant.respond(&message));
            }
        }

        Commands::Config { action } => {
            let config_path = config_override.clone().unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    let content = toml::to_string_pretty(&config)
                        .map_err(|e| ScreenerError::Configuration(format!("Failed to serialize config: {}", e)))?;
                    println!("⚙️  Current Configuration ({})\n", config_path.display());
                    println!("{}", content);
                }
                Some(ConfigAction::Reset) => {
                    match &config_override {
                        Some(path) => Config::default().save_to(path)?,
                        None => Config::default().save()?,
                    }
                    println!("✅ Configuration reset to defaults: {}", config_path.display());
                }
                Some(ConfigAction::Path) => {
                    println!("{}", config_path.display());
                }
            }
        }
    }

    Ok(())
}

async fn screen(args: ScreenArgs, config: &Config) -> Result<()> {
    info!("Starting resume screening");

    let output_format = match &args.output {
        Some(format) => cli::parse_output_format(format).map_err(ScreenerError::InvalidInput)?,
        None => config.output.format,
    };

    let mut input_manager = InputManager::new().with_upload_config(config.upload.clone());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));

    let extracted = finish_spinner(&spinner, read_inputs(&mut input_manager, &args, &spinner)).await;
    let (resume_text, job_text, job_source) = extracted?;

    if job_text.trim().is_empty() {
        return Err(ScreenerError::InvalidInput("Please enter a job description".to_string()));
    }
    if resume_text.trim().is_empty() {
        warn!("Resume text is empty, the match score will be 0");
    }

    debug!("Resume preview: {}", truncate_text(&resume_text, 200));
    debug!("Job description preview: {}", truncate_text(&job_text, 200));

    let scorer = MatchScorer::new(config.screening.clone());
    debug!(
        "Keywords must be longer than {} characters",
        scorer.config().min_keyword_length
    );
    let result = scorer.score(&resume_text, &job_text);
    info!(
        "Screening complete: {}% ({})",
        result.match_score, result.experience_level
    );

    let report = ScreeningReport::new(result, args.resume.display().to_string(), job_source);

    let use_colors = config.output.color_output && args.save.is_none();
    let detailed = args.detailed || config.output.detailed;
    let generator = ReportGenerator::with_options(use_colors, detailed, true, true);
    let rendered = generator.generate_report(&report, output_format)?;

    match &args.save {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to save report to {}", path.display()))?;
            println!("📁 Report saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Extract resume text plus the job description text and its source label.
async fn read_inputs(
    input_manager: &mut InputManager,
    args: &ScreenArgs,
    spinner: &ProgressBar,
) -> Result<(String, String, String)> {
    spinner.set_message("Reading resume...");
    let resume_text = input_manager
        .extract_text(&args.resume)
        .await
        .map_err(|e| ScreenerError::InvalidInput(format!("Resume file: {}", e)))?;

    let (job_text, job_source) = match (&args.job, &args.job_text) {
        (Some(job), _) => {
            spinner.set_message("Reading job description...");
            let text = input_manager
                .extract_text(job)
                .await
                .map_err(|e| ScreenerError::InvalidInput(format!("Job description file: {}", e)))?;
            (text, job.display().to_string())
        }
        (None, Some(text)) => (text.clone(), "inline".to_string()),
        (None, None) => (String::new(), "inline".to_string()),
    };

    Ok((resume_text, job_text, job_source))
}

/// Await `task`, then clear the spinner whether it succeeded or not.
async fn finish_spinner<T>(spinner: &ProgressBar, task: impl Future<Output = Result<T>>) -> Result<T> {
    let outcome = task.await;
    spinner.finish_and_clear();
    outcome
}

/// Truncate text to at most `max_graphemes` user-visible characters
fn truncate_text(text: &str, max_graphemes: usize) -> String {
    let mut graphemes = text.graphemes(true);
    let head: String = graphemes.by_ref().take(max_graphemes).collect();
    if graphemes.next().is_some() {
        format!("{}...", head.trim_end())
    } else {
        head
    }
}
