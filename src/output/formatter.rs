//! Output formatters for screening reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::ScreeningReport;
use colored::{Color, Colorize};

const SCORE_BAR_WIDTH: usize = 30;

/// Trait for formatting screening reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and a score bar
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing results
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that dispatches to the formatter for a format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_bar(&self, score: u8) -> String {
        let filled = usize::from(score) * SCORE_BAR_WIDTH / 100;
        let bar = format!("{}{}", "■".repeat(filled), "·".repeat(SCORE_BAR_WIDTH - filled));
        self.colorize(&bar, score_color(score))
    }

    fn format_level_badge(&self, report: &ScreeningReport) -> String {
        let label = report.result.experience_level.label();
        if self.use_colors {
            format!("[{}]", label.color(score_color(report.result.match_score)).bold())
        } else {
            format!("[{}]", label)
        }
    }
}

fn score_color(score: u8) -> Color {
    match score {
        86..=100 => Color::Green,
        71..=85 => Color::BrightGreen,
        51..=70 => Color::Yellow,
        _ => Color::Red,
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let mut output = String::new();
        let result = &report.result;

        output.push_str(&self.format_header("📄 RESUME SCREENING", 1));
        output.push_str(&format!(
            "Generated: {}\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output.push_str(&self.format_header("Match Summary", 2));
        output.push_str(&format!(
            "Match Score:      {} {}%\n",
            self.format_score_bar(result.match_score),
            result.match_score
        ));
        output.push_str(&format!("Experience Level: {}\n", self.format_level_badge(report)));
        output.push_str(&format!("Key Skills Match: {}\n", report.skills_ratio()));
        output.push_str(&format!(
            "\n{} {}\n",
            self.colorize("Analysis:", Color::Cyan),
            report.analysis
        ));

        if !result.matched_keywords.is_empty() {
            output.push_str(&self.format_header("Matched Keywords", 3));
            if self.detailed {
                for (i, keyword) in result.matched_keywords.iter().enumerate() {
                    output.push_str(&format!("  {}. {}\n", i + 1, self.colorize(keyword, Color::Green)));
                }
            } else {
                output.push_str(&format!("  {}\n", result.matched_keywords.join(", ")));
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("Sources", 3));
            output.push_str(&format!("  Resume: {}\n", report.metadata.resume_source));
            output.push_str(&format!("  Job:    {}\n", report.metadata.job_source));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let mut output = String::new();
        let result = &report.result;

        output.push_str("# Resume Screening Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Resume:** `{}` | **Job:** `{}`\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.resume_source,
                report.metadata.job_source
            ));
        }

        output.push_str("| Metric | Value |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!("| Match Score | {}% |\n", result.match_score));
        output.push_str(&format!("| Experience Level | {} |\n", result.experience_level));
        output.push_str(&format!("| Key Skills Match | {} |\n\n", report.skills_ratio()));

        output.push_str(&format!("**Analysis:** {}\n\n", report.analysis));

        if !result.matched_keywords.is_empty() {
            output.push_str("## Matched Keywords\n\n");
            output.push_str(&format!("`{}`\n", result.matched_keywords.join("`, `")));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &ScreeningReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::scorer::score;

    fn sample_report() -> ScreeningReport {
        let result = score(
            "Experienced software engineer skilled in react, typescript, and graphql development",
            "Looking for a react developer with typescript and graphql experience",
        );
        ScreeningReport::new(result, "resume.txt", "job.txt")
    }

    #[test]
    fn test_console_plain_output() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_report(&sample_report()).unwrap();
        assert!(output.contains("50%"));
        assert!(output.contains("[Junior]"));
        assert!(output.contains("Key Skills Match: 3/6"));
        assert!(output.contains("react, typescript, graphql"));
        assert!(!output.contains("Sources"));
    }

    #[test]
    fn test_console_detailed_lists_keywords() {
        let formatter = ConsoleFormatter::new(false, true);
        let output = formatter.format_report(&sample_report()).unwrap();
        assert!(output.contains("  1. react"));
        assert!(output.contains("  3. graphql"));
        assert!(output.contains("Resume: resume.txt"));
    }

    #[test]
    fn test_score_bar_width() {
        let formatter = ConsoleFormatter::new(false, false);
        assert_eq!(formatter.format_score_bar(50).chars().filter(|c| *c == '■').count(), 15);
        assert_eq!(formatter.format_score_bar(100).chars().count(), SCORE_BAR_WIDTH);
        assert_eq!(formatter.format_score_bar(0).chars().filter(|c| *c == '■').count(), 0);
    }

    #[test]
    fn test_json_compact() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_report(&sample_report()).unwrap();
        assert!(output.contains("\"matchScore\":50"));
        assert!(!output.contains('\n'));
    }

    #[test]
    fn test_markdown_table() {
        let formatter = MarkdownFormatter::new(false);
        let output = formatter.format_report(&sample_report()).unwrap();
        assert!(output.contains("| Match Score | 50% |"));
        assert!(output.contains("`react`, `typescript`, `graphql`"));
        assert!(!output.contains("**Generated:**"));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::with_options(false, false, true, true);
        let report = sample_report();
        let json = generator.generate_report(&report, OutputFormat::Json).unwrap();
        assert!(json.starts_with('{'));
        let md = generator.generate_report(&report, OutputFormat::Markdown).unwrap();
        assert!(md.starts_with("# Resume Screening Report"));
        assert_eq!(generator.json_formatter.supports_format(), OutputFormat::Json);
    }
}
