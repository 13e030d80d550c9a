//! Console output formatter for analysis outcomes

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use verdict_domain::{AnalysisInput, AnalysisOutcome, Verdict};

/// Width of the confidence bar in cells
const BAR_WIDTH: usize = 40;

/// Formats analysis outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format an outcome as a verdict block or a warning line
    pub fn format(outcome: &AnalysisOutcome) -> String {
        match (outcome.verdict(), outcome.confidence()) {
            (Some(verdict), Some(confidence)) => Self::format_verdict(verdict, confidence),
            _ => format!(
                "{} {}\n",
                "!".yellow().bold(),
                outcome.message().unwrap_or_default().yellow()
            ),
        }
    }

    /// Format as JSON
    pub fn format_json(outcome: &AnalysisOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_verdict(verdict: Verdict, confidence: f64) -> String {
        let headline = match verdict {
            Verdict::Fake => verdict.label().red().bold(),
            Verdict::Real => verdict.label().green().bold(),
        };
        let bar = Self::confidence_bar(confidence, BAR_WIDTH);
        let bar = match verdict {
            Verdict::Fake => bar.red(),
            Verdict::Real => bar.green(),
        };

        let mut output = String::new();
        output.push_str(&Self::header());
        output.push('\n');
        output.push_str(&format!("{}\n", headline));
        output.push_str(&format!(
            "{} {}%\n",
            "Confidence:".cyan().bold(),
            Self::format_confidence(confidence).bold()
        ));
        output.push_str(&format!("{}\n", bar));
        output.push_str(&Self::footer());
        output
    }

    /// Render a percentage without trailing zeros (`87`, `87.5`, `33.33`)
    pub fn format_confidence(confidence: f64) -> String {
        let fixed = format!("{:.2}", confidence);
        fixed
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }

    /// Fixed-width bar filled in proportion to the confidence
    pub fn confidence_bar(confidence: f64, width: usize) -> String {
        let ratio = (confidence / 100.0).clamp(0.0, 1.0);
        let filled = (ratio * width as f64).round() as usize;
        format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
    }

    /// Show what is currently entered (interactive `/show`)
    pub fn format_input(input: &AnalysisInput) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{} {}\n",
            "Title:".cyan().bold(),
            Self::field_or_placeholder(input.title())
        ));
        output.push_str(&format!("{}\n", "Body:".cyan().bold()));
        match input.body().filter(|b| !b.trim().is_empty()) {
            Some(body) => output.push_str(&Self::indent(body, "  ")),
            None => output.push_str(&format!("  {}", "(empty)".dimmed())),
        }
        output.push('\n');
        output
    }

    fn field_or_placeholder(value: Option<&str>) -> String {
        match value.filter(|v| !v.trim().is_empty()) {
            Some(v) => v.to_string(),
            None => "(empty)".dimmed().to_string(),
        }
    }

    fn header() -> String {
        format!("{}", "=".repeat(BAR_WIDTH).cyan())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(BAR_WIDTH).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, outcome: &AnalysisOutcome) -> String {
        Self::format(outcome)
    }

    fn format_json(&self, outcome: &AnalysisOutcome) -> String {
        Self::format_json(outcome)
    }
}
