//! Output formatter trait

use verdict_domain::{AnalysisOutcome, OutputFormat};

/// Trait for formatting analysis outcomes
pub trait OutputFormatter {
    /// Human-readable rendering
    fn format(&self, outcome: &AnalysisOutcome) -> String;

    /// Machine-readable rendering
    fn format_json(&self, outcome: &AnalysisOutcome) -> String;

    /// Dispatch on the configured format
    fn render(&self, outcome: &AnalysisOutcome, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.format(outcome),
            OutputFormat::Json => self.format_json(outcome),
        }
    }
}
