//! Progress reporting for analysis submissions

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use verdict_application::{AnalysisProgressNotifier, NoProgress};
use verdict_domain::{AnalysisOutcome, AnalysisRequest};

/// Shows a spinner on stderr while a request is in flight
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn describe(request: &AnalysisRequest) -> String {
        let chars = request.text.chars().count();
        if request.title.trim().is_empty() {
            format!("{} chars of body", chars)
        } else {
            format!("title + {} chars of body", chars)
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisProgressNotifier for ProgressReporter {
    fn on_submit_start(&self, request: &AnalysisRequest) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix("Analyzing");
        pb.set_message(Self::describe(request));
        pb.enable_steady_tick(Duration::from_millis(100));

        *self.spinner.lock().unwrap_or_else(PoisonError::into_inner) = Some(pb);
    }

    fn on_submit_complete(&self, _outcome: &AnalysisOutcome) {
        if let Some(pb) = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no spinner), for non-terminal stderr
pub struct SimpleProgress;

impl AnalysisProgressNotifier for SimpleProgress {
    fn on_submit_start(&self, request: &AnalysisRequest) {
        eprintln!(
            "{} {} ({})",
            "->".cyan(),
            "Analyzing".bold(),
            ProgressReporter::describe(request)
        );
    }

    fn on_submit_complete(&self, outcome: &AnalysisOutcome) {
        if outcome.is_success() {
            eprintln!("  {} done", "v".green());
        } else {
            eprintln!("  {} failed", "x".red());
        }
    }
}

/// How a submission reports progress on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    /// No output
    Quiet,
    /// Animated spinner ([`ProgressReporter`])
    Spinner,
    /// Plain lines ([`SimpleProgress`])
    Plain,
}

impl ProgressMode {
    /// Spinner on a terminal, plain lines when stderr is redirected
    pub fn select(show: bool, stderr_is_terminal: bool) -> Self {
        match (show, stderr_is_terminal) {
            (false, _) => ProgressMode::Quiet,
            (true, true) => ProgressMode::Spinner,
            (true, false) => ProgressMode::Plain,
        }
    }

    /// [`select`](Self::select) against the current stderr
    pub fn detect(show: bool) -> Self {
        Self::select(show, std::io::stderr().is_terminal())
    }

    /// Notifier for this mode; `reporter` is used for [`ProgressMode::Spinner`]
    pub fn notifier(self, reporter: &ProgressReporter) -> &dyn AnalysisProgressNotifier {
        match self {
            ProgressMode::Quiet => &NoProgress,
            ProgressMode::Spinner => reporter,
            ProgressMode::Plain => &SimpleProgress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_with_and_without_title() {
        assert_eq!(
            ProgressReporter::describe(&AnalysisRequest::new("abc", "")),
            "3 chars of body"
        );
        assert_eq!(
            ProgressReporter::describe(&AnalysisRequest::new("", "Headline")),
            "title + 0 chars of body"
        );
    }

    #[test]
    fn test_progress_mode_selection() {
        assert_eq!(ProgressMode::select(false, true), ProgressMode::Quiet);
        assert_eq!(ProgressMode::select(false, false), ProgressMode::Quiet);
        assert_eq!(ProgressMode::select(true, true), ProgressMode::Spinner);
        assert_eq!(ProgressMode::select(true, false), ProgressMode::Plain);
    }

    #[test]
    fn test_spinner_mode_uses_given_reporter() {
        let reporter = ProgressReporter::new();
        ProgressMode::Spinner
            .notifier(&reporter)
            .on_submit_start(&AnalysisRequest::new("text", ""));
        assert!(reporter.spinner.lock().unwrap().is_some());

        ProgressMode::Quiet
            .notifier(&reporter)
            .on_submit_complete(&AnalysisOutcome::transport_failure());
        assert!(reporter.spinner.lock().unwrap().is_some());

        reporter.on_submit_complete(&AnalysisOutcome::transport_failure());
    }

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_submit_start(&AnalysisRequest::new("text", "title"));
        assert!(reporter.spinner.lock().unwrap().is_some());

        reporter.on_submit_complete(&AnalysisOutcome::transport_failure());
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
