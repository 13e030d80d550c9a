//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};
use verdict_domain::AnalysisInput;

/// Output format for analysis outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Verdict headline with a confidence bar
    Text,
    /// Single JSON object
    Json,
}

impl From<OutputFormat> for verdict_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => verdict_domain::OutputFormat::Text,
            OutputFormat::Json => verdict_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for news-verdict
#[derive(Parser, Debug)]
#[command(name = "news-verdict")]
#[command(author, version, about = "Ask a classification service whether a news story is fake")]
#[command(long_about = r#"
news-verdict sends a news title and/or body to a classification service
(POST {base_url}/predict) and prints the verdict with its confidence.

At least one of the title or the body must contain non-whitespace text.

Configuration is loaded from (in priority order):
1. NEWS_VERDICT_API_URL / NEWS_VERDICT_TIMEOUT_SECONDS
2. --config <path>         Explicit config file
3. ./news-verdict.toml     Project-level config
4. ~/.config/news-verdict/config.toml   Global config
Command-line flags override all of them.

Example:
  news-verdict --title "Moon landing faked" "Sources say the footage was shot in a studio."
  news-verdict --body-file article.txt --output json
  cat article.txt | news-verdict --body-file -
  news-verdict --interactive --api-url http://localhost:8000
"#)]
pub struct Cli {
    /// News body to analyze
    pub body: Option<String>,

    /// News title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Read the news body from a file ("-" reads stdin)
    #[arg(long, value_name = "PATH", conflicts_with = "body")]
    pub body_file: Option<PathBuf>,

    /// Start an interactive session
    #[arg(short, long, conflicts_with_all = ["body", "body_file", "title"])]
    pub interactive: bool,

    /// Base URL of the classification service
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds (waits indefinitely when unset)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and effective values, then exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Collect the title and body given on the command line.
    ///
    /// Reads `--body-file` when present; `-` reads all of stdin.
    pub fn analysis_input(&self) -> std::io::Result<AnalysisInput> {
        let body = match &self.body_file {
            Some(path) => Some(read_body(path)?),
            None => self.body.clone(),
        };
        Ok(AnalysisInput::new(self.title.clone(), body))
    }
}

fn read_body(path: &Path) -> std::io::Result<String> {
    if path == Path::new("-") {
        let mut body = String::new();
        std::io::stdin().read_to_string(&mut body)?;
        Ok(body)
    } else {
        std::fs::read_to_string(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_one_shot_arguments() {
        let cli = Cli::try_parse_from([
            "news-verdict",
            "--title",
            "Headline",
            "Story text",
            "-o",
            "json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.title.as_deref(), Some("Headline"));
        assert_eq!(cli.body.as_deref(), Some("Story text"));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.interactive);
    }

    #[test]
    fn test_body_and_body_file_conflict() {
        let result = Cli::try_parse_from(["news-verdict", "text", "--body-file", "a.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_interactive_conflicts_with_input() {
        assert!(Cli::try_parse_from(["news-verdict", "-i", "--title", "x"]).is_err());
        assert!(Cli::try_parse_from(["news-verdict", "-i"]).is_ok());
    }

    #[test]
    fn test_analysis_input_keeps_raw_values() {
        let cli = Cli::try_parse_from(["news-verdict", "--title", "  padded  ", " body "]).unwrap();
        let input = cli.analysis_input().unwrap();
        assert_eq!(input.title(), Some("  padded  "));
        assert_eq!(input.body(), Some(" body "));
    }

    #[test]
    fn test_analysis_input_reads_body_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"from a file\n").unwrap();

        let args: Vec<std::ffi::OsString> = vec![
            "news-verdict".into(),
            "--body-file".into(),
            file.path().as_os_str().to_owned(),
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        let input = cli.analysis_input().unwrap();

        assert_eq!(input.body(), Some("from a file\n"));
        assert_eq!(input.title(), None);
    }

    #[test]
    fn test_missing_body_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let cli = Cli::try_parse_from([
            std::ffi::OsString::from("news-verdict"),
            "--body-file".into(),
            path.into_os_string(),
        ])
        .unwrap();

        assert!(cli.analysis_input().is_err());
    }

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            verdict_domain::OutputFormat::from(OutputFormat::Json),
            verdict_domain::OutputFormat::Json
        );
    }
}
