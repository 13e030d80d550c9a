//! CLI entrypoint for news-verdict
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use verdict_application::AnalysisController;
use verdict_infrastructure::{ConfigLoader, FileConfig, HttpClassificationService};
use verdict_presentation::{
    Cli, ConsoleFormatter, InteractiveSession, ProgressMode, ProgressReporter,
    output::formatter::OutputFormatter,
};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting news-verdict");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    }
    .map_err(|e| anyhow!("Failed to load configuration: {}", e))?;
    apply_cli_overrides(&mut config, &cli);

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    if cli.show_config {
        if !cli.no_config {
            println!("{}", ConfigLoader::describe_sources(cli.config.as_deref()));
            println!();
        }
        println!("Effective configuration:");
        println!("{}", config.to_toml()?);
        return Ok(ExitCode::SUCCESS);
    }

    config.validate()?;

    // === Dependency Injection ===
    let service = HttpClassificationService::new(&config.service_params())
        .context("Failed to create the HTTP client")?;
    info!("Classification endpoint: {}", service.endpoint());
    let controller = AnalysisController::new(Arc::new(service));

    // Interactive mode
    if cli.interactive {
        let mut session = InteractiveSession::new(controller)
            .with_output_format(config.output.format)
            .with_progress(!cli.quiet);
        session.run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    // One-shot mode
    let input = cli
        .analysis_input()
        .context("Failed to read the news body")?;

    let reporter = ProgressReporter::new();
    let progress = ProgressMode::detect(!cli.quiet).notifier(&reporter);

    let outcome = controller.submit_with_progress(&input, progress).await;
    println!("{}", ConsoleFormatter.render(&outcome, config.output.format));

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Initialize logging based on verbosity level, optionally mirroring to a file
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Command-line flags take precedence over every configuration source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(url) = &cli.api_url {
        config.service.base_url = url.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.service.timeout_seconds = Some(timeout);
    }
    if let Some(format) = cli.output {
        config.output.format = format.into();
    }
}
