//! Configuration loading for news-verdict
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `NEWS_VERDICT_API_URL`, `NEWS_VERDICT_TIMEOUT_SECONDS`
//! 2. `--config <path>` specified file
//! 3. Project root: `./news-verdict.toml` or `./.news-verdict.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/news-verdict/config.toml`
//! 5. Default values
//!
//! CLI flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{ConfigValidationError, FileConfig, FileOutputConfig, FileServiceConfig};
pub use loader::{ConfigLoader, ENV_API_URL, ENV_TIMEOUT_SECONDS};
