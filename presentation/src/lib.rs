//! Presentation layer for news-verdict
//!
//! This crate contains CLI definitions, outcome formatters,
//! progress reporters, and the interactive session.

pub mod cli;
pub mod interactive;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use interactive::InteractiveSession;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressMode, ProgressReporter, SimpleProgress};
