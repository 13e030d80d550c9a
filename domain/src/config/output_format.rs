//! Output format value object

use serde::{Deserialize, Serialize};

/// How an analysis outcome is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable verdict with a confidence bar (default)
    #[default]
    Text,
    /// Single JSON object
    Json,
}
