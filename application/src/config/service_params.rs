//! Service parameters - classification endpoint location and timeout.
//!
//! [`ServiceParams`] is resolved once at startup (defaults, config files,
//! environment, CLI flags) and handed to the HTTP adapter.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Path of the classification endpoint, relative to the base URL.
pub const PREDICT_PATH: &str = "/predict";

/// Classification service parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceParams {
    /// Base URL of the classification service (no trailing `/predict`).
    pub base_url: String,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ServiceParams {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ServiceParams {
    // ==================== Builder Methods ====================

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the classification endpoint.
    ///
    /// Trailing slashes on the base URL are ignored.
    pub fn predict_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), PREDICT_PATH)
    }
}
