//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.
//!
//! ```toml
//! [service]
//! base_url = "http://127.0.0.1:5000"
//! timeout_seconds = 30
//!
//! [output]
//! format = "text"
//! color = true
//! ```

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use verdict_application::ServiceParams;
use verdict_application::config::service_params::DEFAULT_BASE_URL;
use verdict_domain::OutputFormat;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("service.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("service.base_url '{url}' is not a valid URL: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("service.base_url must use http or https, got '{0}'")]
    UnsupportedScheme(String),

    #[error("service.timeout_seconds cannot be 0")]
    InvalidTimeout,
}

/// Raw service configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServiceConfig {
    /// Base URL of the classification service
    pub base_url: String,
    /// Request timeout in seconds (unset waits indefinitely)
    pub timeout_seconds: Option<u64>,
}

impl Default for FileServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

/// Complete configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub service: FileServiceConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate values that deserialization alone cannot catch
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let base_url = self.service.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }

        let url = Url::parse(base_url).map_err(|e| ConfigValidationError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigValidationError::UnsupportedScheme(
                url.scheme().to_string(),
            ));
        }

        if self.service.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        Ok(())
    }

    /// Convert to the parameters the HTTP adapter consumes
    pub fn service_params(&self) -> ServiceParams {
        ServiceParams::default()
            .with_base_url(self.service.base_url.trim())
            .with_timeout(self.service.timeout_seconds.map(Duration::from_secs))
    }

    /// Render the effective configuration as TOML (for `--show-config`)
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FileConfig::default();
        assert_eq!(config.service.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: FileConfig = toml::from_str(
            r#"
            [service]
            timeout_seconds = 15

            [output]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.service.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.service.timeout_seconds, Some(15));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_rejects_empty_url() {
        let mut config = FileConfig::default();
        config.service.base_url = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyBaseUrl));
    }

    #[test]
    fn test_validate_rejects_unparseable_url() {
        let mut config = FileConfig::default();
        config.service.base_url = "http://bad host:5000".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let mut config = FileConfig::default();
        config.service.base_url = "ftp://example.com".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::UnsupportedScheme("ftp".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = FileConfig::default();
        config.service.timeout_seconds = Some(0);
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_service_params_conversion() {
        let mut config = FileConfig::default();
        config.service.base_url = " https://verify.example.org ".to_string();
        config.service.timeout_seconds = Some(20);

        let params = config.service_params();
        assert_eq!(params.base_url, "https://verify.example.org");
        assert_eq!(params.timeout, Some(Duration::from_secs(20)));
    }

    #[test]
    fn test_to_toml_round_trips_through_parser() {
        let rendered = FileConfig::default().to_toml().unwrap();
        assert!(rendered.contains("[service]"));
        let parsed: FileConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, FileConfig::default());
    }
}
