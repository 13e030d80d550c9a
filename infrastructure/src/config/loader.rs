//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Environment variable holding the classification service base URL
pub const ENV_API_URL: &str = "NEWS_VERDICT_API_URL";

/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT_SECONDS: &str = "NEWS_VERDICT_TIMEOUT_SECONDS";

const PROJECT_FILES: [&str; 2] = ["news-verdict.toml", ".news-verdict.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./news-verdict.toml` or `./.news-verdict.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/news-verdict/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Load defaults plus environment, skipping every file (for --no-config)
    pub fn load_without_files() -> Result<FileConfig, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Self::env_provider())
            .extract()
            .map_err(Box::new)
    }

    /// Build the merged figment without extracting it
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Self::env_provider())
    }

    /// Maps the two supported variables onto their config keys
    ///
    /// Variables set to an empty value count as unset.
    fn env_provider() -> Env {
        let present: Vec<&str> = [ENV_API_URL, ENV_TIMEOUT_SECONDS]
            .into_iter()
            .filter(|var| env_is_set(var))
            .collect();

        Env::raw()
            .only(&present)
            .map(|key| {
                if key.as_str().eq_ignore_ascii_case(ENV_API_URL) {
                    "service.base_url".into()
                } else {
                    "service.timeout_seconds".into()
                }
            })
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/news-verdict/config.toml if set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("news-verdict").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config sources being used (for --show-config)
    pub fn describe_sources(config_path: Option<&Path>) -> String {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        for var in [ENV_API_URL, ENV_TIMEOUT_SECONDS] {
            let marker = if env_is_set(var) { "SET  " } else { "     " };
            lines.push(format!("  [{}] Env:     {}", marker, var));
        }

        if let Some(path) = config_path {
            let marker = if path.exists() { "FOUND" } else { "MISSING" };
            lines.push(format!("  [{}] Explicit: {}", marker, path.display()));
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines.push(format!(
                "  [     ] Project: ./{} or ./{}",
                PROJECT_FILES[0], PROJECT_FILES[1]
            )),
        }

        if let Some(path) = Self::global_config_path() {
            let marker = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:  {}", marker, path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines.join("\n")
    }
}

fn env_is_set(var: &str) -> bool {
    std::env::var(var).is_ok_and(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use verdict_domain::OutputFormat;

    #[test]
    fn test_defaults_without_sources() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config, FileConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_global_config_path_contains_app_dir() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("news-verdict"));
    }

    #[test]
    fn test_project_file_overrides_global() {
        Jail::expect_with(|jail| {
            let xdg = jail.directory().join("xdg");
            jail.set_env("XDG_CONFIG_HOME", xdg.display());
            std::fs::create_dir_all(xdg.join("news-verdict")).map_err(|e| e.to_string())?;
            jail.create_file(
                "xdg/news-verdict/config.toml",
                r#"
                [service]
                base_url = "http://global:1"
                timeout_seconds = 9

                [output]
                format = "json"
                "#,
            )?;
            jail.create_file(
                "news-verdict.toml",
                r#"
                [service]
                base_url = "http://project:2"
                "#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.service.base_url, "http://project:2");
            assert_eq!(config.service.timeout_seconds, Some(9));
            assert_eq!(config.output.format, OutputFormat::Json);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
            jail.create_file(
                ".news-verdict.toml",
                r#"
                [service]
                base_url = "http://project:2"
                "#,
            )?;
            jail.create_file(
                "custom.toml",
                r#"
                [service]
                base_url = "http://explicit:3"
                "#,
            )?;

            let config = ConfigLoader::load(Some(Path::new("custom.toml"))).map_err(|e| *e)?;
            assert_eq!(config.service.base_url, "http://explicit:3");
            Ok(())
        });
    }

    #[test]
    fn test_environment_overrides_files() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
            jail.create_file(
                "news-verdict.toml",
                r#"
                [service]
                base_url = "http://project:2"
                timeout_seconds = 5
                "#,
            )?;
            jail.set_env(ENV_API_URL, "https://classifier.example.com");
            jail.set_env(ENV_TIMEOUT_SECONDS, "45");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.service.base_url, "https://classifier.example.com");
            assert_eq!(config.service.timeout_seconds, Some(45));
            Ok(())
        });
    }

    #[test]
    fn test_empty_environment_falls_back_to_default() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
            jail.set_env(ENV_API_URL, "");
            jail.set_env(ENV_TIMEOUT_SECONDS, "  ");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.service, FileConfig::default().service);
            assert!(config.validate().is_ok());
            Ok(())
        });
    }

    #[test]
    fn test_empty_environment_keeps_file_value() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
            jail.create_file(
                "news-verdict.toml",
                r#"
                [service]
                base_url = "http://project:2"
                "#,
            )?;
            jail.set_env(ENV_API_URL, "");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.service.base_url, "http://project:2");
            Ok(())
        });
    }

    #[test]
    fn test_load_without_files_still_reads_environment() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "news-verdict.toml",
                r#"
                [output]
                format = "json"
                "#,
            )?;
            jail.set_env(ENV_API_URL, "http://from-env:7000");

            let config = ConfigLoader::load_without_files().map_err(|e| *e)?;
            assert_eq!(config.service.base_url, "http://from-env:7000");
            assert_eq!(config.output.format, OutputFormat::Text);
            Ok(())
        });
    }

    #[test]
    fn test_unrelated_environment_is_ignored() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
            jail.set_env("NEWS_VERDICT_OTHER", "ignored");
            jail.set_env("BASE_URL", "http://nope");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.service, FileConfig::default().service);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
            jail.create_file("news-verdict.toml", "[service\nbase_url = ")?;

            assert!(ConfigLoader::load(None).is_err());
            Ok(())
        });
    }
}
