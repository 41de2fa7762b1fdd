//! Configuration management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Menu bar presentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Title shown in the status bar next to the icon
    #[serde(default = "default_title")]
    pub title: String,
    /// Whether the menu ends with a quit entry
    #[serde(default = "default_show_quit")]
    pub show_quit: bool,
    /// Label of the quit entry
    #[serde(default = "default_quit_label")]
    pub quit_label: String,
}

fn default_title() -> String {
    "Sleeper".to_string()
}
fn default_show_quit() -> bool {
    true
}
fn default_quit_label() -> String {
    "Quit".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            show_quit: default_show_quit(),
            quit_label: default_quit_label(),
        }
    }
}

/// Sleep toggle configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SleepConfig {
    /// Initial check state of "Allow computer to sleep"
    #[serde(default)]
    pub allowed_on_start: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub sleep: SleepConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file, falling back to defaults if it doesn't exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "sleeper", "Sleeper")
            .context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    /// Get the default configuration embedded in the binary
    pub fn default_config_str() -> &'static str {
        include_str!("../../config/default.toml")
    }
}

/// Log filter to use before the config is known to be valid.
/// A config that failed to load still gets its error logged at the default level.
pub fn startup_log_filter(loaded: &Result<Config>) -> &str {
    match loaded {
        Ok(config) => &config.log.filter,
        Err(_) => "info",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.app.title, "Sleeper");
        assert!(config.app.show_quit);
        assert_eq!(config.app.quit_label, "Quit");
        assert!(!config.sleep.allowed_on_start);
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn test_embedded_default_matches_defaults() {
        let parsed: Config = toml::from_str(Config::default_config_str()).unwrap();
        let defaults = Config::default();
        assert_eq!(parsed.app.title, defaults.app.title);
        assert_eq!(parsed.app.show_quit, defaults.app.show_quit);
        assert_eq!(parsed.app.quit_label, defaults.app.quit_label);
        assert_eq!(parsed.sleep.allowed_on_start, defaults.sleep.allowed_on_start);
        assert_eq!(parsed.log.filter, defaults.log.filter);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: Config = toml::from_str("[sleep]\nallowed_on_start = true\n").unwrap();
        assert!(parsed.sleep.allowed_on_start);
        assert_eq!(parsed.app.title, "Sleeper");
        assert_eq!(parsed.log.filter, "info");
    }

    #[test]
    fn test_startup_log_filter() {
        let mut config = Config::default();
        config.log.filter = "sleeper=trace".to_string();
        assert_eq!(startup_log_filter(&Ok(config)), "sleeper=trace");

        let failed: Result<Config> = Err(anyhow::anyhow!("bad toml"));
        assert_eq!(startup_log_filter(&failed), "info");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.app.title, config.app.title);
    }
}
