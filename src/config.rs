//! Logging configuration
//!
//! Loaded from an optional TOML file, then overridden by environment
//! variables.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::logging::{Severity, DEFAULT_RETENTION_DAYS};

/// Environment variable pointing at an explicit config file
pub const CONFIG_PATH_ENV: &str = "BOT_LOG_CONFIG";
/// Environment variable overriding the logs directory
pub const LOG_DIR_ENV: &str = "LOG_DIR";
/// Environment variable overriding the threshold name
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
/// Environment variable overriding the retention period
pub const LOG_RETENTION_ENV: &str = "LOG_RETENTION_DAYS";

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the daily `bot-YYYY-MM-DD.log` files
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    /// Threshold name: "error", "warn", "info" or "debug"
    ///
    /// Unknown names fall back to info.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Days to keep old log files (default: 7)
    #[serde(default = "default_retention_days")]
    pub retention_days: u64,
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_retention_days() -> u64 {
    DEFAULT_RETENTION_DAYS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            log_level: default_log_level(),
            retention_days: default_retention_days(),
        }
    }
}

impl Config {
    /// Load from the default config file, then apply environment overrides
    ///
    /// Also returns a description of every override that was rejected, to be
    /// logged once logging is up.
    pub fn load() -> Result<(Self, Vec<String>)> {
        let mut config = Self::load_from(&config_file_path())?;
        let rejected = config.apply_overrides(|key| std::env::var(key).ok());
        Ok((config, rejected))
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            toml::from_str(&content).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// production)
    ///
    /// Empty values are ignored. Retention values that are not whole numbers
    /// are rejected and described in the returned list.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut rejected = Vec::new();

        if let Some(dir) = lookup(LOG_DIR_ENV) {
            self.log_dir = PathBuf::from(dir);
        }
        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            self.log_level = level.trim().to_string();
        }
        if let Some(days) = lookup(LOG_RETENTION_ENV) {
            match days.trim().parse() {
                Ok(days) => self.retention_days = days,
                Err(_) => rejected.push(format!(
                    "Ignoring {}={:?}: not a number of days",
                    LOG_RETENTION_ENV, days
                )),
            }
        }

        rejected
    }

    /// The threshold named by `log_level`
    pub fn severity(&self) -> Severity {
        Severity::parse(&self.log_level)
    }
}

/// Get the path to the config file
///
/// Uses `BOT_LOG_CONFIG` when set, otherwise `discord-bot/logging.toml` under
/// the user config directory, falling back to `./logging.toml`.
pub fn config_file_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .map(|d| d.join("discord-bot").join("logging.toml"))
        .unwrap_or_else(|| PathBuf::from("logging.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.retention_days, 7);
        assert_eq!(config.severity(), Severity::Info);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: Config = toml::from_str("log_level = \"debug\"").unwrap();
        assert_eq!(parsed.severity(), Severity::Debug);
        assert_eq!(parsed.log_dir, PathBuf::from("logs"));
        assert_eq!(parsed.retention_days, 7);
    }

    #[test]
    fn test_load_from_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logging.toml");
        std::fs::write(
            &path,
            "log_dir = \"/var/log/bot\"\nlog_level = \"warn\"\nretention_days = 30\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.log_dir, PathBuf::from("/var/log/bot"));
        assert_eq!(config.severity(), Severity::Warn);
        assert_eq!(config.retention_days, 30);
    }

    #[test]
    fn test_load_from_invalid_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logging.toml");
        std::fs::write(&path, "retention_days = \"forever\"").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        let rejected = config.apply_overrides(env(&[
            ("LOG_DIR", "/tmp/bot-logs"),
            ("LOG_LEVEL", "debug"),
            ("LOG_RETENTION_DAYS", "14"),
        ]));

        assert!(rejected.is_empty());
        assert_eq!(config.log_dir, PathBuf::from("/tmp/bot-logs"));
        assert_eq!(config.severity(), Severity::Debug);
        assert_eq!(config.retention_days, 14);
    }

    #[test]
    fn test_env_overrides_ignore_empty_and_invalid_values() {
        let mut config = Config::default();
        let rejected = config.apply_overrides(env(&[
            ("LOG_DIR", ""),
            ("LOG_LEVEL", "  "),
            ("LOG_RETENTION_DAYS", "a week"),
        ]));

        assert_eq!(config, Config::default());
        // Only the bad retention value is reported; blanks are skipped silently
        assert_eq!(rejected.len(), 1);
        assert!(rejected[0].contains("LOG_RETENTION_DAYS=\"a week\""));
    }

    #[test]
    fn test_unknown_level_degrades_to_info() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("LOG_LEVEL", "verbose")]));
        assert_eq!(config.log_level, "verbose");
        assert_eq!(config.severity(), Severity::Info);
    }

    #[test]
    fn test_config_file_path_does_not_panic() {
        let path = config_file_path();
        assert!(path.to_string_lossy().ends_with(".toml"));
    }
}
