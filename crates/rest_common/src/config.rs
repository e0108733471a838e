//! Restwell configuration.
//!
//! Configuration lives in ~/.config/restwell/config.toml; the
//! RESTWELL_CONFIG environment variable overrides the path. Missing or
//! malformed files fall back to defaults so the CLI always starts.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::{WakeTime, MAX_COFFEE_CUPS, MAX_SLEEP_HOURS, MIN_COFFEE_CUPS, MIN_SLEEP_HOURS};

const CONFIG_DIR: &str = "restwell";
const CONFIG_FILE: &str = "config.toml";

/// Wake time offered when the user has not configured one (07:00).
pub const DEFAULT_WAKE_TIME: WakeTime = WakeTime { hour: 7, minute: 0 };

/// Clock style for the formatted bedtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TimeFormat {
    #[default]
    #[serde(rename = "12h")]
    H12,
    #[serde(rename = "24h")]
    H24,
}

impl TimeFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFormat::H12 => "12h",
            TimeFormat::H24 => "24h",
        }
    }
}

/// Form defaults offered before the user adjusts anything
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Wake-up time as "HH:MM"
    #[serde(default = "default_wake_time")]
    pub wake_time: String,

    /// Desired sleep in hours (valid: 4-12)
    #[serde(default = "default_sleep_hours")]
    pub sleep_hours: f64,

    /// Daily coffee intake in cups (valid: 1-10)
    #[serde(default = "default_coffee_cups")]
    pub coffee_cups: u8,
}

fn default_wake_time() -> String {
    DEFAULT_WAKE_TIME.to_string()
}

fn default_sleep_hours() -> f64 {
    8.0
}

fn default_coffee_cups() -> u8 {
    1
}

impl DefaultsConfig {
    /// Parsed wake time, falling back to 07:00 on malformed input
    pub fn effective_wake_time(&self) -> WakeTime {
        WakeTime::parse(&self.wake_time).unwrap_or(DEFAULT_WAKE_TIME)
    }

    /// Clamp sleep hours to the valid range (4-12)
    pub fn effective_sleep_hours(&self) -> f64 {
        self.sleep_hours.clamp(MIN_SLEEP_HOURS, MAX_SLEEP_HOURS)
    }

    /// Clamp coffee cups to the valid range (1-10)
    pub fn effective_coffee_cups(&self) -> u8 {
        self.coffee_cups.clamp(MIN_COFFEE_CUPS, MAX_COFFEE_CUPS)
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            wake_time: default_wake_time(),
            sleep_hours: default_sleep_hours(),
            coffee_cups: default_coffee_cups(),
        }
    }
}

/// Model artifact selection
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Path to a TOML model artifact; absent uses the embedded parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub time_format: TimeFormat,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RestConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub model: ModelConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl RestConfig {
    /// Resolve the config file path
    pub fn path() -> PathBuf {
        if let Ok(path) = std::env::var("RESTWELL_CONFIG") {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR)
            .join(CONFIG_FILE)
    }

    /// Load from the resolved path, defaults on any failure
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    /// Load from an explicit path, defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = fs::read_to_string(path) {
                match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => warn!("ignoring malformed config {}: {}", path.display(), e),
                }
            }
        }
        Self::default()
    }

    /// Persist to the resolved path
    pub fn save(&self) -> std::io::Result<()> {
        self.save_to(&Self::path())
    }

    /// Persist to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_form_initial_state() {
        let config = RestConfig::default();
        assert_eq!(config.defaults.effective_wake_time(), DEFAULT_WAKE_TIME);
        assert_eq!(config.defaults.sleep_hours, 8.0);
        assert_eq!(config.defaults.coffee_cups, 1);
        assert_eq!(config.display.time_format, TimeFormat::H12);
        assert_eq!(config.log.level, "info");
        assert!(config.model.path.is_none());
    }

    #[test]
    fn test_effective_accessors_clamp() {
        let defaults = DefaultsConfig {
            wake_time: "not a time".to_string(),
            sleep_hours: 20.0,
            coffee_cups: 0,
        };
        assert_eq!(defaults.effective_wake_time(), DEFAULT_WAKE_TIME);
        assert_eq!(defaults.effective_sleep_hours(), MAX_SLEEP_HOURS);
        assert_eq!(defaults.effective_coffee_cups(), MIN_COFFEE_CUPS);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = RestConfig::default();
        config.defaults.wake_time = "06:30".to_string();
        config.defaults.sleep_hours = 7.25;
        config.defaults.coffee_cups = 3;
        config.display.time_format = TimeFormat::H24;
        config.model.path = Some(dir.path().join("model.toml"));

        config.save_to(&path).unwrap();
        let loaded = RestConfig::load_from(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = RestConfig::load_from(&dir.path().join("absent.toml"));
        assert_eq!(loaded, RestConfig::default());
    }

    #[test]
    fn test_load_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "defaults = \"oops").unwrap();
        let loaded = RestConfig::load_from(&path);
        assert_eq!(loaded, RestConfig::default());
    }

    #[test]
    fn test_partial_file_fills_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[defaults]\ncoffee_cups = 4\n").unwrap();

        let loaded = RestConfig::load_from(&path);
        assert_eq!(loaded.defaults.coffee_cups, 4);
        assert_eq!(loaded.defaults.sleep_hours, 8.0);
        assert_eq!(loaded.defaults.wake_time, "07:00");
    }

    #[test]
    fn test_time_format_serde_names() {
        assert_eq!(toml::to_string(&DisplayConfig::default()).unwrap().trim(), "time_format = \"12h\"");
        let parsed: DisplayConfig = toml::from_str("time_format = \"24h\"").unwrap();
        assert_eq!(parsed.time_format, TimeFormat::H24);
    }
}
