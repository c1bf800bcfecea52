//! Monitor configuration
//!
//! Settings are layered, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. A configuration file (`.toml`, `.yaml`/`.yml` or `.json`)
//! 3. Environment variables, `VITALS__` prefixed with `__` between
//!    sections, e.g. `VITALS__ALERT__BLINK_PHASES=4`
//! 4. Command-line flags (applied by the CLI)

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{MonitorError, Result};
use crate::i18n::Language;
use crate::vitals::TemperatureUnit;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "VITALS";

/// Separator between prefix, section and key
pub const ENV_SEPARATOR: &str = "__";

/// Top-level monitor configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Language for operator messages
    pub language: Language,
    /// Unit temperature readings are given in
    pub temperature_unit: TemperatureUnit,
    /// Console alert settings
    pub alert: AlertConfig,
}

/// Console alert presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Render notifications at all
    pub enabled: bool,
    /// Number of indicator phases shown for a critical alert
    pub blink_phases: u32,
    /// Duration of a single phase in milliseconds
    pub phase_duration_ms: u64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            blink_phases: 12,
            phase_duration_ms: 500,
        }
    }
}

impl AlertConfig {
    pub fn phase_duration(&self) -> Duration {
        Duration::from_millis(self.phase_duration_ms)
    }
}

impl MonitorConfig {
    /// Load configuration from a file, choosing the format by extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            MonitorError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let config: MonitorConfig = match extension.as_str() {
            "toml" => toml::from_str(&content)?,
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            "json" => serde_json::from_str(&content)?,
            _ => {
                return Err(MonitorError::Config(format!(
                    "Unsupported file format: {}. Supported formats: json, yaml, yml, toml",
                    extension
                )))
            }
        };

        tracing::debug!(path = %path.display(), "Loaded monitor configuration");
        Ok(config)
    }

    /// Defaults, then the optional file, then the process environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_vars(std::env::vars())?;
        Ok(config)
    }

    /// Apply `VITALS__*` overrides from an iterator of variables
    ///
    /// Variables without the prefix are ignored. Unknown keys under the
    /// prefix are logged and skipped; malformed values are errors.
    pub fn apply_env_vars<I, K, V>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let prefix = format!("{}{}", ENV_PREFIX, ENV_SEPARATOR);

        for (name, value) in vars {
            let name = name.as_ref().to_uppercase();
            let Some(key) = name.strip_prefix(&prefix) else {
                continue;
            };
            let value = value.as_ref();

            match key {
                "LANGUAGE" => self.language = value.parse().map_err(MonitorError::Config)?,
                "TEMPERATURE_UNIT" => {
                    self.temperature_unit = value.parse().map_err(MonitorError::Config)?
                }
                "ALERT__ENABLED" => self.alert.enabled = parse_env(&name, value)?,
                "ALERT__BLINK_PHASES" => self.alert.blink_phases = parse_env(&name, value)?,
                "ALERT__PHASE_DURATION_MS" => {
                    self.alert.phase_duration_ms = parse_env(&name, value)?
                }
                _ => {
                    tracing::warn!(variable = %name, "Ignoring unknown configuration variable");
                    continue;
                }
            }
            tracing::debug!(variable = %name, "Applied environment override");
        }

        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        MonitorError::Config(format!("Invalid value '{}' for {}", value, name))
    })
}
