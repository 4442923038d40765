//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `homedemo.toml` in the working directory. Every field has a
//! default so the file is optional. Environment variables take precedence
//! over file values.

use std::collections::HashSet;

use homedemo_domain::id::DeviceId;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Devices registered at startup, in order.
    pub devices: Vec<DeviceConfig>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax) for diagnostic tracing.
    pub filter: String,
}

/// One device to seed the registry with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeviceConfig {
    pub id: DeviceId,
    /// Type tag, e.g. `light`. Unknown tags are reported at startup.
    pub kind: String,
}

impl DeviceConfig {
    fn new(id: u32, kind: &str) -> Self {
        Self {
            id: DeviceId::new(id),
            kind: kind.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `homedemo.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if it
    /// lists the same device id twice.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("homedemo.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("HOMEDEMO_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for device in &self.devices {
            if !seen.insert(device.id) {
                return Err(ConfigError::Validation(format!(
                    "device id {} is listed more than once",
                    device.id
                )));
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            devices: vec![
                DeviceConfig::new(1, "light"),
                DeviceConfig::new(2, "thermostat"),
                DeviceConfig::new(3, "door"),
            ],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
