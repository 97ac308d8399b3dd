use std::str::FromStr;

use dioxus_logger::tracing::Level;

use crate::error::ConfigError;

/// Log level used when `LOG_LEVEL` is not set
pub const DEFAULT_LOG_LEVEL: Level = Level::INFO;

pub struct Config {
    pub database_url: String,
    pub log_level: Level,
}

impl Config {
    /// Read configuration from the environment
    ///
    /// # Returns
    /// - `Ok(Config)` - `DATABASE_URL` is set and `LOG_LEVEL`, if set, is a valid level
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - `LOG_LEVEL` is not one of trace, debug, info,
    ///   warn, or error
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let log_level = match std::env::var("LOG_LEVEL") {
            Ok(value) => parse_log_level(&value)?,
            Err(_) => DEFAULT_LOG_LEVEL,
        };

        Ok(Self {
            database_url,
            log_level,
        })
    }
}

fn parse_log_level(value: &str) -> Result<Level, ConfigError> {
    Level::from_str(value.trim()).map_err(|e| ConfigError::InvalidEnvValue {
        var: "LOG_LEVEL".to_string(),
        reason: e.to_string(),
    })
}
