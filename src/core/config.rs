//! Serde-backed configuration for loggers and the network appender

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::timestamp::DEFAULT_DATE_FORMAT;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_BATCH_THRESHOLD: usize = 1;
pub const DEFAULT_TIMEOUT_MS: u64 = 2000;

/// Settings applied by a registry to every logger it creates
///
/// ```
/// use rust_log_facade::{LoggingConfig, LogLevel};
///
/// let config = LoggingConfig::from_json(
///     r#"{ "default_level": "warn", "levels": { "checkout": "DEBUG" } }"#,
/// ).unwrap();
///
/// assert_eq!(config.level_for("checkout"), LogLevel::Debug);
/// assert_eq!(config.level_for("search"), LogLevel::Warn);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub default_level: LogLevel,
    pub date_format: String,
    /// Per-category overrides of `default_level`
    pub levels: HashMap<String, LogLevel>,
}

impl LoggingConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.date_format.is_empty() {
            return Err(LoggerError::config("logging", "date_format must not be empty"));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_default_level(mut self, level: LogLevel) -> Self {
        self.default_level = level;
        self
    }

    #[must_use]
    pub fn with_level(mut self, category: impl Into<String>, level: LogLevel) -> Self {
        self.levels.insert(category.into(), level);
        self
    }

    #[must_use]
    pub fn with_date_format(mut self, pattern: impl Into<String>) -> Self {
        self.date_format = pattern.into();
        self
    }

    pub fn level_for(&self, category: &str) -> LogLevel {
        self.levels
            .get(category)
            .copied()
            .unwrap_or(self.default_level)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: LogLevel::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            levels: HashMap::new(),
        }
    }
}

/// Settings for a network batch appender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkAppenderConfig {
    pub url: String,
    /// Events per batch, at least 1
    pub threshold: usize,
    pub timeout_ms: u64,
}

impl NetworkAppenderConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(LoggerError::config("network appender", "url must not be empty"));
        }
        if self.threshold == 0 {
            return Err(LoggerError::config(
                "network appender",
                "threshold must be at least 1",
            ));
        }
        if self.timeout_ms == 0 {
            return Err(LoggerError::config(
                "network appender",
                "timeout_ms must be greater than zero",
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for NetworkAppenderConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            threshold: DEFAULT_BATCH_THRESHOLD,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}
