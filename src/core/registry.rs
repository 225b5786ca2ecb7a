//! Named logger lookup

use super::config::LoggingConfig;
use super::diagnostics::Diagnostics;
use super::logger::{Logger, DEFAULT_CATEGORY};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Hands out one shared [`Logger`] per category.
///
/// Loggers are created on first lookup with the configured level and date
/// format, then memoized: every later lookup of the same name returns the
/// same instance.
///
/// ```
/// use rust_log_facade::{LoggerRegistry, LoggingConfig, LogLevel};
/// use std::sync::Arc;
///
/// let registry = LoggerRegistry::with_config(
///     LoggingConfig::default().with_level("checkout", LogLevel::Debug),
/// );
///
/// let a = registry.get_logger("checkout");
/// let b = registry.get_logger("checkout");
/// assert!(Arc::ptr_eq(&a, &b));
/// assert_eq!(a.level(), LogLevel::Debug);
/// ```
#[derive(Debug, Default)]
pub struct LoggerRegistry {
    config: LoggingConfig,
    diagnostics: Diagnostics,
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LoggingConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Diagnostics handed to every logger created from now on
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn config(&self) -> &LoggingConfig {
        &self.config
    }

    /// Logger for `name`, used verbatim: `""` is a category of its own
    pub fn get_logger(&self, category: &str) -> Arc<Logger> {
        if let Some(logger) = self.loggers.read().get(category) {
            return Arc::clone(logger);
        }

        let mut loggers = self.loggers.write();
        // Another thread may have created it between the two locks
        let logger = loggers
            .entry(category.to_string())
            .or_insert_with(|| self.create(category));
        Arc::clone(logger)
    }

    /// Logger for an optional name; no name means the default category
    pub fn logger_for(&self, name: Option<&str>) -> Arc<Logger> {
        self.get_logger(name.unwrap_or(DEFAULT_CATEGORY))
    }

    pub fn default_logger(&self) -> Arc<Logger> {
        self.get_logger(DEFAULT_CATEGORY)
    }

    fn create(&self, category: &str) -> Arc<Logger> {
        let logger = Logger::with_diagnostics(category, self.diagnostics.clone());
        logger.set_level(self.config.level_for(category));
        logger.set_date_format(self.config.date_format.clone());
        logger
    }

    /// Categories created so far, sorted
    pub fn categories(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }
}
