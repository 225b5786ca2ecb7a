//! Logging event structure

use super::log_context::{FieldValue, LogContext};
use super::log_level::LogLevel;
use super::logger::Logger;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::fmt;
use std::sync::{Arc, Weak};

/// One accepted log call.
///
/// Everything except the `extra` fields is fixed at construction. Listeners
/// that run before an appender may add `extra` fields for it to read.
pub struct LoggingEvent {
    pub category: String,
    pub level: LogLevel,
    pub message: String,
    pub exception: Option<String>,
    pub timestamp: DateTime<Utc>,
    logger: Weak<Logger>,
    extra: RwLock<LogContext>,
}

impl LoggingEvent {
    pub fn new(category: impl Into<String>, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            level,
            message: message.into(),
            exception: None,
            timestamp: Utc::now(),
            logger: Weak::new(),
            extra: RwLock::new(LogContext::new()),
        }
    }

    #[must_use]
    pub fn with_exception(mut self, exception: impl Into<String>) -> Self {
        self.exception = Some(exception.into());
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[must_use]
    pub fn with_extra(self, extra: LogContext) -> Self {
        *self.extra.write() = extra;
        self
    }

    #[must_use]
    pub(crate) fn with_logger(mut self, logger: Weak<Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// The logger that produced this event, if it is still alive
    pub fn logger(&self) -> Option<Arc<Logger>> {
        self.logger.upgrade()
    }

    /// Timestamp rendered by the source logger's date format, or RFC 2822
    /// when the event has no live logger.
    pub fn formatted_timestamp(&self) -> String {
        match self.logger.upgrade() {
            Some(logger) => logger.get_formatted_timestamp(&self.timestamp),
            None => self.timestamp.to_rfc2822(),
        }
    }

    pub fn set_extra<K, V>(&self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.extra.write().add_field(key, value);
    }

    pub fn extra_field(&self, key: &str) -> Option<FieldValue> {
        self.extra.read().get(key).cloned()
    }

    /// Snapshot of the extra fields
    pub fn extra(&self) -> LogContext {
        self.extra.read().clone()
    }
}

impl fmt::Debug for LoggingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingEvent")
            .field("category", &self.category)
            .field("level", &self.level)
            .field("message", &self.message)
            .field("exception", &self.exception)
            .field("timestamp", &self.timestamp)
            .field("extra", &*self.extra.read())
            .finish()
    }
}
