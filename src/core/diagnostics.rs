//! Internal diagnostics channel
//!
//! The facade never reports its own problems through the loggers it serves,
//! since a failing appender would then be asked to record its own failure.
//! Listener failures and delivery errors go to a [`Diagnostics`] sink instead,
//! which by default writes tagged lines to stderr.

use super::log_level::LogLevel;
use std::fmt;
use std::sync::Arc;

pub type DiagnosticSink = Arc<dyn Fn(LogLevel, &str) + Send + Sync>;

/// Cloneable handle to the facade's own warning/error output
#[derive(Clone)]
pub struct Diagnostics {
    sink: DiagnosticSink,
    min_level: LogLevel,
}

impl Diagnostics {
    /// Route diagnostics at or above `min_level` to a custom sink
    pub fn new(min_level: LogLevel, sink: impl Fn(LogLevel, &str) + Send + Sync + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
            min_level,
        }
    }

    /// Write warnings and errors to stderr
    pub fn stderr() -> Self {
        Self::new(LogLevel::Warn, |level, message| {
            eprintln!("[LOGGER {}] {}", Self::tag(level), message);
        })
    }

    /// Discard everything
    pub fn silent() -> Self {
        Self::new(LogLevel::Off, |_, _| {})
    }

    fn tag(level: LogLevel) -> &'static str {
        match level {
            LogLevel::All | LogLevel::Trace | LogLevel::Debug => "TRACE",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal | LogLevel::Off => "CRITICAL",
        }
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Off && self.min_level.rank() <= level.rank()
    }

    pub fn emit(&self, level: LogLevel, message: impl AsRef<str>) {
        if self.is_enabled(level) {
            (self.sink)(level, message.as_ref());
        }
    }

    #[inline]
    pub fn trace(&self, message: impl AsRef<str>) {
        self.emit(LogLevel::Trace, message);
    }

    #[inline]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.emit(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.emit(LogLevel::Error, message);
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::stderr()
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("min_level", &self.min_level)
            .finish_non_exhaustive()
    }
}
