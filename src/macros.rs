//! Logging macros for ergonomic log message formatting.
//!
//! The message is only formatted when the logger accepts the level, so a
//! disabled call costs one threshold check.
//!
//! # Examples
//!
//! ```
//! use rust_log_facade::prelude::*;
//! use rust_log_facade::{info, warn};
//!
//! let logger = Logger::new("server");
//! logger.set_level(LogLevel::Warn);
//!
//! let port = 8080;
//! info!(logger, "listening on port {}", port); // below threshold, not formatted
//! warn!(logger, "port {} is already bound", port);
//!
//! assert_eq!(logger.history_len(), 1);
//! assert_eq!(logger.history()[0].message, "port 8080 is already bound");
//! ```

/// Log a formatted message at the given level.
///
/// ```
/// # use rust_log_facade::prelude::*;
/// # let logger = Logger::new("app");
/// use rust_log_facade::log;
/// log!(logger, LogLevel::Fatal, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.is_enabled(level) {
            logger.log(level, format!($($arg)+));
        }
    }};
}

/// Log a trace-level message.
///
/// ```
/// # use rust_log_facade::prelude::*;
/// # let logger = Logger::new("app");
/// # logger.set_level(LogLevel::Trace);
/// use rust_log_facade::trace;
/// trace!(logger, "Entering function: calculate()");
/// trace!(logger, "Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error message.
///
/// ```
/// # use rust_log_facade::prelude::*;
/// # let logger = Logger::new("app");
/// # logger.set_level(LogLevel::Error);
/// use rust_log_facade::error;
/// let path = "/etc/app.toml";
/// error!(logger, "Failed to read {}", path);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
