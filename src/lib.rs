//! # Rust Log Facade
//!
//! Category-based logging with pluggable appenders and text layouts.
//!
//! A [`Logger`] gates calls by level, keeps an in-memory history and
//! dispatches accepted events to its appenders in binding order. A failing
//! appender is reported and skipped; the others still receive the event.
//!
//! ## Features
//!
//! - **Layouts**: `LEVEL - message`, `category~timestamp [LEVEL] message` and JSON
//! - **Appenders**: console, host alert callback, batched HTTP delivery
//! - **Batched delivery**: threshold batching with one request in flight and
//!   timeout-driven retry (feature `network`)
//! - **Registry**: one shared logger per category, configured from serde types
//!
//! ```
//! use rust_log_facade::prelude::*;
//! use rust_log_facade::info;
//!
//! let registry = LoggerRegistry::new();
//! let logger = registry.get_logger("checkout");
//! logger.set_level(LogLevel::Info);
//! logger.add_appender(Box::new(ConsoleAppender::new()));
//!
//! info!(logger, "cart has {} items", 3);
//! ```

pub mod appenders;
pub mod core;
pub mod layouts;
pub mod macros;

pub mod prelude {
    #[cfg(feature = "network")]
    pub use crate::appenders::{HttpRequestBatch, HttpTransport, NetworkBatchAppender};
    pub use crate::appenders::{AlertAppender, ConsoleAppender};
    pub use crate::core::{
        Appender, DeliveryMetrics, Diagnostics, FieldValue, Layout, LogContext, LogLevel, Logger,
        LoggerError, LoggerRegistry, LoggingConfig, LoggingEvent, NetworkAppenderConfig,
        NullAppender, Result,
    };
    pub use crate::layouts::{BasicLayout, JsonLayout, SimpleLayout};
}

#[cfg(feature = "network")]
pub use appenders::NetworkBatchAppender;
pub use appenders::{AlertAppender, ConsoleAppender};
pub use core::{
    Appender, DeliveryMetrics, Diagnostics, FieldValue, Layout, LogContext, LogLevel, Logger,
    LoggerError, LoggerRegistry, LoggingConfig, LoggingEvent, NetworkAppenderConfig, Result,
};
