//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fifo_buffer;
pub mod layout;
pub mod listener_bus;
pub mod log_context;
pub mod log_level;
pub mod logger;
pub mod logging_event;
pub mod metrics;
pub mod registry;
pub mod timestamp;

pub use appender::{Appender, NullAppender};
pub use config::{LoggingConfig, NetworkAppenderConfig};
pub use diagnostics::{DiagnosticSink, Diagnostics};
pub use error::{LoggerError, Result};
pub use fifo_buffer::FifoBuffer;
pub use layout::{Layout, NullLayout};
pub use listener_bus::{Listener, ListenerBus};
pub use log_context::{FieldValue, LogContext};
pub use log_level::LogLevel;
pub use logger::{ErrorReporter, Logger, DEFAULT_CATEGORY};
pub use logging_event::LoggingEvent;
pub use metrics::DeliveryMetrics;
pub use registry::LoggerRegistry;
pub use timestamp::{DateFormatter, DEFAULT_DATE_FORMAT};
