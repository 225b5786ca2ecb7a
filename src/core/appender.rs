//! Appender trait for log output destinations

use super::{error::Result, layout::Layout, logging_event::LoggingEvent};
use std::sync::Arc;

/// A sink bound to a logger's event and clear buses.
///
/// Every method has a no-op default, so an implementation only overrides
/// what its destination needs.
pub trait Appender: Send + Sync {
    /// Consume one event
    fn append(&mut self, _event: &Arc<LoggingEvent>) -> Result<()> {
        Ok(())
    }

    /// Release or flush anything buffered
    fn clear(&mut self) -> Result<()> {
        Ok(())
    }

    fn set_layout(&mut self, _layout: Box<dyn Layout>) {}

    fn name(&self) -> &str;
}

/// Appender that ignores every event. Bound to each new logger so a logger
/// without user appenders still has a valid sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAppender;

impl Appender for NullAppender {
    fn name(&self) -> &str {
        "null"
    }
}
