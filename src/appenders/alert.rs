//! Alert appender: hands each rendered event to a host dialog callback

use crate::core::{Appender, Layout, LoggingEvent, Result};
use crate::layouts::SimpleLayout;
use std::sync::Arc;

pub type AlertCallback = Box<dyn Fn(&str) + Send + Sync>;

/// Shows every event through a blocking host dialog (a message box, a
/// desktop notification). Meant for development builds.
///
/// ```
/// use rust_log_facade::prelude::*;
/// use std::sync::{Arc, Mutex};
///
/// let shown = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&shown);
///
/// let logger = Logger::new("ui");
/// logger.add_appender(Box::new(AlertAppender::new(move |text| {
///     sink.lock().unwrap().push(text.to_string());
/// })));
/// logger.fatal("render loop stalled");
///
/// assert_eq!(shown.lock().unwrap()[0], "FATAL - render loop stalled\n");
/// ```
pub struct AlertAppender {
    layout: Box<dyn Layout>,
    alert: AlertCallback,
}

impl AlertAppender {
    pub fn new(alert: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            layout: Box::new(SimpleLayout::new()),
            alert: Box::new(alert),
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: impl Layout + 'static) -> Self {
        self.layout = Box::new(layout);
        self
    }
}

impl Appender for AlertAppender {
    fn append(&mut self, event: &Arc<LoggingEvent>) -> Result<()> {
        let text = format!(
            "{}{}{}",
            self.layout.header(),
            self.layout.format(event),
            self.layout.footer()
        );
        (self.alert)(&text);
        Ok(())
    }

    fn set_layout(&mut self, layout: Box<dyn Layout>) {
        self.layout = layout;
    }

    fn name(&self) -> &str {
        "alert"
    }
}
