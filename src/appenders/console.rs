//! Console appender implementation

use crate::core::{Appender, Layout, LogLevel, LoggingEvent, Result};
use crate::layouts::SimpleLayout;
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::Write;
use std::sync::Arc;

/// Writes rendered events to the terminal.
///
/// ERROR and FATAL go to stderr, everything else to stdout.
pub struct ConsoleAppender {
    layout: Box<dyn Layout>,
    use_colors: bool,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            layout: Box::new(SimpleLayout::new()),
            use_colors: cfg!(feature = "console"),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            ..Self::new()
        }
    }

    /// Replace the layout, consuming the appender
    ///
    /// ```
    /// use rust_log_facade::appenders::ConsoleAppender;
    /// use rust_log_facade::layouts::BasicLayout;
    ///
    /// let appender = ConsoleAppender::new().with_layout(BasicLayout::new());
    /// ```
    #[must_use]
    pub fn with_layout(mut self, layout: impl Layout + 'static) -> Self {
        self.layout = Box::new(layout);
        self
    }

    /// `header + format(event) + footer`, uncolored
    pub fn render(&self, event: &LoggingEvent) -> String {
        format!(
            "{}{}{}",
            self.layout.header(),
            self.layout.format(event),
            self.layout.footer()
        )
    }

    #[cfg(feature = "console")]
    fn paint(&self, level: LogLevel, output: String) -> String {
        if self.use_colors {
            output.color(level.color_code()).to_string()
        } else {
            output
        }
    }

    #[cfg(not(feature = "console"))]
    fn paint(&self, _level: LogLevel, output: String) -> String {
        output
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, event: &Arc<LoggingEvent>) -> Result<()> {
        let output = self.paint(event.level, self.render(event));

        // Layouts end their records with a newline, so no println!
        match event.level {
            LogLevel::Error | LogLevel::Fatal => {
                let mut err = std::io::stderr().lock();
                err.write_all(output.as_bytes())?;
                err.flush()?;
            }
            _ => {
                let mut out = std::io::stdout().lock();
                out.write_all(output.as_bytes())?;
                out.flush()?;
            }
        }
        Ok(())
    }

    fn set_layout(&mut self, layout: Box<dyn Layout>) {
        self.layout = layout;
    }

    fn name(&self) -> &str {
        "console"
    }
}
