//! `LEVEL - message` layout

use crate::core::{Layout, LoggingEvent};

/// Level, then ` - `, then the message: `DEBUG - Hello world\n`
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleLayout;

impl SimpleLayout {
    pub fn new() -> Self {
        Self
    }
}

impl Layout for SimpleLayout {
    fn format(&self, event: &LoggingEvent) -> String {
        format!("{} - {}\n", event.level, event.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;

    #[test]
    fn test_simple_format() {
        let event = LoggingEvent::new("app", LogLevel::Debug, "Hello world");
        assert_eq!(SimpleLayout.format(&event), "DEBUG - Hello world\n");
        assert_eq!(SimpleLayout.header(), "");
        assert_eq!(SimpleLayout.footer(), "");
    }
}
