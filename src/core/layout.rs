//! Layout trait for rendering events as text

use super::logging_event::LoggingEvent;

/// Renders events, and the framing around a batch of events, as text.
///
/// Only `format` is required. A batch is rendered as
/// `header + format(e1) + separator + format(e2) + ... + footer`.
pub trait Layout: Send + Sync {
    fn format(&self, event: &LoggingEvent) -> String;

    fn header(&self) -> &str {
        ""
    }

    fn footer(&self) -> &str {
        ""
    }

    fn separator(&self) -> &str {
        ""
    }

    fn content_type(&self) -> &str {
        "text/plain"
    }

    /// Render a complete batch with this layout's framing
    fn format_batch(&self, events: &[&LoggingEvent]) -> String {
        let body = events
            .iter()
            .map(|event| self.format(event))
            .collect::<Vec<_>>()
            .join(self.separator());
        format!("{}{}{}", self.header(), body, self.footer())
    }
}

/// Layout that renders nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLayout;

impl Layout for NullLayout {
    fn format(&self, _event: &LoggingEvent) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;

    struct Bracketed;

    impl Layout for Bracketed {
        fn format(&self, event: &LoggingEvent) -> String {
            event.message.clone()
        }

        fn header(&self) -> &str {
            "["
        }

        fn footer(&self) -> &str {
            "]"
        }

        fn separator(&self) -> &str {
            ","
        }
    }

    #[test]
    fn test_null_layout_defaults() {
        let event = LoggingEvent::new("app", LogLevel::Info, "hello");
        assert_eq!(NullLayout.format(&event), "");
        assert_eq!(NullLayout.header(), "");
        assert_eq!(NullLayout.footer(), "");
        assert_eq!(NullLayout.separator(), "");
        assert_eq!(NullLayout.content_type(), "text/plain");
    }

    #[test]
    fn test_format_batch_framing() {
        let a = LoggingEvent::new("app", LogLevel::Info, "a");
        let b = LoggingEvent::new("app", LogLevel::Info, "b");
        assert_eq!(Bracketed.format_batch(&[&a, &b]), "[a,b]");
        assert_eq!(Bracketed.format_batch(&[]), "[]");
    }
}
