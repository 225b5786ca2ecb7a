//! Record layout: `category~timestamp [LEVEL] message`

use crate::core::{Layout, LoggingEvent};

/// One record per line, suited for storing logs:
///
/// ```text
/// checkout~2025-01-08T10:30:45+0000 [WARN] cart is empty
/// ```
///
/// The timestamp uses the source logger's date format.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicLayout;

impl BasicLayout {
    pub fn new() -> Self {
        Self
    }
}

impl Layout for BasicLayout {
    fn format(&self, event: &LoggingEvent) -> String {
        format!(
            "{}~{} [{}] {}\n",
            event.category,
            event.formatted_timestamp(),
            event.level,
            event.message
        )
    }
}
