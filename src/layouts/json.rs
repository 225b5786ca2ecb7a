//! JSON layout for batched network delivery

use crate::core::{DateFormatter, Layout, LoggingEvent};
use chrono::FixedOffset;

/// Key of the array that wraps a batch
pub const BATCH_KEY: &str = "Log4js";

const TIMESTAMP_FORMAT: &str = "yyyy-MM-ddThh:mm:ssZ";

/// Renders each event as a `LoggingEvent` object; a batch is
/// `{"Log4js": [ ... ]}` with events separated by `,\n`.
///
/// String values are JSON escaped, so a framed batch parses as JSON.
/// A missing exception is rendered as `null`.
#[derive(Debug, Clone)]
pub struct JsonLayout {
    referer: String,
    user_agent: String,
    date_formatter: DateFormatter,
    header: String,
}

impl JsonLayout {
    pub fn new() -> Self {
        Self {
            referer: "unknown".to_string(),
            user_agent: "unknown".to_string(),
            date_formatter: DateFormatter::new(TIMESTAMP_FORMAT),
            header: format!("{{\"{}\": [\n", BATCH_KEY),
        }
    }

    /// Origin reported in the `referer` field (a page URL, service name, ...)
    #[must_use]
    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = referer.into();
        self
    }

    /// Client identification reported in the `useragent` field
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Render timestamps in a fixed offset instead of local time
    #[must_use]
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.date_formatter = self.date_formatter.with_offset(offset);
        self
    }
}

impl Default for JsonLayout {
    fn default() -> Self {
        Self::new()
    }
}

fn quoted(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

impl Layout for JsonLayout {
    fn format(&self, event: &LoggingEvent) -> String {
        let exception = event
            .exception
            .as_deref()
            .map(quoted)
            .unwrap_or_else(|| "null".to_string());

        let mut json = String::from("{\n \"LoggingEvent\": {\n");
        json.push_str(&format!("\t\"logger\": {},\n", quoted(&event.category)));
        json.push_str(&format!("\t\"level\": {},\n", quoted(event.level.to_str())));
        json.push_str(&format!("\t\"message\": {},\n", quoted(&event.message)));
        json.push_str(&format!("\t\"referer\": {},\n", quoted(&self.referer)));
        json.push_str(&format!("\t\"useragent\": {},\n", quoted(&self.user_agent)));
        json.push_str(&format!(
            "\t\"timestamp\": {},\n",
            quoted(&self.date_formatter.format(&event.timestamp))
        ));

        let extra = event.extra();
        if extra.is_empty() {
            json.push_str(&format!("\t\"exception\": {}\n", exception));
        } else {
            json.push_str(&format!("\t\"exception\": {},\n", exception));
            json.push_str(&format!("\t\"extra\": {}\n", extra.to_json_value()));
        }

        json.push_str("}}");
        json
    }

    fn header(&self) -> &str {
        &self.header
    }

    fn footer(&self) -> &str {
        "\n]}"
    }

    fn separator(&self) -> &str {
        ",\n"
    }

    fn content_type(&self) -> &str {
        "text/json"
    }
}
