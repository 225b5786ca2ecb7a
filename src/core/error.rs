//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Unknown level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// A listener or appender refused an event
    #[error("Listener failed: {0}")]
    Listener(String),

    /// Transport could not deliver a batch
    #[error("Transport error for '{url}': {message}")]
    Transport { url: String, message: String },

    /// Server answered with a non-success status
    #[error("Request to '{url}' returned status code {status}")]
    HttpStatus { url: String, status: u16 },

    /// No async runtime available for background delivery
    #[error("No tokio runtime available for network delivery")]
    MissingRuntime,

    /// An appender was re-entered from its own call stack
    #[error("Appender '{0}' is already running on this thread; nested event skipped")]
    Reentrant(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a listener failure
    pub fn listener<S: Into<String>>(msg: S) -> Self {
        LoggerError::Listener(msg.into())
    }

    /// Create a reentrancy error for the named appender
    pub fn reentrant<S: Into<String>>(appender: S) -> Self {
        LoggerError::Reentrant(appender.into())
    }

    /// Create a transport error
    pub fn transport(url: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Transport {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        LoggerError::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
