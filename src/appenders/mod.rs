//! Appender implementations

pub mod alert;
pub mod console;
#[cfg(feature = "network")]
pub mod network;
#[cfg(feature = "network")]
pub mod transport;

pub use alert::{AlertAppender, AlertCallback};
pub use console::ConsoleAppender;
#[cfg(feature = "network")]
pub use network::{NetworkBatchAppender, NetworkBatchAppenderBuilder};
#[cfg(feature = "network")]
pub use transport::{is_success_status, HttpRequestBatch, HttpTransport};
#[cfg(feature = "reqwest-transport")]
pub use transport::ReqwestTransport;

pub use crate::core::{Appender, NullAppender};
