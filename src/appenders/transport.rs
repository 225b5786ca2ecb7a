//! HTTP transport used by the network batch appender

use crate::core::Result;
use async_trait::async_trait;

/// One rendered batch ready to be posted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequestBatch {
    pub url: String,
    pub content_type: String,
    pub body: String,
    /// Number of events rendered into `body`
    pub event_count: usize,
}

/// Posts batches to a collector.
///
/// `Ok(Some(status))` carries the HTTP status; `Ok(None)` means the
/// transport cannot observe a status (fire-and-forget). Both `None` and a
/// status of `0` count as delivered, as do `200..300`.
///
/// # Example
///
/// ```no_run
/// use rust_log_facade::appenders::{HttpRequestBatch, HttpTransport};
/// use rust_log_facade::Result;
/// use async_trait::async_trait;
///
/// struct Discard;
///
/// #[async_trait]
/// impl HttpTransport for Discard {
///     async fn post(&self, _request: HttpRequestBatch) -> Result<Option<u16>> {
///         Ok(None)
///     }
/// }
/// ```
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post(&self, request: HttpRequestBatch) -> Result<Option<u16>>;
}

/// True for the statuses a batch counts as delivered with
pub fn is_success_status(status: Option<u16>) -> bool {
    match status {
        None | Some(0) => true,
        Some(code) => (200..300).contains(&code),
    }
}

#[cfg(feature = "reqwest-transport")]
pub use reqwest_transport::ReqwestTransport;

#[cfg(feature = "reqwest-transport")]
mod reqwest_transport {
    use super::*;
    use crate::core::LoggerError;
    use reqwest::header::CONTENT_TYPE;
    use reqwest::Client;
    use std::fmt;
    use std::sync::OnceLock;

    /// [`HttpTransport`] over a lazily created, reused `reqwest::Client`
    #[derive(Default)]
    pub struct ReqwestTransport {
        client: OnceLock<Client>,
    }

    impl ReqwestTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Use a preconfigured client (proxies, TLS roots, ...)
        pub fn with_client(client: Client) -> Self {
            Self {
                client: OnceLock::from(client),
            }
        }

        pub(super) fn client(&self, url: &str) -> Result<&Client> {
            if let Some(client) = self.client.get() {
                return Ok(client);
            }
            let client = Client::builder()
                .build()
                .map_err(|e| LoggerError::transport(url, e.to_string()))?;
            // A concurrent first request may have won; either client works
            Ok(self.client.get_or_init(|| client))
        }
    }

    #[async_trait]
    impl HttpTransport for ReqwestTransport {
        async fn post(&self, request: HttpRequestBatch) -> Result<Option<u16>> {
            let HttpRequestBatch {
                url,
                content_type,
                body,
                ..
            } = request;

            let response = self
                .client(&url)?
                .post(&url)
                .header(CONTENT_TYPE, content_type)
                .body(body)
                .send()
                .await
                .map_err(|e| LoggerError::transport(&url, e.to_string()))?;

            Ok(Some(response.status().as_u16()))
        }
    }

    impl fmt::Debug for ReqwestTransport {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("ReqwestTransport")
                .field("initialized", &self.client.get().is_some())
                .finish()
        }
    }
}
