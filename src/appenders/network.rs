//! Batched network appender
//!
//! Buffers events and posts them to a collector in batches of `threshold`
//! events. At most one request is in flight at a time. Every request gets a
//! timeout timer; when it fires the request is aborted if still running, the
//! in-flight flag is cleared and any buffered events are sent, so a hung
//! collector can never wedge the appender.

use super::transport::{is_success_status, HttpRequestBatch, HttpTransport};
use crate::core::{
    Appender, DeliveryMetrics, Diagnostics, FifoBuffer, Layout, LoggerError, LoggingEvent,
    NetworkAppenderConfig, Result,
};
use crate::layouts::JsonLayout;
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

struct DeliveryState {
    buffer: FifoBuffer<Arc<LoggingEvent>>,
    in_progress: bool,
    /// Id of the most recent request
    flight: u64,
    /// Request whose completion is still awaited; detached by its timer
    attached: Option<u64>,
    request: Option<JoinHandle<()>>,
}

struct Shared {
    url: String,
    threshold: usize,
    timeout: Duration,
    layout: RwLock<Box<dyn Layout>>,
    state: Mutex<DeliveryState>,
    transport: Arc<dyn HttpTransport>,
    runtime: Handle,
    metrics: DeliveryMetrics,
    diagnostics: Diagnostics,
}

impl Shared {
    /// Post up to `threshold` buffered events. Caller holds the state lock.
    fn send(self: &Arc<Self>, state: &mut DeliveryState) {
        if state.buffer.is_empty() {
            return;
        }

        state.in_progress = true;
        state.flight += 1;
        let flight = state.flight;

        let events = state.buffer.drain_up_to(self.threshold);
        let request = {
            let layout = self.layout.read();
            let batch: Vec<&LoggingEvent> = events.iter().map(|e| e.as_ref()).collect();
            HttpRequestBatch {
                url: self.url.clone(),
                content_type: layout.content_type().to_string(),
                body: layout.format_batch(&batch),
                event_count: events.len(),
            }
        };

        self.metrics.record_batch(events.len());
        self.diagnostics.trace(format!(
            "Sending {} event(s) to '{}' (request #{})",
            events.len(),
            self.url,
            flight
        ));

        let shared = Arc::clone(self);
        state.attached = Some(flight);
        state.request = Some(self.runtime.spawn(async move {
            let outcome = shared.transport.post(request).await;
            shared.on_complete(flight, outcome);
        }));

        let shared = Arc::clone(self);
        self.runtime.spawn(async move {
            tokio::time::sleep(shared.timeout).await;
            shared.on_timeout(flight);
        });
    }

    fn on_complete(&self, flight: u64, outcome: Result<Option<u16>>) {
        let mut state = self.state.lock();
        if state.attached != Some(flight) {
            return;
        }
        state.attached = None;
        state.request = None;
        // Failed batches are not re-queued; the next append or the pending
        // timer drives the next request.
        state.in_progress = false;

        let failure = match outcome {
            Ok(status) if is_success_status(status) => None,
            Ok(status) => Some(LoggerError::http_status(&self.url, status.unwrap_or_default())),
            Err(e) => Some(e),
        };

        match failure {
            None => {
                self.metrics.record_delivered();
            }
            Some(e) => {
                self.metrics.record_failed();
                self.diagnostics.error(format!("Batch #{} was not delivered: {}", flight, e));
            }
        }
    }

    fn on_timeout(self: &Arc<Self>, flight: u64) {
        let mut state = self.state.lock();
        if state.flight != flight {
            // A newer request owns the in-flight flag
            return;
        }

        if state.attached == Some(flight) {
            state.attached = None;
            if let Some(request) = state.request.take() {
                request.abort();
            }
            self.metrics.record_timed_out();
            self.diagnostics.warn(format!(
                "Request #{} to '{}' timed out after {:?}; aborted",
                flight, self.url, self.timeout
            ));
        }

        state.in_progress = false;
        if !state.buffer.is_empty() {
            self.send(&mut state);
        }
    }
}

/// Appender that posts events to an HTTP collector in batches.
///
/// Cloning yields another handle to the same buffer and in-flight state.
///
/// # Example
///
/// ```no_run
/// use rust_log_facade::prelude::*;
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() -> rust_log_facade::Result<()> {
/// let appender = NetworkBatchAppender::builder("https://logs.example.com/ingest")
///     .threshold(20)
///     .timeout(Duration::from_secs(5))
///     .build()?;
///
/// let logger = Logger::new("checkout");
/// logger.set_level(LogLevel::Info);
/// logger.add_appender(Box::new(appender));
/// logger.info("order placed");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct NetworkBatchAppender {
    shared: Arc<Shared>,
}

impl NetworkBatchAppender {
    #[must_use]
    pub fn builder(url: impl Into<String>) -> NetworkBatchAppenderBuilder {
        NetworkBatchAppenderBuilder::new(url)
    }

    /// Build with the default layout and transport on the current runtime
    pub fn from_config(config: &NetworkAppenderConfig) -> Result<Self> {
        Self::builder(config.url.clone())
            .threshold(config.threshold)
            .timeout(config.timeout())
            .build()
    }

    /// Post buffered events now, ignoring the threshold. Does nothing while
    /// a request is in flight; its timer sends the remainder.
    pub fn send(&self) {
        let mut state = self.shared.state.lock();
        if !state.in_progress {
            self.shared.send(&mut state);
        }
    }

    pub fn buffered_len(&self) -> usize {
        self.shared.state.lock().buffer.len()
    }

    pub fn is_in_progress(&self) -> bool {
        self.shared.state.lock().in_progress
    }

    pub fn metrics(&self) -> &DeliveryMetrics {
        &self.shared.metrics
    }

    pub fn url(&self) -> &str {
        &self.shared.url
    }

    pub fn threshold(&self) -> usize {
        self.shared.threshold
    }

    pub fn timeout(&self) -> Duration {
        self.shared.timeout
    }
}

impl Appender for NetworkBatchAppender {
    fn append(&mut self, event: &Arc<LoggingEvent>) -> Result<()> {
        let threshold = self.shared.threshold;
        let mut state = self.shared.state.lock();

        if state.buffer.len() <= threshold || state.in_progress {
            state.buffer.push(Arc::clone(event));
        } else {
            self.shared.metrics.record_dropped();
            self.shared.diagnostics.warn(format!(
                "Dropped event for '{}': {} events already buffered",
                self.shared.url,
                state.buffer.len()
            ));
        }

        if state.buffer.len() >= threshold && !state.in_progress {
            self.shared.send(&mut state);
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.send();
        Ok(())
    }

    fn set_layout(&mut self, layout: Box<dyn Layout>) {
        *self.shared.layout.write() = layout;
    }

    fn name(&self) -> &str {
        "network"
    }
}

impl fmt::Debug for NetworkBatchAppender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkBatchAppender")
            .field("url", &self.shared.url)
            .field("threshold", &self.shared.threshold)
            .field("timeout", &self.shared.timeout)
            .field("buffered", &self.buffered_len())
            .field("in_progress", &self.is_in_progress())
            .finish()
    }
}

/// Builder for [`NetworkBatchAppender`]
#[must_use]
pub struct NetworkBatchAppenderBuilder {
    url: String,
    threshold: usize,
    timeout: Duration,
    layout: Option<Box<dyn Layout>>,
    transport: Option<Arc<dyn HttpTransport>>,
    runtime: Option<Handle>,
    diagnostics: Diagnostics,
}

impl NetworkBatchAppenderBuilder {
    pub fn new(url: impl Into<String>) -> Self {
        let defaults = NetworkAppenderConfig::default();
        Self {
            url: url.into(),
            threshold: defaults.threshold,
            timeout: defaults.timeout(),
            layout: None,
            transport: None,
            runtime: None,
            diagnostics: Diagnostics::default(),
        }
    }

    /// Events per batch, at least 1
    pub fn threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Defaults to [`JsonLayout`]
    pub fn layout(mut self, layout: impl Layout + 'static) -> Self {
        self.layout = Some(Box::new(layout));
        self
    }

    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Runtime that runs requests and timers; defaults to the current one
    pub fn runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    pub fn diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn build(self) -> Result<NetworkBatchAppender> {
        if self.url.trim().is_empty() {
            return Err(LoggerError::config("network appender", "url must not be empty"));
        }
        if self.threshold == 0 {
            return Err(LoggerError::config(
                "network appender",
                "threshold must be at least 1",
            ));
        }
        if self.timeout.is_zero() {
            return Err(LoggerError::config(
                "network appender",
                "timeout must be greater than zero",
            ));
        }

        let runtime = match self.runtime {
            Some(runtime) => runtime,
            None => Handle::try_current().map_err(|_| LoggerError::MissingRuntime)?,
        };
        let transport = match self.transport {
            Some(transport) => transport,
            None => default_transport()?,
        };
        let layout = self
            .layout
            .unwrap_or_else(|| Box::new(JsonLayout::new()));

        Ok(NetworkBatchAppender {
            shared: Arc::new(Shared {
                url: self.url,
                threshold: self.threshold,
                timeout: self.timeout,
                layout: RwLock::new(layout),
                state: Mutex::new(DeliveryState {
                    buffer: FifoBuffer::new(),
                    in_progress: false,
                    flight: 0,
                    attached: None,
                    request: None,
                }),
                transport,
                runtime,
                metrics: DeliveryMetrics::new(),
                diagnostics: self.diagnostics,
            }),
        })
    }
}

#[cfg(feature = "reqwest-transport")]
fn default_transport() -> Result<Arc<dyn HttpTransport>> {
    Ok(Arc::new(super::transport::ReqwestTransport::new()))
}

#[cfg(not(feature = "reqwest-transport"))]
fn default_transport() -> Result<Arc<dyn HttpTransport>> {
    Err(LoggerError::config(
        "network appender",
        "no transport given and the reqwest-transport feature is disabled",
    ))
}
