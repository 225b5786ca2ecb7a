//! Delivery metrics for batching appenders
//!
//! Counters describing how batches fared on the wire: how many were sent,
//! how many the server accepted, and how many failed or timed out.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for batch delivery
///
/// # Example
///
/// ```
/// use rust_log_facade::DeliveryMetrics;
///
/// let metrics = DeliveryMetrics::new();
///
/// metrics.record_batch(3);
/// metrics.record_delivered();
///
/// assert_eq!(metrics.batches_sent(), 1);
/// assert_eq!(metrics.events_sent(), 3);
/// assert_eq!(metrics.delivered(), 1);
/// ```
#[derive(Debug)]
pub struct DeliveryMetrics {
    /// Batches handed to the transport
    batches_sent: AtomicU64,

    /// Events contained in those batches
    events_sent: AtomicU64,

    /// Batches answered with a success status
    delivered: AtomicU64,

    /// Batches answered with an error status or a transport error
    failed: AtomicU64,

    /// Batches abandoned because the timeout fired first
    timed_out: AtomicU64,

    /// Events refused because the idle buffer already exceeded the threshold
    dropped: AtomicU64,
}

impl DeliveryMetrics {
    pub const fn new() -> Self {
        Self {
            batches_sent: AtomicU64::new(0),
            events_sent: AtomicU64::new(0),
            delivered: AtomicU64::new(0),
            failed: AtomicU64::new(0),
            timed_out: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn batches_sent(&self) -> u64 {
        self.batches_sent.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn events_sent(&self) -> u64 {
        self.events_sent.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn timed_out(&self) -> u64 {
        self.timed_out.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Record a batch of `events` events leaving for the transport.
    /// Returns the previous batch count.
    #[inline]
    pub fn record_batch(&self, events: usize) -> u64 {
        self.events_sent.fetch_add(events as u64, Ordering::Relaxed);
        self.batches_sent.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_timed_out(&self) -> u64 {
        self.timed_out.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of finished batches that did not get through, as a percentage
    /// (0.0 - 100.0). Returns 0.0 before any batch has finished.
    pub fn failure_rate(&self) -> f64 {
        let lost = (self.failed() + self.timed_out()) as f64;
        let total = self.delivered() as f64 + lost;
        if total == 0.0 {
            0.0
        } else {
            (lost / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.batches_sent.store(0, Ordering::Relaxed);
        self.events_sent.store(0, Ordering::Relaxed);
        self.delivered.store(0, Ordering::Relaxed);
        self.failed.store(0, Ordering::Relaxed);
        self.timed_out.store(0, Ordering::Relaxed);
        self.dropped.store(0, Ordering::Relaxed);
    }
}

impl Default for DeliveryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DeliveryMetrics {
    /// Snapshot of the current values
    fn clone(&self) -> Self {
        Self {
            batches_sent: AtomicU64::new(self.batches_sent()),
            events_sent: AtomicU64::new(self.events_sent()),
            delivered: AtomicU64::new(self.delivered()),
            failed: AtomicU64::new(self.failed()),
            timed_out: AtomicU64::new(self.timed_out()),
            dropped: AtomicU64::new(self.dropped()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_batch_counts_events() {
        let metrics = DeliveryMetrics::new();
        assert_eq!(metrics.record_batch(5), 0); // Returns previous value
        assert_eq!(metrics.record_batch(2), 1);
        assert_eq!(metrics.batches_sent(), 2);
        assert_eq!(metrics.events_sent(), 7);
    }

    #[test]
    fn test_failure_rate() {
        let metrics = DeliveryMetrics::new();
        assert_eq!(metrics.failure_rate(), 0.0);

        for _ in 0..3 {
            metrics.record_delivered();
        }
        assert_eq!(metrics.failure_rate(), 0.0);

        metrics.record_failed();
        assert_eq!(metrics.failure_rate(), 25.0);

        metrics.record_timed_out();
        metrics.record_timed_out();
        metrics.record_timed_out();
        assert_eq!(metrics.failure_rate(), 50.0);
    }

    #[test]
    fn test_reset() {
        let metrics = DeliveryMetrics::new();
        metrics.record_batch(1);
        metrics.record_failed();
        metrics.record_dropped();
        metrics.reset();

        assert_eq!(metrics.batches_sent(), 0);
        assert_eq!(metrics.dropped(), 0);
        assert_eq!(metrics.events_sent(), 0);
        assert_eq!(metrics.failed(), 0);
    }

    #[test]
    fn test_clone_is_snapshot() {
        let metrics = DeliveryMetrics::new();
        metrics.record_delivered();

        let snapshot = metrics.clone();
        metrics.record_delivered();
        assert_eq!(metrics.delivered(), 2);
        assert_eq!(snapshot.delivered(), 1);
    }
}
