//! Ordered multicast of payloads to subscribed listeners
//!
//! A [`ListenerBus`] calls every listener in subscription order on the
//! dispatching thread. A listener that returns an error or panics is reported
//! through [`Diagnostics`] and skipped; the remaining listeners still run.

use super::diagnostics::Diagnostics;
use super::error::Result;
use parking_lot::RwLock;
use std::any::Any;
use std::cell::Cell;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub type Listener<T> = Arc<dyn Fn(&T) -> Result<()> + Send + Sync>;

thread_local! {
    static DISPATCH_DEPTH: Cell<usize> = const { Cell::new(0) };
}

struct DispatchGuard;

impl DispatchGuard {
    fn enter() -> Self {
        DISPATCH_DEPTH.with(|depth| depth.set(depth.get() + 1));
        DispatchGuard
    }
}

impl Drop for DispatchGuard {
    fn drop(&mut self) {
        DISPATCH_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

/// Extract a readable message from a caught panic payload
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

pub struct ListenerBus<T> {
    name: String,
    listeners: RwLock<Vec<Listener<T>>>,
    diagnostics: Diagnostics,
    failures: AtomicU64,
}

impl<T> ListenerBus<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_diagnostics(name, Diagnostics::default())
    }

    pub fn with_diagnostics(name: impl Into<String>, diagnostics: Diagnostics) -> Self {
        Self {
            name: name.into(),
            listeners: RwLock::new(Vec::new()),
            diagnostics,
            failures: AtomicU64::new(0),
        }
    }

    /// True while the current thread is running a dispatch on any bus
    pub fn is_dispatching() -> bool {
        DISPATCH_DEPTH.with(|depth| depth.get() > 0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a listener. The same listener may be subscribed more than once.
    pub fn subscribe(&self, listener: Listener<T>) {
        self.listeners.write().push(listener);
    }

    /// Remove every occurrence of `listener`, compared by pointer identity.
    /// Returns how many were removed.
    pub fn unsubscribe(&self, listener: &Listener<T>) -> usize {
        let mut listeners = self.listeners.write();
        let before = listeners.len();
        listeners.retain(|l| !std::ptr::addr_eq(Arc::as_ptr(l), Arc::as_ptr(listener)));
        before - listeners.len()
    }

    /// Deliver `payload` to every listener in subscription order.
    /// Returns the number of listeners that failed.
    pub fn dispatch(&self, payload: &T) -> usize {
        // Snapshot so listeners may subscribe or unsubscribe while being called
        let listeners: Vec<Listener<T>> = self.listeners.read().clone();
        let _guard = DispatchGuard::enter();
        let mut failed = 0;

        for (idx, listener) in listeners.iter().enumerate() {
            match catch_unwind(AssertUnwindSafe(|| listener(payload))) {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    failed += 1;
                    self.diagnostics.warn(format!(
                        "Could not run listener #{} on '{}': {}",
                        idx, self.name, e
                    ));
                }
                Err(panic_info) => {
                    failed += 1;
                    self.diagnostics.warn(format!(
                        "Listener #{} on '{}' panicked: {}. Other listeners continue to run.",
                        idx,
                        self.name,
                        panic_message(panic_info.as_ref())
                    ));
                }
            }
        }

        if failed > 0 {
            self.failures.fetch_add(failed as u64, Ordering::Relaxed);
        }
        failed
    }

    pub fn len(&self) -> usize {
        self.listeners.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.read().is_empty()
    }

    /// Total listener failures since creation
    pub fn failure_count(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }
}

impl<T> fmt::Debug for ListenerBus<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerBus")
            .field("name", &self.name)
            .field("listeners", &self.len())
            .field("failures", &self.failure_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LoggerError;
    use parking_lot::Mutex;

    fn recorder(seen: &Arc<Mutex<Vec<u32>>>, tag: u32) -> Listener<u32> {
        let seen = Arc::clone(seen);
        Arc::new(move |payload: &u32| -> Result<()> {
            seen.lock().push(tag * 100 + payload);
            Ok(())
        })
    }

    #[test]
    fn test_dispatch_in_subscription_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let bus = ListenerBus::with_diagnostics("onlog", Diagnostics::silent());
        bus.subscribe(recorder(&seen, 1));
        bus.subscribe(recorder(&seen, 2));
        bus.subscribe(recorder(&seen, 3));

        assert_eq!(bus.dispatch(&7), 0);
        assert_eq!(*seen.lock(), vec![107, 207, 307]);
    }

    #[test]
    fn test_throwing_listener_does_not_block_later_ones() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let warnings = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&warnings);
        let bus = ListenerBus::with_diagnostics(
            "onlog",
            Diagnostics::new(crate::LogLevel::Warn, move |_, msg| sink.lock().push(msg.to_string())),
        );

        bus.subscribe(Arc::new(|_: &u32| -> Result<()> {
            Err(LoggerError::listener("refused"))
        }));
        bus.subscribe(Arc::new(|_: &u32| -> Result<()> { panic!("appender exploded") }));
        bus.subscribe(recorder(&seen, 1));

        assert_eq!(bus.dispatch(&5), 2);
        assert_eq!(*seen.lock(), vec![105]);
        assert_eq!(bus.failure_count(), 2);

        let warnings = warnings.lock();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("refused"));
        assert!(warnings[1].contains("appender exploded"));
    }

    #[test]
    fn test_unsubscribe_removes_all_occurrences() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let bus = ListenerBus::with_diagnostics("onlog", Diagnostics::silent());
        let twice = recorder(&seen, 1);
        let other = recorder(&seen, 2);

        bus.subscribe(Arc::clone(&twice));
        bus.subscribe(Arc::clone(&other));
        bus.subscribe(Arc::clone(&twice));
        assert_eq!(bus.len(), 3);

        assert_eq!(bus.unsubscribe(&twice), 2);
        assert_eq!(bus.len(), 1);

        bus.dispatch(&1);
        assert_eq!(*seen.lock(), vec![201]);
    }

    #[test]
    fn test_duplicate_subscription_dispatches_twice() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let bus = ListenerBus::with_diagnostics("onlog", Diagnostics::silent());
        let listener = recorder(&seen, 1);
        bus.subscribe(Arc::clone(&listener));
        bus.subscribe(listener);

        bus.dispatch(&0);
        assert_eq!(seen.lock().len(), 2);
    }

    #[test]
    fn test_is_dispatching_inside_listener() {
        let observed = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&observed);
        let bus = ListenerBus::with_diagnostics("onclear", Diagnostics::silent());
        bus.subscribe(Arc::new(move |_: &()| -> Result<()> {
            *slot.lock() = Some(ListenerBus::<()>::is_dispatching());
            Ok(())
        }));

        assert!(!ListenerBus::<()>::is_dispatching());
        bus.dispatch(&());
        assert_eq!(*observed.lock(), Some(true));
        assert!(!ListenerBus::<()>::is_dispatching());
    }
}
