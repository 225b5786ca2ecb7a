//! Main logger implementation

use super::{
    appender::{Appender, NullAppender},
    diagnostics::Diagnostics,
    error::{LoggerError, Result},
    listener_bus::{panic_message, Listener, ListenerBus},
    log_level::LogLevel,
    logging_event::LoggingEvent,
    timestamp::DateFormatter,
};
use chrono::{DateTime, FixedOffset, Utc};
use parking_lot::{Mutex, ReentrantMutex, RwLock};
use std::cell::RefCell;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Weak};

/// Category used when a lookup has no usable name
pub const DEFAULT_CATEGORY: &str = "[default]";

/// Callback a host environment invokes for errors it could not handle:
/// `(message, source, line)`.
pub type ErrorReporter = Arc<dyn Fn(&str, Option<&str>, Option<u32>) + Send + Sync>;

/// Appender shared by the listeners that bind it.
///
/// Other threads wait for the lock. A nested call from the thread already
/// inside the appender (an appender side effect that logs again, or a panic
/// hook firing mid-call) gets the lock but not the borrow, and is refused
/// with [`LoggerError::Reentrant`].
struct SharedAppender {
    name: String,
    cell: ReentrantMutex<RefCell<Box<dyn Appender>>>,
}

impl SharedAppender {
    fn run(&self, call: impl FnOnce(&mut Box<dyn Appender>) -> Result<()>) -> Result<()> {
        let guard = self.cell.lock();
        let mut appender = guard
            .try_borrow_mut()
            .map_err(|_| LoggerError::reentrant(self.name.as_str()))?;
        call(&mut *appender)
    }
}

/// An appender together with the listeners that bind it to a logger
struct BoundAppender {
    name: String,
    appender: Arc<SharedAppender>,
    on_log: Listener<Arc<LoggingEvent>>,
    on_clear: Listener<()>,
}

/// Per-category logger.
///
/// Level methods are gated by the logger's threshold: an event is built
/// only when `threshold.rank() <= level.rank()`. Accepted events are kept
/// in an in-memory history and dispatched to every bound appender in
/// binding order.
///
/// # Example
///
/// ```
/// use rust_log_facade::prelude::*;
///
/// let logger = Logger::new("checkout");
/// logger.set_level(LogLevel::Debug);
/// logger.add_appender(Box::new(ConsoleAppender::new()));
///
/// logger.trace("dropped, below threshold");
/// logger.info("cart loaded");
/// assert_eq!(logger.history_len(), 1);
/// ```
pub struct Logger {
    category: String,
    level: RwLock<LogLevel>,
    history: RwLock<Vec<Arc<LoggingEvent>>>,
    appenders: Mutex<Vec<BoundAppender>>,
    on_log: ListenerBus<Arc<LoggingEvent>>,
    on_clear: ListenerBus<()>,
    date_formatter: RwLock<DateFormatter>,
    diagnostics: Diagnostics,
    self_ref: Weak<Logger>,
}

impl Logger {
    #[must_use]
    pub fn new(category: impl Into<String>) -> Arc<Self> {
        Self::with_diagnostics(category, Diagnostics::default())
    }

    #[must_use]
    pub fn with_diagnostics(category: impl Into<String>, diagnostics: Diagnostics) -> Arc<Self> {
        let category = category.into();
        let logger = Arc::new_cyclic(|self_ref| Self {
            on_log: ListenerBus::with_diagnostics(format!("{}.onlog", category), diagnostics.clone()),
            on_clear: ListenerBus::with_diagnostics(
                format!("{}.onclear", category),
                diagnostics.clone(),
            ),
            category,
            level: RwLock::new(LogLevel::default()),
            history: RwLock::new(Vec::new()),
            appenders: Mutex::new(Vec::new()),
            date_formatter: RwLock::new(DateFormatter::default()),
            diagnostics,
            self_ref: self_ref.clone(),
        });
        logger.add_appender(Box::new(NullAppender));
        logger
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    /// Bus notified with every accepted event; appenders are subscribers.
    /// Listeners subscribed here run in order with the appenders, so an
    /// enricher subscribed first can fill `extra` fields for later appenders.
    pub fn on_log(&self) -> &ListenerBus<Arc<LoggingEvent>> {
        &self.on_log
    }

    /// Bus notified by [`Logger::clear`]
    pub fn on_clear(&self) -> &ListenerBus<()> {
        &self.on_clear
    }

    fn bind(&self, appender: Box<dyn Appender>) -> BoundAppender {
        let name = appender.name().to_string();
        let appender = Arc::new(SharedAppender {
            name: name.clone(),
            cell: ReentrantMutex::new(RefCell::new(appender)),
        });

        let target = Arc::clone(&appender);
        let on_log: Listener<Arc<LoggingEvent>> =
            Arc::new(move |event: &Arc<LoggingEvent>| -> Result<()> {
                target.run(|a| a.append(event))
            });
        let target = Arc::clone(&appender);
        let on_clear: Listener<()> =
            Arc::new(move |_: &()| -> Result<()> { target.run(|a| a.clear()) });

        self.on_log.subscribe(Arc::clone(&on_log));
        self.on_clear.subscribe(Arc::clone(&on_clear));

        BoundAppender {
            name,
            appender,
            on_log,
            on_clear,
        }
    }

    fn unbind(&self, bound: &BoundAppender) {
        self.on_log.unsubscribe(&bound.on_log);
        self.on_clear.unsubscribe(&bound.on_clear);
    }

    /// Bind an additional appender after the existing ones
    pub fn add_appender(&self, appender: Box<dyn Appender>) {
        let bound = self.bind(appender);
        self.appenders.lock().push(bound);
    }

    /// Replace every appender.
    ///
    /// Existing appenders are cleared first so buffered events get flushed,
    /// then unbound; the new appenders are bound in the given order.
    /// No logger lock is held while the old appenders clear.
    pub fn set_appenders(&self, appenders: Vec<Box<dyn Appender>>) {
        let previous = std::mem::take(&mut *self.appenders.lock());

        for bound in &previous {
            let outcome = catch_unwind(AssertUnwindSafe(|| bound.appender.run(|a| a.clear())));
            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(e)) => self
                    .diagnostics
                    .warn(format!("Appender '{}' failed to clear: {}", bound.name, e)),
                Err(panic_info) => self.diagnostics.warn(format!(
                    "Appender '{}' panicked during clear: {}",
                    bound.name,
                    panic_message(panic_info.as_ref())
                )),
            }
            self.unbind(bound);
        }

        let bound: Vec<BoundAppender> = appenders.into_iter().map(|a| self.bind(a)).collect();
        self.appenders.lock().extend(bound);
    }

    /// Names of the bound appenders in dispatch order
    pub fn appender_names(&self) -> Vec<String> {
        self.appenders.lock().iter().map(|b| b.name.clone()).collect()
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Off && self.level.read().rank() <= level.rank()
    }

    #[inline]
    pub fn is_trace_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Trace)
    }

    #[inline]
    pub fn is_debug_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Debug)
    }

    #[inline]
    pub fn is_info_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Info)
    }

    #[inline]
    pub fn is_warn_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Warn)
    }

    #[inline]
    pub fn is_error_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Error)
    }

    #[inline]
    pub fn is_fatal_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Fatal)
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }
        self.emit(LoggingEvent::new(self.category.as_str(), level, message));
    }

    /// Log with an attached exception, rendered through `Display`
    pub fn log_with_exception(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        exception: impl fmt::Display,
    ) {
        if !self.is_enabled(level) {
            return;
        }
        self.emit(
            LoggingEvent::new(self.category.as_str(), level, message)
                .with_exception(exception.to_string()),
        );
    }

    fn emit_uncaught(&self, message: String) {
        self.emit(LoggingEvent::new(self.category.as_str(), LogLevel::Fatal, message));
    }

    fn emit(&self, event: LoggingEvent) {
        let event = Arc::new(event.with_logger(self.self_ref.clone()));
        self.history.write().push(Arc::clone(&event));
        self.on_log.dispatch(&event);
    }

    #[inline]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }

    #[inline]
    pub fn trace_with(&self, message: impl Into<String>, exception: impl fmt::Display) {
        self.log_with_exception(LogLevel::Trace, message, exception);
    }

    #[inline]
    pub fn debug_with(&self, message: impl Into<String>, exception: impl fmt::Display) {
        self.log_with_exception(LogLevel::Debug, message, exception);
    }

    #[inline]
    pub fn info_with(&self, message: impl Into<String>, exception: impl fmt::Display) {
        self.log_with_exception(LogLevel::Info, message, exception);
    }

    #[inline]
    pub fn warn_with(&self, message: impl Into<String>, exception: impl fmt::Display) {
        self.log_with_exception(LogLevel::Warn, message, exception);
    }

    #[inline]
    pub fn error_with(&self, message: impl Into<String>, exception: impl fmt::Display) {
        self.log_with_exception(LogLevel::Error, message, exception);
    }

    #[inline]
    pub fn fatal_with(&self, message: impl Into<String>, exception: impl fmt::Display) {
        self.log_with_exception(LogLevel::Fatal, message, exception);
    }

    /// Drop the history and notify clear listeners. Never fails.
    pub fn clear(&self) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.history.write().clear();
            self.on_clear.dispatch(&());
        }));
    }

    /// Snapshot of accepted events, oldest first
    pub fn history(&self) -> Vec<Arc<LoggingEvent>> {
        self.history.read().clone()
    }

    pub fn history_len(&self) -> usize {
        self.history.read().len()
    }

    /// Pattern used by [`Logger::get_formatted_timestamp`]; see
    /// [`DateFormatter`] for the tokens.
    pub fn set_date_format(&self, pattern: impl Into<String>) {
        self.date_formatter.write().set_pattern(pattern);
    }

    pub fn date_format(&self) -> String {
        self.date_formatter.read().pattern().to_string()
    }

    pub fn set_utc_offset(&self, offset: FixedOffset) {
        self.date_formatter.write().set_offset(offset);
    }

    pub fn get_formatted_timestamp(&self, timestamp: &DateTime<Utc>) -> String {
        self.date_formatter.read().format(timestamp)
    }

    /// Callback for the host to report errors it could not handle; each
    /// report is logged as FATAL on this logger whatever its level, OFF
    /// included.
    ///
    /// The callback holds a weak reference and does nothing once the
    /// logger is gone.
    pub fn error_reporter(&self) -> ErrorReporter {
        let logger = self.self_ref.clone();
        Arc::new(move |message: &str, source: Option<&str>, line: Option<u32>| {
            if let Some(logger) = logger.upgrade() {
                logger.emit_uncaught(uncaught_message(message, source, line));
            }
        })
    }

    /// Install a process panic hook that logs panics as FATAL on this
    /// logger, bypassing the level like [`Logger::error_reporter`], and then
    /// runs the previously installed hook.
    ///
    /// Panics raised while a listener bus is dispatching are skipped here;
    /// the bus already reports them and the panicking appender may still
    /// be locked.
    pub fn install_panic_hook(&self) {
        let logger = self.self_ref.clone();
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if !ListenerBus::<()>::is_dispatching() {
                if let Some(logger) = logger.upgrade() {
                    let message = panic_message(info.payload());
                    let location = info.location();
                    logger.emit_uncaught(uncaught_message(
                        &message,
                        location.map(|l| l.file()),
                        location.map(|l| l.line()),
                    ));
                }
            }
            previous(info);
        }));
    }
}

fn uncaught_message(message: &str, source: Option<&str>, line: Option<u32>) -> String {
    let line = line.map_or_else(|| "unknown".to_string(), |l| l.to_string());
    format!(
        "Error in ({}) on line {} with message ({})",
        source.unwrap_or("unknown"),
        line,
        message
    )
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("category", &self.category)
            .field("level", &self.level())
            .field("history", &self.history_len())
            .field("appenders", &self.appender_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LoggerError;
    use chrono::TimeZone;

    /// Records every event message; optionally fails every call
    struct Recording {
        name: &'static str,
        seen: Arc<Mutex<Vec<String>>>,
        clears: Arc<Mutex<usize>>,
        fail: bool,
    }

    impl Recording {
        fn new(name: &'static str, seen: &Arc<Mutex<Vec<String>>>) -> Self {
            Self {
                name,
                seen: Arc::clone(seen),
                clears: Arc::new(Mutex::new(0)),
                fail: false,
            }
        }
    }

    impl Appender for Recording {
        fn append(&mut self, event: &Arc<LoggingEvent>) -> Result<()> {
            if self.fail {
                return Err(LoggerError::listener("recording appender refused"));
            }
            self.seen.lock().push(format!("{}:{}", self.name, event.message));
            Ok(())
        }

        fn clear(&mut self) -> Result<()> {
            *self.clears.lock() += 1;
            if self.fail {
                return Err(LoggerError::listener("cannot clear"));
            }
            Ok(())
        }

        fn name(&self) -> &str {
            self.name
        }
    }

    fn quiet_logger(category: &str) -> Arc<Logger> {
        Logger::with_diagnostics(category, Diagnostics::silent())
    }

    #[test]
    fn test_new_logger_has_null_appender_and_fatal_level() {
        let logger = quiet_logger("app");
        assert_eq!(logger.level(), LogLevel::Fatal);
        assert_eq!(logger.appender_names(), vec!["null".to_string()]);

        logger.fatal("still safe with no user appenders");
        assert_eq!(logger.history_len(), 1);
    }

    #[test]
    fn test_gating_by_threshold() {
        let logger = quiet_logger("app");
        logger.set_level(LogLevel::Warn);

        assert!(!logger.is_trace_enabled());
        assert!(!logger.is_debug_enabled());
        assert!(!logger.is_info_enabled());
        assert!(logger.is_warn_enabled());
        assert!(logger.is_error_enabled());
        assert!(logger.is_fatal_enabled());

        logger.info("dropped");
        logger.debug_with("dropped", "with exception");
        assert_eq!(logger.history_len(), 0);

        logger.warn("kept");
        assert_eq!(logger.history_len(), 1);
    }

    #[test]
    fn test_all_and_off_thresholds() {
        let logger = quiet_logger("app");
        logger.set_level(LogLevel::All);
        assert!(logger.is_trace_enabled());

        logger.set_level(LogLevel::Off);
        assert!(!logger.is_fatal_enabled());
        logger.log(LogLevel::Off, "never recorded");
        assert_eq!(logger.history_len(), 0);
    }

    #[test]
    fn test_events_carry_category_level_and_exception() {
        let logger = quiet_logger("payments");
        logger.set_level(LogLevel::Trace);
        logger.error_with("charge failed", "timeout after 3 attempts");

        let history = logger.history();
        let event = &history[0];
        assert_eq!(event.category, "payments");
        assert_eq!(event.level, LogLevel::Error);
        assert_eq!(event.exception.as_deref(), Some("timeout after 3 attempts"));
        assert!(event.logger().is_some());
    }

    #[test]
    fn test_dispatch_follows_binding_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let logger = quiet_logger("app");
        logger.set_level(LogLevel::Info);
        logger.add_appender(Box::new(Recording::new("a", &seen)));
        logger.add_appender(Box::new(Recording::new("b", &seen)));

        logger.info("one");
        assert_eq!(*seen.lock(), vec!["a:one".to_string(), "b:one".to_string()]);
    }

    #[test]
    fn test_failing_appender_does_not_block_later_appender() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let logger = quiet_logger("app");
        logger.set_level(LogLevel::Info);

        let mut failing = Recording::new("failing", &seen);
        failing.fail = true;
        logger.add_appender(Box::new(failing));
        logger.add_appender(Box::new(Recording::new("ok", &seen)));

        logger.info("payload");
        assert_eq!(*seen.lock(), vec!["ok:payload".to_string()]);
        assert_eq!(logger.on_log().failure_count(), 1);
    }

    #[test]
    fn test_set_appenders_clears_old_and_rewires() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let logger = quiet_logger("app");
        logger.set_level(LogLevel::Info);

        let old = Recording::new("old", &seen);
        let old_clears = Arc::clone(&old.clears);
        logger.add_appender(Box::new(old));

        logger.set_appenders(vec![
            Box::new(Recording::new("second", &seen)),
            Box::new(Recording::new("first", &seen)),
        ]);
        assert_eq!(*old_clears.lock(), 1);
        assert_eq!(logger.appender_names(), vec!["second".to_string(), "first".to_string()]);

        logger.info("after");
        assert_eq!(
            *seen.lock(),
            vec!["second:after".to_string(), "first:after".to_string()]
        );
        assert_eq!(logger.on_log().len(), 2);
        assert_eq!(logger.on_clear().len(), 2);
    }

    #[test]
    fn test_set_appenders_survives_failing_clear() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let logger = quiet_logger("app");
        let mut failing = Recording::new("failing", &seen);
        failing.fail = true;
        logger.add_appender(Box::new(failing));

        logger.set_appenders(vec![Box::new(Recording::new("fresh", &seen))]);
        assert_eq!(logger.appender_names(), vec!["fresh".to_string()]);
    }

    #[test]
    fn test_clear_empties_history_and_notifies_once() {
        let logger = quiet_logger("app");
        logger.set_level(LogLevel::Info);
        logger.info("e1");
        logger.info("e2");
        assert_eq!(logger.history_len(), 2);

        let notified = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&notified);
        logger.on_clear().subscribe(Arc::new(|_: &()| -> Result<()> {
            panic!("clear listener exploded")
        }));
        logger.on_clear().subscribe(Arc::new(move |_: &()| -> Result<()> {
            *counter.lock() += 1;
            Ok(())
        }));

        logger.clear();
        assert_eq!(logger.history_len(), 0);
        assert_eq!(*notified.lock(), 1);
    }

    #[test]
    fn test_formatted_timestamp_uses_logger_format() {
        let logger = quiet_logger("app");
        logger.set_date_format("yyyy/MM/dd hh:mm");
        logger.set_utc_offset(FixedOffset::east_opt(2 * 3600).unwrap());
        assert_eq!(logger.date_format(), "yyyy/MM/dd hh:mm");

        let ts = Utc.with_ymd_and_hms(2025, 3, 1, 22, 15, 0).single().unwrap();
        assert_eq!(logger.get_formatted_timestamp(&ts), "2025/03/02 00:15");

        logger.fatal("check event formatting");
        let event = &logger.history()[0];
        assert_eq!(event.formatted_timestamp().len(), "yyyy/MM/dd hh:mm".len());
    }

    #[test]
    fn test_error_reporter_logs_fatal() {
        let logger = quiet_logger("app");
        logger.set_level(LogLevel::Error);
        let report = logger.error_reporter();

        report("undefined is not a function", Some("app.js"), Some(42));
        let history = logger.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].level, LogLevel::Fatal);
        assert_eq!(
            history[0].message,
            "Error in (app.js) on line 42 with message (undefined is not a function)"
        );
    }

    #[test]
    fn test_error_reporter_is_inert_after_drop() {
        let logger = quiet_logger("app");
        let report = logger.error_reporter();
        drop(logger);
        report("late", None, None);
    }

    #[test]
    fn test_error_reporter_ignores_level() {
        let logger = quiet_logger("app");
        logger.set_level(LogLevel::Off);
        logger.fatal("gated");
        assert_eq!(logger.history_len(), 0);

        let report = logger.error_reporter();
        report("boom", Some("a.js"), Some(1));
        let history = logger.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].level, LogLevel::Fatal);
        assert_eq!(history[0].message, "Error in (a.js) on line 1 with message (boom)");
    }

    /// Logs back into its own logger when it sees `trigger`
    struct Echo {
        logger: Weak<Logger>,
        trigger: &'static str,
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl Appender for Echo {
        fn append(&mut self, event: &Arc<LoggingEvent>) -> Result<()> {
            self.seen.lock().push(event.message.clone());
            if event.message == self.trigger {
                if let Some(logger) = self.logger.upgrade() {
                    logger.info("echo");
                }
            }
            Ok(())
        }

        fn name(&self) -> &str {
            "echo"
        }
    }

    #[test]
    fn test_appender_logging_into_own_logger_does_not_block() {
        let warnings = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&warnings);
        let logger = Logger::with_diagnostics(
            "app",
            Diagnostics::new(LogLevel::Warn, move |_, msg| sink.lock().push(msg.to_string())),
        );
        logger.set_level(LogLevel::Info);

        let echoed = Arc::new(Mutex::new(Vec::new()));
        let later = Arc::new(Mutex::new(Vec::new()));
        logger.set_appenders(vec![
            Box::new(Echo {
                logger: Arc::downgrade(&logger),
                trigger: "outer",
                seen: Arc::clone(&echoed),
            }),
            Box::new(Recording::new("later", &later)),
        ]);

        let (tx, rx) = std::sync::mpsc::channel();
        let worker = Arc::clone(&logger);
        std::thread::spawn(move || {
            worker.info("outer");
            let _ = tx.send(());
        });
        assert!(rx.recv_timeout(std::time::Duration::from_secs(5)).is_ok());

        let messages: Vec<String> = logger.history().iter().map(|e| e.message.clone()).collect();
        assert_eq!(messages, vec!["outer".to_string(), "echo".to_string()]);
        // The nested event skips the busy appender and still reaches the others
        assert_eq!(*echoed.lock(), vec!["outer".to_string()]);
        assert_eq!(
            *later.lock(),
            vec!["later:echo".to_string(), "later:outer".to_string()]
        );

        let warnings = warnings.lock();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Appender 'echo' is already running"));
    }

    #[test]
    fn test_replacing_appenders_releases_logger_lock_before_clear() {
        struct Inspecting {
            logger: Weak<Logger>,
            names: Arc<Mutex<Vec<String>>>,
        }

        impl Appender for Inspecting {
            fn clear(&mut self) -> Result<()> {
                if let Some(logger) = self.logger.upgrade() {
                    *self.names.lock() = logger.appender_names();
                }
                Ok(())
            }

            fn name(&self) -> &str {
                "inspecting"
            }
        }

        let logger = quiet_logger("app");
        let names = Arc::new(Mutex::new(vec!["unset".to_string()]));
        logger.set_appenders(vec![Box::new(Inspecting {
            logger: Arc::downgrade(&logger),
            names: Arc::clone(&names),
        })]);

        logger.set_appenders(Vec::new());
        assert!(names.lock().is_empty());
        assert!(logger.appender_names().is_empty());
    }
}
