//! Log callback system.
//!
//! The write path never formats a message unless a callback is installed;
//! [`log_enabled`] is a single relaxed atomic load.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, OnceLock};

/// Log level for debug callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

static LOG_ENABLED: AtomicBool = AtomicBool::new(false);

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global log callback, replacing any previous one.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    let mut guard = log_callback().lock().expect("log callback lock");
    *guard = Some(Box::new(callback));
    LOG_ENABLED.store(true, Ordering::Release);
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    let mut guard = log_callback().lock().expect("log callback lock");
    *guard = None;
    LOG_ENABLED.store(false, Ordering::Release);
}

/// Whether a log callback is installed.
#[inline]
#[must_use]
pub fn log_enabled() -> bool {
    LOG_ENABLED.load(Ordering::Relaxed)
}

/// Emit a log record to the registered callback.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}

/// Emit a lazily formatted log record.
///
/// `message` only runs when a callback is installed.
#[inline]
pub(crate) fn emit_log_with<F>(level: LogLevel, message: F)
where
    F: FnOnce() -> String,
{
    if log_enabled() {
        emit_log(level, &message());
    }
}
