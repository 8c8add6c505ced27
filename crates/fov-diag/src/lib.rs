//! Diagnostics: a thread-local last-error slot and a process-wide log callback.
//!
//! Neither participates in control flow. The error slot exists so that a
//! caller of the fallible engine entry points can recover a human-readable
//! string after a non-`Ok` `Status`; the log callback exists so that a host
//! application can route the toolkit's diagnostic chatter (allocation
//! failures, malformed obstacle-array sizing) into its own logging sink
//! instead of `tracing`'s default subscriber.

use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};

use thiserror::Error;

/// Closed error taxonomy returned by every fallible engine entry point.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FovError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("out of memory")]
    OutOfMemory,
}

/// Language-neutral status code (spec §7). Carries no payload; detail lives
/// in the thread-local slot set alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    InvalidArgument,
    OutOfMemory,
}

impl From<&FovError> for Status {
    fn from(err: &FovError) -> Self {
        match err {
            FovError::InvalidArgument(_) => Status::InvalidArgument,
            FovError::OutOfMemory => Status::OutOfMemory,
        }
    }
}

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Record `err` in the thread-local slot and return its `Status`.
///
/// Overwriting on each failure is intentional (spec §7): only the most
/// recent failure on this thread is retrievable.
pub fn report(err: FovError) -> Status {
    let status = Status::from(&err);
    let message = err.to_string();
    tracing::debug!(target: "fov_diag", %message, "fov error reported");
    emit_log(&message);
    LAST_ERROR.with(|slot| *slot.borrow_mut() = Some(message));
    status
}

/// Return the message set by the most recent [`report`] call on this thread,
/// or `None` if none has occurred yet.
pub fn last_error_message() -> Option<String> {
    LAST_ERROR.with(|slot| slot.borrow().clone())
}

/// Clear the thread-local slot. Exposed for test isolation between cases
/// that assert on [`last_error_message`].
pub fn clear_last_error() {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = None);
}

/// Signature of a registered log callback: receives the formatted message.
pub type LogCallback = fn(&str);

static LOG_CALLBACK: AtomicUsize = AtomicUsize::new(0);

/// Register a process-wide log callback, replacing any previously registered
/// one. Must be set up before concurrent use begins (spec §5); the callback
/// is stored as an atomic function pointer rather than behind a lock so that
/// engine calls on other threads never serialize on registration.
pub fn set_log_callback(callback: LogCallback) {
    LOG_CALLBACK.store(callback as usize, Ordering::SeqCst);
}

/// Unregister any log callback, falling back to the `tracing` subscriber.
pub fn clear_log_callback() {
    LOG_CALLBACK.store(0, Ordering::SeqCst);
}

fn emit_log(message: &str) {
    let ptr = LOG_CALLBACK.load(Ordering::SeqCst);
    if ptr == 0 {
        return;
    }
    // SAFETY: `ptr` was only ever stored from a `LogCallback` value in
    // `set_log_callback`, and function pointers are `'static`.
    let callback: LogCallback = unsafe { std::mem::transmute(ptr) };
    callback(message);
}
