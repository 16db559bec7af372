//! crates/logging/src/threshold.rs
//! Process-wide severity threshold and debug-break flag.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use super::severity::Severity;

// Relaxed is enough: a log call racing a `set_level` may observe the old
// threshold, and last write wins.
static THRESHOLD: AtomicU8 = AtomicU8::new(Severity::DEFAULT_THRESHOLD.ordinal());
static DEBUG_BREAK: AtomicBool = AtomicBool::new(false);

/// Sets the minimum severity that will be emitted.
///
/// Subsequent log calls on every thread observe the new threshold. With the
/// `tracing` feature the installed subscriber's level filter follows along.
///
/// A host that installs its own global subscriber instead of calling
/// [`init`](crate::init) keeps its own filters. The threshold then gates only
/// [`log`](crate::log), [`logf`](crate::logf) and the records `RecordLayer`
/// delivers; the host's other layers still see every severity macro event
/// their filters admit.
///
/// # Examples
///
/// ```
/// use logging::{enabled, set_level, Severity};
///
/// set_level(Severity::Warning);
/// assert!(!enabled(Severity::Info));
/// assert!(enabled(Severity::Error));
/// # set_level(Severity::DEFAULT_THRESHOLD);
/// ```
pub fn set_level(level: Severity) {
    THRESHOLD.store(level.ordinal(), Ordering::Relaxed);
    #[cfg(feature = "tracing")]
    super::tracing_bridge::retune(level);
}

/// Returns the current threshold.
#[inline]
pub fn level() -> Severity {
    Severity::from_ordinal(THRESHOLD.load(Ordering::Relaxed)).unwrap_or(Severity::DEFAULT_THRESHOLD)
}

/// Reports whether a record at `level` passes the current threshold.
#[inline]
pub fn enabled(level: Severity) -> bool {
    level.ordinal() >= THRESHOLD.load(Ordering::Relaxed)
}

/// Records whether a debugger break was requested on error.
///
/// The flag is kept for parity with external logging facilities that honour
/// it; this crate never acts on it.
pub fn set_debug_break_enabled(enabled: bool) {
    DEBUG_BREAK.store(enabled, Ordering::Relaxed);
}

/// Returns the value last passed to [`set_debug_break_enabled`].
pub fn debug_break_enabled() -> bool {
    DEBUG_BREAK.load(Ordering::Relaxed)
}
