//! crates/logging/src/timing.rs
//! Timing hooks.
//!
//! The hooks are part of the public surface so call sites written against a
//! facility that measures elapsed time keep compiling, but they never emit
//! anything: [`log_elapsed`] and [`log_elapsed_cutoff`] are no-ops in every
//! build mode, with or without the `tracing` feature.

use std::time::{Duration, Instant};

/// Opaque monotonic timestamp returned by [`time_start`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TimeStart(Instant);

impl TimeStart {
    /// Time passed since the handle was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// Captures the current monotonic time.
#[must_use]
pub fn time_start() -> TimeStart {
    TimeStart(Instant::now())
}

/// Inert. Accepts a start handle and a message and emits nothing.
#[inline(always)]
pub fn log_elapsed(_start: &TimeStart, _message: &str) {}

/// Inert. Accepts a cutoff, a start handle and a message and emits nothing,
/// whether or not the cutoff has passed.
#[inline(always)]
pub fn log_elapsed_cutoff(_cutoff: Duration, _start: &TimeStart, _message: &str) {}
