#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is a leveled diagnostic logger. Callers hand it a message, or a
//! format string with arguments, together with a [`Severity`]. The message is
//! emitted as one line tagged with its call site when the severity is at or
//! above the process-wide threshold, and dropped otherwise.
//!
//! # Design
//!
//! - Severities are ordered `Verbose < Debug < Info < Performance < Warning <
//!   Error`. The threshold defaults to [`Severity::Debug`] and is changed with
//!   [`set_level`]; it lives in an atomic, so every thread sees the last
//!   write.
//! - [`log`] writes its text verbatim and [`logf`] renders
//!   [`format_args!`] output. Both attribute the record to the caller's file
//!   and line. The severity macros ([`log_error!`], [`log_warning!`],
//!   [`log_perf!`], [`log_info!`], [`log_debug!`], [`log_verbose!`]) accept
//!   either form and record the enclosing function path instead.
//! - [`log_debug!`], [`log_verbose!`] and [`log_assert!`] compile to nothing
//!   when the calling crate is built without `debug_assertions`.
//! - Records go to a [`Destination`]: standard error (default), the system log,
//!   or a thread-local capture buffer read with [`drain_records`].
//! - The timing hooks ([`time_start`], [`log_elapsed`], [`log_time!`]) are
//!   accepted and inert.
//!
//! # Feature flags
//!
//! - `tracing`: every entry point becomes a `tracing` event, and [`init`]
//!   installs a subscriber whose `RecordLayer` routes events back to the
//!   configured destination.
//! - `serde`: `Serialize`/`Deserialize` for [`Severity`], [`Destination`] and
//!   [`LogConfig`].
//!
//! # Errors
//!
//! Logging never fails at the call site. Sink write errors are discarded and
//! a formatting impl that errors or panics yields the text rendered so far
//! followed by [`FORMAT_ERROR_MARKER`]. Only configuration parsing returns
//! errors ([`ConfigError`], [`ParseSeverityError`]).
//!
//! # Examples
//!
//! ```
//! use logging::{drain_records, init, log_info, log_warning, LogConfig, Severity};
//!
//! init(LogConfig::capture().with_level(Severity::Warning));
//! log_info!("filtered out");
//! log_warning!("{} retries left", 2);
//!
//! let records = drain_records();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].severity(), Severity::Warning);
//! assert_eq!(records[0].message(), "2 retries left");
//! ```

#[macro_use]
mod macros;
#[cfg(not(feature = "tracing"))]
#[macro_use]
mod standalone_macros;
#[cfg(feature = "tracing")]
#[macro_use]
mod tracing_macros;

mod capture;
mod config;
mod dispatch;
mod record;
mod severity;
mod threshold;
mod timing;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use capture::drain_records;
pub use config::{ConfigError, DEFAULT_SYSLOG_FACILITY, ENV_VAR, LogConfig, init};
pub use dispatch::{Destination, FORMAT_ERROR_MARKER, destination, log, logf, set_destination};
pub use record::{CallSite, Record};
pub use severity::{ParseSeverityError, Severity};
pub use threshold::{debug_break_enabled, enabled, level, set_debug_break_enabled, set_level};
pub use timing::{TimeStart, log_elapsed, log_elapsed_cutoff, time_start};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{PERF_TARGET, RecordLayer};

/// Support items for the exported macros. Not part of the public API.
#[doc(hidden)]
pub mod __private {
    use std::fmt;

    use crate::{CallSite, Severity};

    #[cfg(feature = "tracing")]
    pub use tracing;

    /// Dispatches a record that already passed the threshold.
    pub fn emit(level: Severity, call_site: &CallSite, args: fmt::Arguments<'_>) {
        crate::dispatch::dispatch(level, call_site, args);
    }

    /// Strips the marker item and closure frames from a `type_name` path.
    #[must_use]
    pub fn trim_function_name(path: &'static str) -> &'static str {
        let mut name = path.strip_suffix("::__here").unwrap_or(path);
        while let Some(outer) = name.strip_suffix("::{{closure}}") {
            name = outer;
        }
        name
    }
}
