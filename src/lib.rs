#![deny(unsafe_code)]
#![deny(missing_docs)]

//! Leveled diagnostic logging.
//!
//! This crate re-exports the [`logging`] API together with its macros, and the
//! output destinations from [`logging_sink`] as [`sink`]. Enable the `tracing`
//! feature to delegate every entry point to the `tracing` ecosystem, or
//! `serde` to serialize configuration types.
//!
//! ```
//! use leveled_log::{drain_records, init, log_error, LogConfig, Severity};
//!
//! init(LogConfig::capture());
//! log_error!("cannot open {}", "db.sqlite");
//!
//! let records = drain_records();
//! assert_eq!(records[0].severity(), Severity::Error);
//! ```

pub use logging::*;
pub use logging_sink as sink;
