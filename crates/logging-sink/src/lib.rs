#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` holds the output destinations used by the `logging` crate.
//! Rendering and filtering happen in `logging`; this crate only moves finished
//! lines to where they belong.
//!
//! # Design
//!
//! - [`LineSink`] wraps any [`std::io::Write`] implementor and writes one
//!   newline-terminated line per call. The logger wraps a locked standard
//!   error handle in it so each diagnostic lands as a single write sequence.
//! - [`syslog`] (Unix only) routes lines to `syslog(3)` through `libc`. The
//!   connection is opened once per process and stays open until exit.
//!
//! # Errors
//!
//! [`LineSink`] surfaces [`std::io::Error`] values from the wrapped writer.
//! The syslog backend has no failure path: `syslog(3)` itself reports nothing.
//!
//! # Examples
//!
//! ```
//! use logging_sink::LineSink;
//!
//! let mut sink = LineSink::new(Vec::new());
//! sink.write_line("app::main:12 W disk almost full")?;
//! sink.write_line("app::main:13 E disk full")?;
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(output.lines().count(), 2);
//! # Ok::<(), std::io::Error>(())
//! ```

mod line_sink;
#[cfg(unix)]
#[allow(unsafe_code)]
pub mod syslog;

pub use line_sink::LineSink;
