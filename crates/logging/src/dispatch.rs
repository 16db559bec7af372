//! crates/logging/src/dispatch.rs
//! Output destination selection and the `log`/`logf` entry points.

use std::fmt;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe, Location};
use std::sync::atomic::{AtomicU8, Ordering};

use logging_sink::LineSink;

use super::capture;
use super::record::{CallSite, Record};
use super::severity::Severity;
use super::threshold::enabled;

/// Appended to a message whose formatting failed part way through.
pub const FORMAT_ERROR_MARKER: &str = " [format error]";

/// Where emitted records go.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Destination {
    /// One line per record on standard error.
    #[default]
    Stderr = 0,
    /// The system log. Falls back to standard error on non-Unix targets.
    Syslog = 1,
    /// The emitting thread's capture buffer, read back with
    /// [`drain_records`](crate::drain_records).
    Capture = 2,
}

impl Destination {
    /// Returns the lowercase name used in configuration directives.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stderr => "stderr",
            Self::Syslog => "syslog",
            Self::Capture => "capture",
        }
    }

    const fn from_ordinal(ordinal: u8) -> Self {
        match ordinal {
            1 => Self::Syslog,
            2 => Self::Capture,
            _ => Self::Stderr,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static DESTINATION: AtomicU8 = AtomicU8::new(Destination::Stderr as u8);

/// Routes subsequent records to `destination`.
///
/// Selecting [`Destination::Syslog`] does not open the connection; the first
/// record sent there opens it with the default facility unless
/// [`init`](crate::init) already did.
pub fn set_destination(destination: Destination) {
    DESTINATION.store(destination as u8, Ordering::Relaxed);
}

/// Returns the current destination.
pub fn destination() -> Destination {
    Destination::from_ordinal(DESTINATION.load(Ordering::Relaxed))
}

/// Emits `message` verbatim at `level`, attributed to the caller's file and line.
///
/// Nothing happens when `level` is below the threshold. The text is not
/// interpreted as a format string, so `%d` or `{}` appear as written.
///
/// # Examples
///
/// ```
/// use logging::{drain_records, init, log, LogConfig, Severity};
///
/// init(LogConfig::capture());
/// log(Severity::Warning, "disk 91% full");
///
/// let records = drain_records();
/// assert_eq!(records[0].message(), "disk 91% full");
/// ```
#[track_caller]
pub fn log(level: Severity, message: &str) {
    if enabled(level) {
        dispatch(
            level,
            &CallSite::from_location(Location::caller()),
            format_args!("{message}"),
        );
    }
}

/// Formats `args` and emits the result at `level`, attributed to the caller's
/// file and line.
///
/// Arguments are only rendered when `level` passes the threshold.
///
/// ```
/// use logging::{drain_records, init, logf, LogConfig, Severity};
///
/// init(LogConfig::capture());
/// logf(Severity::Info, format_args!("value={}", 42));
/// assert_eq!(drain_records()[0].message(), "value=42");
/// ```
#[track_caller]
pub fn logf(level: Severity, args: fmt::Arguments<'_>) {
    if enabled(level) {
        dispatch(level, &CallSite::from_location(Location::caller()), args);
    }
}

/// Hands a record that already passed the threshold to the active backend.
#[cfg(not(feature = "tracing"))]
pub(crate) fn dispatch(level: Severity, call_site: &CallSite, args: fmt::Arguments<'_>) {
    deliver(Record::new(level, call_site.to_string(), render_message(args)));
}

#[cfg(feature = "tracing")]
pub(crate) fn dispatch(level: Severity, call_site: &CallSite, args: fmt::Arguments<'_>) {
    super::tracing_bridge::forward(level, call_site, args);
}

/// Writes a finished record to the current destination. Write failures are
/// dropped.
pub(crate) fn deliver(record: Record) {
    match destination() {
        Destination::Stderr => write_stderr(&record),
        Destination::Syslog => write_syslog(&record),
        Destination::Capture => capture::push(record),
    }
}

/// Renders `args`, degrading to the text produced so far plus
/// [`FORMAT_ERROR_MARKER`] when a formatting impl fails or panics.
pub(crate) fn render_message(args: fmt::Arguments<'_>) -> String {
    if let Some(text) = args.as_str() {
        return text.to_owned();
    }

    let mut buffer = String::new();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| fmt::write(&mut buffer, args)));
    if !matches!(outcome, Ok(Ok(()))) {
        buffer.push_str(FORMAT_ERROR_MARKER);
    }
    buffer
}

fn write_stderr(record: &Record) {
    let stderr = io::stderr();
    let _ = write_record(stderr.lock(), record);
}

/// Writes `record` as one rendered line to `writer`.
fn write_record<W: Write>(writer: W, record: &Record) -> io::Result<()> {
    let mut sink = LineSink::new(writer);
    sink.write_line(&record.render())?;
    sink.flush()
}

#[cfg(unix)]
fn write_syslog(record: &Record) {
    use logging_sink::syslog;

    if !syslog::is_open() {
        syslog::open_once(&syslog::SyslogConfig::default());
    }
    syslog::send(syslog_priority(record.severity()), &record.render());
}

#[cfg(not(unix))]
fn write_syslog(record: &Record) {
    write_stderr(record);
}

#[cfg(unix)]
const fn syslog_priority(severity: Severity) -> logging_sink::syslog::SyslogPriority {
    use logging_sink::syslog::SyslogPriority;

    match severity {
        Severity::Error => SyslogPriority::Error,
        Severity::Warning => SyslogPriority::Warning,
        Severity::Performance => SyslogPriority::Notice,
        Severity::Info => SyslogPriority::Info,
        Severity::Debug | Severity::Verbose => SyslogPriority::Debug,
    }
}
