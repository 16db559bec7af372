//! crates/logging/src/standalone_macros.rs
//! Severity macros for the self-contained build.
//!
//! Each macro accepts a format string with positional arguments, or a single
//! non-literal expression whose `Display` output is logged verbatim. Records
//! carry the enclosing function path as their call site.
//!
//! `log_debug!`, `log_verbose!` and `log_assert!` expand to nothing when the
//! *calling* crate is built without `debug_assertions`; their arguments are
//! not evaluated.

#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($level:expr, $fmt:literal $($arg:tt)*) => {{
        let level = $level;
        if $crate::enabled(level) {
            $crate::__private::emit(
                level,
                &$crate::call_site!(),
                ::core::format_args!($fmt $($arg)*),
            );
        }
    }};
    ($level:expr, $message:expr $(,)?) => {
        $crate::__log!($level, "{}", $message)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_log {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::__log!($crate::Severity::Error, $($arg)+);
        }
    };
}

/// Logs at [`Severity::Error`](crate::Severity::Error).
///
/// ```
/// use logging::{drain_records, init, log_error, LogConfig};
///
/// init(LogConfig::capture());
/// log_error!("cannot open {}", "db.sqlite");
///
/// let records = drain_records();
/// assert_eq!(records[0].message(), "cannot open db.sqlite");
/// assert!(records[0].call_site().contains("main"));
/// ```
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {
        $crate::__log!($crate::Severity::Error, $($arg)+)
    };
}

/// Logs at [`Severity::Warning`](crate::Severity::Warning).
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)+) => {
        $crate::__log!($crate::Severity::Warning, $($arg)+)
    };
}

/// Logs at [`Severity::Performance`](crate::Severity::Performance).
#[macro_export]
macro_rules! log_perf {
    ($($arg:tt)+) => {
        $crate::__log!($crate::Severity::Performance, $($arg)+)
    };
}

/// Logs at [`Severity::Info`](crate::Severity::Info).
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => {
        $crate::__log!($crate::Severity::Info, $($arg)+)
    };
}

/// Logs at [`Severity::Debug`](crate::Severity::Debug) in debug builds only.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => {{
        #[cfg(debug_assertions)]
        $crate::__log!($crate::Severity::Debug, $($arg)+);
    }};
}

/// Logs at [`Severity::Verbose`](crate::Severity::Verbose) in debug builds only.
#[macro_export]
macro_rules! log_verbose {
    ($($arg:tt)+) => {{
        #[cfg(debug_assertions)]
        $crate::__log!($crate::Severity::Verbose, $($arg)+);
    }};
}

/// Logs an error when `cond` is false. Never panics.
///
/// In builds without `debug_assertions` neither the condition nor the message
/// is evaluated. Without a message the stringified condition is logged.
///
/// ```
/// use logging::{drain_records, init, log_assert, LogConfig};
///
/// init(LogConfig::capture());
/// let rows = 3;
/// log_assert!(rows == 3, "never logged");
/// log_assert!(rows > 10, "rows={}", rows);
///
/// let records = drain_records();
/// if cfg!(debug_assertions) {
///     assert_eq!(records.len(), 1);
///     assert_eq!(records[0].message(), "rows=3");
/// } else {
///     assert!(records.is_empty());
/// }
/// ```
#[macro_export]
macro_rules! log_assert {
    ($cond:expr $(,)?) => {
        $crate::log_assert!($cond, "assertion failed: {}", ::core::stringify!($cond))
    };
    ($cond:expr, $($arg:tt)+) => {{
        #[cfg(debug_assertions)]
        $crate::__assert_log!($cond, $($arg)+);
    }};
}
