//! crates/logging/src/tracing_macros.rs
//! Severity macros for the `tracing` build.
//!
//! Same call syntax as the self-contained macros, but each expands to the
//! matching `tracing` macro with a `call_site` field. Performance records use
//! `info!` with [`PERF_TARGET`](crate::PERF_TARGET) as target. Debug elision
//! still follows the calling crate's `debug_assertions`.
//!
//! Under a host-installed subscriber these events are filtered by the host's
//! layers; [`set_level`](crate::set_level) reaches only `RecordLayer`.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_event {
    ($mac:ident, $target:expr, $fmt:literal $($arg:tt)*) => {
        $crate::__private::tracing::$mac!(
            target: $target,
            call_site = %$crate::call_site!(),
            $fmt $($arg)*
        )
    };
    ($mac:ident, $target:expr, $message:expr $(,)?) => {
        $crate::__log_event!($mac, $target, "{}", $message)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_log {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::__log_event!(error, ::core::module_path!(), $($arg)+);
        }
    };
}

/// Emits a `tracing::error!` event.
///
/// ```
/// use logging::{drain_records, init, log_error, LogConfig, Severity};
///
/// init(LogConfig::capture());
/// log_error!("cannot open {}", "db.sqlite");
///
/// let records = drain_records();
/// assert_eq!(records[0].severity(), Severity::Error);
/// assert_eq!(records[0].message(), "cannot open db.sqlite");
/// ```
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {
        $crate::__log_event!(error, ::core::module_path!(), $($arg)+)
    };
}

/// Emits a `tracing::warn!` event.
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)+) => {
        $crate::__log_event!(warn, ::core::module_path!(), $($arg)+)
    };
}

/// Emits a `tracing::info!` event targeted at [`PERF_TARGET`](crate::PERF_TARGET).
#[macro_export]
macro_rules! log_perf {
    ($($arg:tt)+) => {
        $crate::__log_event!(info, $crate::PERF_TARGET, $($arg)+)
    };
}

/// Emits a `tracing::info!` event.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => {
        $crate::__log_event!(info, ::core::module_path!(), $($arg)+)
    };
}

/// Emits a `tracing::debug!` event in debug builds only.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => {{
        #[cfg(debug_assertions)]
        $crate::__log_event!(debug, ::core::module_path!(), $($arg)+);
    }};
}

/// Emits a `tracing::trace!` event in debug builds only.
#[macro_export]
macro_rules! log_verbose {
    ($($arg:tt)+) => {{
        #[cfg(debug_assertions)]
        $crate::__log_event!(trace, ::core::module_path!(), $($arg)+);
    }};
}

/// Emits a `tracing::error!` event when `cond` is false, in debug builds only.
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
