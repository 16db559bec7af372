//! crates/logging/src/macros.rs
//! Call-site and timing macros shared by both macro sets.

/// Expands to the path of the enclosing function, e.g. `app::db::open`.
///
/// Closure frames are stripped, so a call inside a closure names the function
/// that defines it.
///
/// ```
/// fn open() -> &'static str {
///     logging::function_name!()
/// }
///
/// assert!(open().ends_with("::open"));
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        $crate::__private::trim_function_name(::core::any::type_name_of_val(&__here))
    }};
}

/// Expands to a [`CallSite`](crate::CallSite) for the invocation point.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(
            $crate::function_name!(),
            ::core::file!(),
            ::core::line!(),
        )
    };
}

/// Timing hook. Borrows `start` and emits nothing; the message arguments are
/// never evaluated.
///
/// ```
/// use logging::{log_time, time_start};
///
/// let start = time_start();
/// log_time!(start, "loaded {} rows", 120);
/// ```
#[macro_export]
macro_rules! log_time {
    ($start:expr $(, $($arg:tt)*)?) => {{
        let _: &$crate::TimeStart = &$start;
    }};
}

/// Timing hook with a cutoff. Emits nothing whether or not the cutoff has
/// passed.
#[macro_export]
macro_rules! log_time_cutoff {
    ($cutoff:expr, $start:expr $(, $($arg:tt)*)?) => {{
        let _: &::core::time::Duration = &$cutoff;
        let _: &$crate::TimeStart = &$start;
    }};
}
