//! Integration tests for the per-severity macros.
//!
//! Covers format handling, call-site attribution, the assertion macro and the
//! removal of debug-only macros from builds without `debug_assertions`.

use std::cell::Cell;

use logging::{
    LogConfig, Severity, drain_records, init, log_assert, log_debug, log_error, log_info,
    log_perf, log_verbose, log_warning,
};
use serial_test::serial;

fn capture_at(threshold: Severity) {
    init(LogConfig::capture().with_level(threshold));
    drain_records();
}

// ============================================================================
// Message Forms
// ============================================================================

/// Verifies positional arguments are rendered.
#[test]
#[serial]
fn format_arguments_are_rendered() {
    capture_at(Severity::Info);
    log_info!("value={}", 42);
    log_error!("{1}-{0}", "a", "b");

    let records = drain_records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].severity(), Severity::Info);
    assert_eq!(records[0].message(), "value=42");
    assert_eq!(records[1].message(), "b-a");
}

/// Verifies a non-literal message is logged verbatim.
#[test]
#[serial]
fn expression_message_is_verbatim() {
    capture_at(Severity::Info);
    let message = String::from("100% done {} %d");
    log_warning!(message);
    log_info!(&message,);

    let records = drain_records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].message(), "100% done {} %d");
    assert_eq!(records[1].message(), "100% done {} %d");
}

/// Verifies the perf macro carries the performance severity and tag.
#[test]
#[serial]
fn perf_macro_uses_performance_severity() {
    capture_at(Severity::Performance);
    log_perf!("took {}ms", 12);

    let records = drain_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].severity(), Severity::Performance);
    assert!(records[0].render().ends_with(" P took 12ms"));
}

// ============================================================================
// Call Site Attribution
// ============================================================================

/// Verifies macro records name the enclosing function and line.
#[test]
#[serial]
fn macro_records_enclosing_function() {
    capture_at(Severity::Info);
    let line = line!() + 1;
    log_info!("here");

    let records = drain_records();
    assert_eq!(
        records[0].call_site(),
        format!("severity_macros::macro_records_enclosing_function:{line}")
    );
}

/// Verifies closures report the function that defines them.
#[test]
#[serial]
fn closure_records_outer_function() {
    capture_at(Severity::Info);
    let emit = || log_warning!("from closure");
    emit();

    let records = drain_records();
    assert!(
        records[0]
            .call_site()
            .starts_with("severity_macros::closure_records_outer_function:")
    );
}

// ============================================================================
// Assertion Macro
// ============================================================================

/// Verifies a holding condition never emits.
#[test]
#[serial]
fn assert_true_never_emits() {
    capture_at(Severity::Verbose);
    log_assert!(true, "should not appear");
    log_assert!(1 + 1 == 2);
    assert!(drain_records().is_empty());
}

/// Verifies a failing condition emits an error and returns normally.
#[cfg(debug_assertions)]
#[test]
#[serial]
fn assert_false_emits_error() {
    capture_at(Severity::Verbose);
    log_assert!(false, "x={}", 5);
    let ready = false;
    log_assert!(ready);

    let records = drain_records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].severity(), Severity::Error);
    assert_eq!(records[0].message(), "x=5");
    assert_eq!(records[1].message(), "assertion failed: ready");
}

/// Verifies the assertion record is still filtered by the threshold.
#[cfg(debug_assertions)]
#[test]
#[serial]
fn assert_false_respects_threshold() {
    capture_at(Severity::Error);
    log_assert!(false, "kept");
    assert_eq!(drain_records().len(), 1);
}

// ============================================================================
// Debug-Only Macros
// ============================================================================

/// Verifies debug and verbose macros emit in debug builds.
#[cfg(debug_assertions)]
#[test]
#[serial]
fn debug_macros_emit_in_debug_builds() {
    capture_at(Severity::Verbose);
    log_debug!("debug {}", 1);
    log_verbose!("verbose {}", 2);

    let records = drain_records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].severity(), Severity::Debug);
    assert_eq!(records[1].severity(), Severity::Verbose);
    assert_eq!(records[1].message(), "verbose 2");
}

/// Verifies the verbose macro is still filtered at the default threshold.
#[cfg(debug_assertions)]
#[test]
#[serial]
fn verbose_macro_filtered_at_default_threshold() {
    capture_at(Severity::Debug);
    log_verbose!("hidden");
    log_debug!("shown");

    let records = drain_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message(), "shown");
}

/// Verifies the debug-only macros vanish without `debug_assertions`,
/// including evaluation of their arguments.
#[cfg(not(debug_assertions))]
#[test]
#[serial]
fn debug_macros_are_elided_in_release_builds() {
    capture_at(Severity::Verbose);
    let evaluated = Cell::new(0_u32);
    let touch = || {
        evaluated.set(evaluated.get() + 1);
        evaluated.get()
    };

    log_debug!("debug {}", touch());
    log_verbose!("verbose {}", touch());
    log_assert!(touch() == 0, "never {}", touch());

    assert_eq!(evaluated.get(), 0);
    assert!(drain_records().is_empty());
}

/// Verifies runtime-filtered macros evaluate arguments only when enabled.
#[test]
#[serial]
fn filtered_macro_skips_argument_evaluation() {
    capture_at(Severity::Error);
    let evaluated = Cell::new(false);
    let touch = || {
        evaluated.set(true);
        "x"
    };

    log_info!("{}", touch());

    assert!(drain_records().is_empty());
    if cfg!(not(feature = "tracing")) {
        assert!(!evaluated.get());
    }
}
