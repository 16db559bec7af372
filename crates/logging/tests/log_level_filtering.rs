//! Integration tests for severity threshold filtering.
//!
//! These tests verify that a record is emitted exactly when its severity is
//! at or above the process-wide threshold, for the plain `log`/`logf` entry
//! points and for the severity macros.

use logging::{
    LogConfig, Severity, drain_records, enabled, init, level, log, log_error, log_info, log_perf,
    log_warning, logf, set_level,
};
use proptest::prelude::*;
use serial_test::serial;

fn capture_at(threshold: Severity) {
    init(LogConfig::capture().with_level(threshold));
    drain_records();
}

// ============================================================================
// Threshold Comparison Tests
// ============================================================================

/// Verifies every (threshold, severity) pair against the ordering.
#[test]
#[serial]
fn log_emits_iff_severity_reaches_threshold() {
    for threshold in Severity::ALL {
        capture_at(threshold);
        for severity in Severity::ALL {
            log(severity, "sample");
            let records = drain_records();
            let expected = usize::from(severity >= threshold);
            assert_eq!(
                records.len(),
                expected,
                "severity {severity} at threshold {threshold}"
            );
            assert_eq!(enabled(severity), severity >= threshold);
        }
    }
}

/// Verifies the default configuration drops verbose and keeps debug.
#[test]
#[serial]
fn default_threshold_is_debug() {
    init(LogConfig::capture());
    drain_records();
    assert_eq!(level(), Severity::Debug);

    log(Severity::Verbose, "hidden");
    assert!(drain_records().is_empty());

    log(Severity::Debug, "shown");
    let records = drain_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].severity(), Severity::Debug);
}

/// Verifies that an error threshold silences everything else.
#[test]
#[serial]
fn error_threshold_only_emits_errors() {
    capture_at(Severity::Error);

    log(Severity::Warning, "w");
    log(Severity::Performance, "p");
    log(Severity::Info, "i");
    log(Severity::Error, "e");

    let records = drain_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message(), "e");
}

/// Verifies that a later `set_level` replaces an earlier one.
#[test]
#[serial]
fn last_set_level_wins() {
    capture_at(Severity::Error);
    set_level(Severity::Verbose);
    set_level(Severity::Warning);
    assert_eq!(level(), Severity::Warning);

    log(Severity::Info, "dropped");
    log(Severity::Warning, "kept");
    let records = drain_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message(), "kept");
}

// ============================================================================
// Formatted Entry Point Tests
// ============================================================================

/// Verifies `logf` renders arguments when the severity passes.
#[test]
#[serial]
fn logf_renders_at_or_below_threshold() {
    capture_at(Severity::Info);
    logf(Severity::Info, format_args!("value={}", 42));

    let records = drain_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message(), "value=42");
}

/// Verifies `logf` emits nothing above its severity.
#[test]
#[serial]
fn logf_drops_below_threshold() {
    capture_at(Severity::Warning);
    logf(Severity::Info, format_args!("value={}", 42));
    assert!(drain_records().is_empty());
}

/// Verifies the runtime-filtered macros follow the threshold.
#[test]
#[serial]
fn macros_follow_threshold() {
    capture_at(Severity::Performance);

    log_info!("info {}", 1);
    log_perf!("perf {}", 2);
    log_warning!("warning {}", 3);
    log_error!("error {}", 4);

    let messages: Vec<String> = drain_records()
        .into_iter()
        .map(|record| record.message().to_owned())
        .collect();
    assert_eq!(messages, ["perf 2", "warning 3", "error 4"]);
}

// ============================================================================
// Property Tests
// ============================================================================

fn severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

proptest! {
    /// Any message at any severity is either dropped or captured verbatim.
    #[test]
    #[serial]
    fn arbitrary_messages_filter_and_pass_through(
        threshold in severity(),
        record_severity in severity(),
        message in ".*",
    ) {
        capture_at(threshold);
        log(record_severity, &message);
        let records = drain_records();

        if record_severity >= threshold {
            prop_assert_eq!(records.len(), 1);
            prop_assert_eq!(records[0].severity(), record_severity);
            prop_assert_eq!(records[0].message(), message.as_str());
        } else {
            prop_assert!(records.is_empty());
        }
    }
}
