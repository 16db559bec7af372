//! Integration tests for the `leveled_log` facade.
//!
//! Exercises the re-exported API and macros from an external crate, the way
//! an application would use it.

use leveled_log::sink::LineSink;
use leveled_log::{
    LogConfig, Severity, drain_records, init, log, log_debug, log_info, log_warning, set_level,
};
use serial_test::serial;

mod storage {
    pub fn open(path: &str) {
        leveled_log::log_error!("cannot open {path}");
    }
}

/// Verifies the re-exported macros resolve through the facade.
#[test]
#[serial]
fn macros_work_through_facade() {
    init(LogConfig::capture().with_level(Severity::Info));
    drain_records();

    log_info!("starting {}", "app");
    log_warning!("low disk");
    log_debug!("filtered by threshold");
    storage::open("db.sqlite");

    let records = drain_records();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].message(), "starting app");
    assert!(records[2].call_site().starts_with("facade::storage::open:"));
    assert!(records[2].render().ends_with(" E cannot open db.sqlite"));
}

/// Verifies the plain entry point and threshold through the facade.
#[test]
#[serial]
fn log_function_follows_threshold() {
    init(LogConfig::capture());
    drain_records();
    set_level(Severity::Error);

    log(Severity::Warning, "dropped");
    log(Severity::Error, "kept");

    let records = drain_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message(), "kept");
    set_level(Severity::DEFAULT_THRESHOLD);
}

/// Verifies rendered records can be written with the re-exported line sink.
#[test]
fn records_render_into_line_sink() {
    let record = leveled_log::Record::new(Severity::Info, "app::main:3", "ready");
    let mut sink = LineSink::new(Vec::new());
    sink.write_line(&record.render()).expect("write to vec");

    let output = String::from_utf8(sink.into_inner()).expect("utf-8");
    assert_eq!(output, "app::main:3 I ready\n");
}
