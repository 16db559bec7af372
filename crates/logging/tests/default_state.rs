//! Process-wide defaults before any configuration call.
//!
//! Kept in its own test binary so nothing else touches the globals first.

use logging::{Destination, Severity, debug_break_enabled, destination, enabled, level};

/// Verifies the untouched process starts at debug, stderr, no break.
#[test]
fn globals_start_at_documented_defaults() {
    assert_eq!(level(), Severity::Debug);
    assert!(!enabled(Severity::Verbose));
    assert!(enabled(Severity::Debug));
    assert!(!debug_break_enabled());
    assert_eq!(destination(), Destination::Stderr);
}
