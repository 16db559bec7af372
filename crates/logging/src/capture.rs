//! crates/logging/src/capture.rs
//! Thread-local buffer backing [`Destination::Capture`](crate::Destination::Capture).

use super::record::Record;
use std::cell::RefCell;

thread_local! {
    #[allow(clippy::missing_const_for_thread_local)]
    static RECORDS: RefCell<Vec<Record>> = RefCell::new(Vec::new());
}

/// Appends a record to the current thread's capture buffer.
///
/// The record is dropped once the buffer has been torn down, e.g. when a
/// thread-local destructor logs during thread exit.
pub(crate) fn push(record: Record) {
    let _ = RECORDS.try_with(|records| records.borrow_mut().push(record));
}

/// Drains every record captured on the current thread, oldest first.
///
/// Only records emitted while the destination was
/// [`Destination::Capture`](crate::Destination::Capture) are collected, and
/// only on the thread that emitted them. Returns an empty list once the
/// thread's buffer has been torn down.
pub fn drain_records() -> Vec<Record> {
    RECORDS
        .try_with(|records| records.borrow_mut().drain(..).collect())
        .unwrap_or_default()
}
