//! The `OutputWriter` trait implemented by backend writers.

use crate::{EventRow, OutputResult, QueueRow, ZoneRow};

/// A sink for the three run logs.
///
/// When driven by [`SimOutputObserver`][crate::SimOutputObserver], errors are
/// stored and retrieved with
/// [`take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()>;

    fn write_queue_sample(&mut self, row: &QueueRow) -> OutputResult<()>;

    fn write_zone_samples(&mut self, rows: &[ZoneRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
