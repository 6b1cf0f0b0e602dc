//! `SimOutputObserver<W>` — bridges `TrackObserver` to an `OutputWriter`.

use rt_core::{Event, QueueSample, SimTime, UtilizationSample, Zone};
use rt_sim::{RunReport, TrackObserver};

use crate::row::{EventRow, QueueRow, ZoneRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`TrackObserver`] that streams events and samples to any
/// [`OutputWriter`] while the run is in progress.
///
/// Errors from the writer are stored internally because `TrackObserver`
/// methods have no return value.  After `sim.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> TrackObserver for SimOutputObserver<W> {
    fn on_event(&mut self, event: &Event) {
        let result = self.writer.write_events(&[EventRow::from(event)]);
        self.store_err(result);
    }

    fn on_queue_sample(&mut self, sample: &QueueSample) {
        let result = self.writer.write_queue_sample(&QueueRow::from(sample));
        self.store_err(result);
    }

    fn on_zone_sample(&mut self, zone: Zone, sample: &UtilizationSample) {
        let result = self.writer.write_zone_samples(&[ZoneRow::new(zone, sample)]);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _end: SimTime, _complete: bool) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

/// Write a finished (or partial) report through `writer` and finish it.
///
/// Zone rows are grouped by zone (all of A, then B, then C), unlike the
/// interleaved order [`SimOutputObserver`] streams them in.
pub fn write_report<W: OutputWriter>(writer: &mut W, report: &RunReport) -> OutputResult<()> {
    let events: Vec<EventRow> = report.events.iter().map(EventRow::from).collect();
    writer.write_events(&events)?;

    for sample in &report.queue_samples {
        writer.write_queue_sample(&QueueRow::from(sample))?;
    }

    for series in &report.zone_util {
        let rows: Vec<ZoneRow> =
            series.samples.iter().map(|s| ZoneRow::new(series.zone, s)).collect();
        writer.write_zone_samples(&rows)?;
    }

    writer.finish()
}
