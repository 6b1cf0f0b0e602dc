//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `events.csv` (`rider_id,rider_type,zone,action,time`)
//! - `queue.csv`  (`time,queue_length`)
//! - `zone.csv`   (`zone,time,utilization`)

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EventRow, OutputResult, QueueRow, ZoneRow};

pub const EVENTS_FILE: &str = "events.csv";
pub const QUEUE_FILE: &str = "queue.csv";
pub const ZONE_FILE: &str = "zone.csv";

/// Writes the run logs to three CSV files.
pub struct CsvWriter {
    events:   Writer<File>,
    queue:    Writer<File>,
    zones:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create the three CSV files in `dir` (which must exist) and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join(EVENTS_FILE))?;
        events.write_record(["rider_id", "rider_type", "zone", "action", "time"])?;

        let mut queue = Writer::from_path(dir.join(QUEUE_FILE))?;
        queue.write_record(["time", "queue_length"])?;

        let mut zones = Writer::from_path(dir.join(ZONE_FILE))?;
        zones.write_record(["zone", "time", "utilization"])?;

        Ok(Self { events, queue, zones, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.rider_id.clone(),
                row.rider_type.to_owned(),
                row.zone.to_owned(),
                row.action.to_owned(),
                decimal(row.time),
            ])?;
        }
        Ok(())
    }

    fn write_queue_sample(&mut self, row: &QueueRow) -> OutputResult<()> {
        self.queue.write_record(&[decimal(row.time), row.queue_length.to_string()])?;
        Ok(())
    }

    fn write_zone_samples(&mut self, rows: &[ZoneRow]) -> OutputResult<()> {
        for row in rows {
            self.zones.write_record(&[
                row.zone.to_owned(),
                decimal(row.time),
                decimal(row.utilization),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.queue.flush()?;
        self.zones.flush()?;
        Ok(())
    }
}

/// Shortest round-trip form, always with a decimal point (`16.0`, `0.25`).
fn decimal(value: f64) -> String {
    format!("{value:?}")
}
