//! Plain data row types written by output backends.

use rt_core::{Event, QueueSample, UtilizationSample, Zone};

/// One line of `events.csv`.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRow {
    /// `"EXP-3"` style tag.
    pub rider_id:   String,
    /// `"INST"`, `"EXP"` or `"FOC"`.
    pub rider_type: &'static str,
    pub zone:       &'static str,
    pub action:     &'static str,
    pub time:       f64,
}

impl From<&Event> for EventRow {
    fn from(event: &Event) -> Self {
        Self {
            rider_id:   event.rider.to_string(),
            rider_type: event.rider.kind.tag(),
            zone:       event.zone.as_str(),
            action:     event.action.as_str(),
            time:       event.time.as_f64(),
        }
    }
}

/// One line of `queue.csv`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueueRow {
    pub time:         f64,
    pub queue_length: u32,
}

impl From<&QueueSample> for QueueRow {
    fn from(sample: &QueueSample) -> Self {
        Self { time: sample.time.as_f64(), queue_length: sample.queue_length }
    }
}

/// One line of `zone.csv`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneRow {
    /// `"A"`, `"B"` or `"C"`.
    pub zone:        &'static str,
    pub time:        f64,
    pub utilization: f64,
}

impl ZoneRow {
    pub fn new(zone: Zone, sample: &UtilizationSample) -> Self {
        Self {
            zone:        zone_label(zone),
            time:        sample.time.as_f64(),
            utilization: sample.utilization,
        }
    }
}

/// Single-letter label of a sampled zone; other zones keep their full name.
pub fn zone_label(zone: Zone) -> &'static str {
    match zone {
        Zone::ZoneA => "A",
        Zone::ZoneB => "B",
        Zone::ZoneC => "C",
        other => other.as_str(),
    }
}
