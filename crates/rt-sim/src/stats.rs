//! Post-run aggregates over a [`RunReport`].
//!
//! Nothing here touches the scheduler; every function is a pure fold over
//! the report's logs.

use std::collections::HashMap;

use rt_core::{Action, Event, RiderId, RiderKind, SimTime, Zone};

use crate::{PoolPeak, RunReport};

// ── Stints ────────────────────────────────────────────────────────────────────

/// One rider's stay in one zone: the interval a timeline chart draws.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stint {
    pub rider:  RiderId,
    pub zone:   Zone,
    pub start:  SimTime,
    pub finish: SimTime,
}

impl Stint {
    #[inline]
    pub fn duration(&self) -> f64 {
        self.finish.since(self.start)
    }
}

/// Pair every `enter` with the matching `exit` of the same rider and zone.
///
/// An `enter` with no `exit` (a partial run) produces no stint.  The result
/// is sorted by rider, then start time, then zone order.
pub fn stints(events: &[Event]) -> Vec<Stint> {
    let mut open: HashMap<(RiderId, Zone), SimTime> = HashMap::new();
    let mut out = Vec::new();

    for event in events {
        let key = (event.rider, event.zone);
        match event.action {
            Action::Enter => {
                open.insert(key, event.time);
            }
            Action::Exit => {
                if let Some(start) = open.remove(&key) {
                    out.push(Stint { rider: event.rider, zone: event.zone, start, finish: event.time });
                }
            }
        }
    }

    out.sort_by(|a, b| {
        a.rider
            .cmp(&b.rider)
            .then(a.start.cmp(&b.start))
            .then(a.zone.ordinal().cmp(&b.zone.ordinal()))
    });
    out
}

// ── Summaries ─────────────────────────────────────────────────────────────────

/// Aggregates for one rider batch.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchSummary {
    pub kind:             RiderKind,
    /// Riders of this kind that finished the course.
    pub riders:           u32,
    /// Earliest Gate-enter of the batch.
    pub first_gate_enter: Option<SimTime>,
    /// Latest ExitGate-exit of the batch.
    pub last_finish:      Option<SimTime>,
    /// Mean Queue-enter → Queue-exit wait; `0` for an empty batch.
    pub mean_queue_wait:  f64,
    pub max_queue_wait:   f64,
}

/// Utilization aggregates for one sampled zone.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneSummary {
    pub zone:             Zone,
    pub mean_utilization: f64,
    pub peak_utilization: f64,
}

/// Headline numbers of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub total_time:        SimTime,
    pub riders_finished:   u64,
    /// Instructor, Experienced, Focus.
    pub batches:           Vec<BatchSummary>,
    /// Zones A, B, C.
    pub zones:             Vec<ZoneSummary>,
    pub max_queue_length:  u32,
    pub mean_queue_length: f64,
    /// Per-pool high-water marks, copied from the report.
    pub pools:             Vec<PoolPeak>,
}

impl RunSummary {
    pub fn from_report(report: &RunReport) -> Self {
        let all = stints(&report.events);

        let batches = RiderKind::ALL
            .iter()
            .map(|&kind| batch_summary(kind, &report.events, &all))
            .collect();

        let zones = report
            .zone_util
            .iter()
            .map(|series| {
                let values: Vec<f64> = series.samples.iter().map(|s| s.utilization).collect();
                ZoneSummary {
                    zone:             series.zone,
                    mean_utilization: mean(&values),
                    peak_utilization: values.iter().copied().fold(0.0, f64::max),
                }
            })
            .collect();

        let lengths: Vec<f64> =
            report.queue_samples.iter().map(|s| s.queue_length as f64).collect();

        Self {
            total_time: report.total_time,
            riders_finished: report.finished,
            batches,
            zones,
            max_queue_length: report.queue_samples.iter().map(|s| s.queue_length).max().unwrap_or(0),
            mean_queue_length: mean(&lengths),
            pools: report.pools.clone(),
        }
    }

    pub fn batch(&self, kind: RiderKind) -> Option<&BatchSummary> {
        self.batches.iter().find(|b| b.kind == kind)
    }

    pub fn zone(&self, zone: Zone) -> Option<&ZoneSummary> {
        self.zones.iter().find(|z| z.zone == zone)
    }
}

fn batch_summary(kind: RiderKind, events: &[Event], all: &[Stint]) -> BatchSummary {
    let of_kind = || events.iter().filter(move |e| e.rider.kind == kind);

    let finishes: Vec<SimTime> =
        of_kind().filter(|e| e.is(Zone::Exit, Action::Exit)).map(|e| e.time).collect();
    let riders = finishes.len() as u32;
    let last_finish = finishes.iter().copied().max();
    let first_gate_enter = of_kind().filter(|e| e.is(Zone::Gate, Action::Enter)).map(|e| e.time).min();

    let waits: Vec<f64> = all
        .iter()
        .filter(|s| s.rider.kind == kind && s.zone == Zone::Queue)
        .map(Stint::duration)
        .collect();

    BatchSummary {
        kind,
        riders,
        first_gate_enter,
        last_finish,
        mean_queue_wait: mean(&waits),
        max_queue_wait: waits.iter().copied().fold(0.0, f64::max),
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
