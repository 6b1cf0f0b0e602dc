//! The finished (or partial) result of a run.

use std::fmt;

use rt_core::{
    Action, Event, PoolKind, QueueSample, RiderId, SimTime, TrackConfig, TrackPolicy,
    UtilizationSample, Zone,
};
use rt_schedule::ResourcePool;

/// Why a run stopped before the completion barrier.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StallReason {
    /// The next agenda entry lies beyond the time ceiling.
    CeilingReached { ceiling: f64, next: SimTime },
    /// Nothing is scheduled and nothing can wake a blocked process.
    NoPendingWork,
}

impl fmt::Display for StallReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StallReason::CeilingReached { ceiling, next } => {
                write!(f, "time ceiling {ceiling} reached, next work at {next}")
            }
            StallReason::NoPendingWork => f.write_str("no pending work"),
        }
    }
}

/// One zone's utilization series.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneSeries {
    pub zone:    Zone,
    pub samples: Vec<UtilizationSample>,
}

/// When each batch latch fired, if it did.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct LatchTimes {
    pub instructor_done:  Option<SimTime>,
    pub experienced_done: Option<SimTime>,
}

/// High-water marks of one pool over a run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PoolPeak {
    pub kind:       PoolKind,
    pub capacity:   u32,
    /// Most slots held at once; never above `capacity`.
    pub peak_held:  u32,
    /// Longest wait line.
    pub peak_queue: usize,
}

impl PoolPeak {
    pub fn of(pool: &ResourcePool) -> Self {
        Self {
            kind:       pool.kind(),
            capacity:   pool.capacity(),
            peak_held:  pool.peak_held(),
            peak_queue: pool.peak_queue(),
        }
    }
}

/// Everything a run produced.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    pub config:        TrackConfig,
    pub policy:        TrackPolicy,
    /// Append order: non-decreasing time, scheduler order within an instant.
    pub events:        Vec<Event>,
    pub queue_samples: Vec<QueueSample>,
    /// Zones A, B and C, in that order.
    pub zone_util:     Vec<ZoneSeries>,
    /// Latest event timestamp; `0` when no event was recorded.
    pub total_time:    SimTime,
    /// The clock when the run stopped.
    pub end_time:      SimTime,
    pub finished:      u64,
    pub expected:      u64,
    /// Entry gate, Zone A, Zone B, Zone C.
    pub pools:         Vec<PoolPeak>,
    pub latches:       LatchTimes,
}

impl RunReport {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.finished == self.expected
    }

    /// Utilization samples for `zone` (empty for zones that are not sampled).
    pub fn zone_util(&self, zone: Zone) -> &[UtilizationSample] {
        self.zone_util
            .iter()
            .find(|s| s.zone == zone)
            .map(|s| s.samples.as_slice())
            .unwrap_or(&[])
    }

    pub fn pool(&self, kind: PoolKind) -> Option<&PoolPeak> {
        self.pools.iter().find(|p| p.kind == kind)
    }

    /// One rider's events, in log order.
    pub fn events_for(&self, rider: RiderId) -> impl Iterator<Item = &Event> + '_ {
        self.events.iter().filter(move |e| e.rider == rider)
    }

    /// Time of the first matching event of `rider`.
    pub fn time_of(&self, rider: RiderId, zone: Zone, action: Action) -> Option<SimTime> {
        self.events_for(rider).find(|e| e.is(zone, action)).map(|e| e.time)
    }

    /// Latest timestamp in `events`, or `0`.
    pub fn latest_event_time(events: &[Event]) -> SimTime {
        events.iter().map(|e| e.time).max().unwrap_or(SimTime::ZERO)
    }
}
