//! Records produced by a run: the event log and the periodic samples.

use crate::{Action, RiderId, RiderKind, SimTime, Zone};

/// One state transition of one rider.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub rider:  RiderId,
    pub zone:   Zone,
    pub action: Action,
    pub time:   SimTime,
}

impl Event {
    #[inline]
    pub fn rider_kind(&self) -> RiderKind {
        self.rider.kind
    }

    #[inline]
    pub fn is(&self, zone: Zone, action: Action) -> bool {
        self.zone == zone && self.action == action
    }
}

/// Riders waiting for the entry gate at `time`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueSample {
    pub time:         SimTime,
    pub queue_length: u32,
}

/// `held / capacity` of one zone's pool at `time`, in `[0, 1]`.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UtilizationSample {
    pub time:        SimTime,
    pub utilization: f64,
}
