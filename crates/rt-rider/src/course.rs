//! The course a rider follows, derived from the track configuration and the
//! Zone-A policy.

use rt_core::{PoolKind, TrackConfig, Zone, ZoneAPolicy};

/// One zone of the course: how long a rider stays and which pool, if any,
/// must be held while inside.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stage {
    pub zone:  Zone,
    pub dwell: f64,
    pub pool:  Option<PoolKind>,
}

/// The dwell/pool table for the five timed zones (`Gate` … `Exit`).
///
/// The queue is not a stage: a rider is "in the queue" exactly while waiting
/// for the entry gate's pool.
#[derive(Clone, Debug, PartialEq)]
pub struct Course {
    stages: [Stage; 5],
}

impl Course {
    pub fn new(config: &TrackConfig, zone_a: ZoneAPolicy) -> Self {
        let zone_a_pool = match zone_a {
            ZoneAPolicy::Unconstrained => None,
            ZoneAPolicy::Gated         => Some(PoolKind::ZoneA),
        };
        let stage = |zone: Zone, pool| Stage { zone, dwell: config.dwell(zone), pool };
        Self {
            stages: [
                stage(Zone::Gate,  Some(PoolKind::EntryGate)),
                stage(Zone::ZoneA, zone_a_pool),
                stage(Zone::ZoneB, Some(PoolKind::ZoneB)),
                stage(Zone::ZoneC, Some(PoolKind::ZoneC)),
                stage(Zone::Exit,  None),
            ],
        }
    }

    /// The stage for `zone`.
    ///
    /// # Panics
    /// Panics for [`Zone::Queue`], which has no stage.
    pub fn stage(&self, zone: Zone) -> &Stage {
        assert!(zone != Zone::Queue, "the queue is not a course stage");
        &self.stages[zone.ordinal() - 1]
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }
}
