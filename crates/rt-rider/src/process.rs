//! `RiderProcess` — one rider's lifecycle.
//!
//! ```text
//! Spawned ──▶ Admitted(Gate) ──▶ Dwelt(Gate) ──▶ Admitted(ZoneA) ──▶ …
//!         ──▶ Dwelt(Exit) ──▶ Finished
//! ```
//!
//! `Admitted(z)` means "holds whatever `z` requires and is about to enter".
//! When `z` has a pool the rider parks in `Admitted(z)` behind an
//! `Acquire`; when it has none the machine passes straight through.

use rt_core::{Action, RiderId, Zone};

use crate::{Command, Course};

/// Where a rider is in its lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Created, not yet resumed.
    Spawned,
    /// Cleared to enter the zone (pool granted, or none needed).
    Admitted(Zone),
    /// Dwell inside the zone has elapsed.
    Dwelt(Zone),
    /// Course complete; further resumes are no-ops.
    Finished,
}

#[derive(Clone, Debug)]
pub struct RiderProcess {
    id:    RiderId,
    phase: Phase,
}

impl RiderProcess {
    pub fn new(id: RiderId) -> Self {
        Self { id, phase: Phase::Spawned }
    }

    #[inline]
    pub fn id(&self) -> RiderId {
        self.id
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Run the lifecycle forward to its next suspension point.
    ///
    /// Returns the segment's commands; the last one is the suspension
    /// (`Acquire`, `Dwell` or `Finish`).  A finished rider returns an empty
    /// segment.
    pub fn resume(&mut self, course: &Course) -> Vec<Command> {
        let mut out = Vec::with_capacity(6);
        loop {
            match self.phase {
                Phase::Spawned => {
                    out.push(Command::Record(Zone::Queue, Action::Enter));
                    if self.approach(Zone::Gate, course, &mut out) {
                        return out;
                    }
                }

                Phase::Admitted(zone) => {
                    if zone == Zone::Gate {
                        out.push(Command::Record(Zone::Queue, Action::Exit));
                    }
                    out.push(Command::Record(zone, Action::Enter));
                    out.push(Command::Dwell(course.stage(zone).dwell));
                    self.phase = Phase::Dwelt(zone);
                    return out;
                }

                Phase::Dwelt(zone) => {
                    out.push(Command::Record(zone, Action::Exit));
                    if let Some(pool) = course.stage(zone).pool {
                        out.push(Command::Release(pool));
                    }
                    if zone == Zone::Gate {
                        out.push(Command::ClearedGate);
                    }
                    match zone.next() {
                        Some(next) => {
                            if self.approach(next, course, &mut out) {
                                return out;
                            }
                        }
                        None => {
                            out.push(Command::Finish);
                            self.phase = Phase::Finished;
                            return out;
                        }
                    }
                }

                Phase::Finished => return out,
            }
        }
    }

    /// Head for `zone`.  Returns `true` if the segment must end on an
    /// `Acquire` of the zone's pool.
    fn approach(&mut self, zone: Zone, course: &Course, out: &mut Vec<Command>) -> bool {
        self.phase = Phase::Admitted(zone);
        match course.stage(zone).pool {
            Some(pool) => {
                out.push(Command::Acquire(pool));
                true
            }
            None => false,
        }
    }
}
