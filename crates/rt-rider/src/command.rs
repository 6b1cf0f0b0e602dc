//! Commands a rider issues to the scheduler.

use rt_core::{Action, PoolKind, Zone};

/// One step a rider asks the orchestrator to perform.
///
/// Commands are produced by [`RiderProcess::resume`][crate::RiderProcess::resume]
/// and applied in order by rt-sim.  Only the last command of a segment may
/// suspend the rider.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    /// Append an event for this rider at the current instant.
    Record(Zone, Action),

    /// Take a slot of `pool`; suspends while the pool is full.
    Acquire(PoolKind),

    /// Give a slot of `pool` back.  Never suspends.
    Release(PoolKind),

    /// The rider has just left the entry gate.  Used for gate-timed latches.
    ClearedGate,

    /// Suspend for the given number of time units.
    Dwell(f64),

    /// The rider has completed the course.
    Finish,
}

impl Command {
    /// `true` for the commands that end a segment.
    #[inline]
    pub fn suspends(&self) -> bool {
        matches!(self, Command::Acquire(_) | Command::Dwell(_) | Command::Finish)
    }
}
