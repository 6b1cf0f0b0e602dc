//! `Latch` — a one-shot signal.
//!
//! Waiting before the latch fires parks the process; waiting afterwards
//! returns [`LatchWait::Ready`] at once.  [`Latch::fire`] hands back every
//! parked process (in the order they started waiting) and can only succeed
//! once.

use rt_core::{LatchKind, ProcessId, SimTime};

use crate::{ScheduleError, ScheduleResult};

/// Outcome of [`Latch::wait`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum LatchWait {
    /// Already fired at the given instant; the caller continues.
    Ready(SimTime),
    /// Parked until the latch fires.
    Pending,
}

#[derive(Clone, Debug)]
pub struct Latch {
    kind:     LatchKind,
    fired_at: Option<SimTime>,
    waiters:  Vec<ProcessId>,
}

impl Latch {
    pub fn new(kind: LatchKind) -> Self {
        Self { kind, fired_at: None, waiters: Vec::new() }
    }

    /// A latch that has already fired at `at` (e.g. an empty batch).
    pub fn fired(kind: LatchKind, at: SimTime) -> Self {
        Self { kind, fired_at: Some(at), waiters: Vec::new() }
    }

    pub fn wait(&mut self, process: ProcessId) -> LatchWait {
        match self.fired_at {
            Some(at) => LatchWait::Ready(at),
            None => {
                self.waiters.push(process);
                LatchWait::Pending
            }
        }
    }

    /// Fire the latch at `now`, returning the processes to wake.
    pub fn fire(&mut self, now: SimTime) -> ScheduleResult<Vec<ProcessId>> {
        if let Some(fired_at) = self.fired_at {
            return Err(ScheduleError::LatchRefired { latch: self.kind, fired_at });
        }
        self.fired_at = Some(now);
        Ok(std::mem::take(&mut self.waiters))
    }

    #[inline]
    pub fn kind(&self) -> LatchKind {
        self.kind
    }

    #[inline]
    pub fn is_fired(&self) -> bool {
        self.fired_at.is_some()
    }

    #[inline]
    pub fn fired_at(&self) -> Option<SimTime> {
        self.fired_at
    }

    pub fn waiter_count(&self) -> usize {
        self.waiters.len()
    }
}
