//! `Agenda` — the virtual clock's pending-work queue.
//!
//! # Ordering
//!
//! Entries are keyed by wake time; each key holds a FIFO of processes in the
//! order they were scheduled.  [`Agenda::pop_next`] takes the front of the
//! earliest key, so two processes due at the same instant resume in the
//! order they were put on the agenda.  A process scheduled *for the current
//! instant* while that instant is being drained joins the back of the same
//! FIFO and runs after everything already queued there.
//!
//! # Performance note
//!
//! `BTreeMap` gives O(log W) insert and pop where W = number of distinct
//! pending instants.  A track run has at most a few hundred distinct instants
//! pending at once, so the constant is tiny.

use std::collections::{BTreeMap, VecDeque};

use rt_core::{ProcessId, SimTime};

use crate::{ScheduleError, ScheduleResult};

/// A priority queue mapping virtual instants → processes due at that instant.
#[derive(Default, Debug)]
pub struct Agenda {
    inner: BTreeMap<SimTime, VecDeque<ProcessId>>,
    /// The instant of the last popped entry.  Nothing may be scheduled
    /// before it.
    now:   SimTime,
    /// Cached total entry count for O(1) `len()`.
    total: usize,
}

impl Agenda {
    pub fn new() -> Self {
        Self::default()
    }

    /// The instant of the most recently popped entry (`0` initially).
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Schedule `process` to resume at `at`.
    ///
    /// A process may appear more than once; the orchestrator never does
    /// that, but the agenda does not forbid it.
    pub fn push(&mut self, at: SimTime, process: ProcessId) -> ScheduleResult<()> {
        if at < self.now {
            return Err(ScheduleError::ScheduledInPast { at, now: self.now });
        }
        self.inner.entry(at).or_default().push_back(process);
        self.total += 1;
        Ok(())
    }

    /// Remove and return the earliest entry, advancing [`now`](Self::now).
    pub fn pop_next(&mut self) -> Option<(SimTime, ProcessId)> {
        let mut slot = self.inner.first_entry()?;
        let at = *slot.key();
        let process = slot.get_mut().pop_front();
        if slot.get().is_empty() {
            slot.remove();
        }
        let process = process?;
        self.total -= 1;
        self.now = at;
        Some((at, process))
    }

    /// The earliest instant with at least one pending entry.
    pub fn next_time(&self) -> Option<SimTime> {
        self.inner.keys().next().copied()
    }

    /// Total number of pending entries across all instants.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct pending instants.
    pub fn instant_count(&self) -> usize {
        self.inner.len()
    }
}
