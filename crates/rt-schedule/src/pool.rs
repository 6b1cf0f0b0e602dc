//! `ResourcePool` — a counting semaphore with a strict FIFO wait line.
//!
//! # Hand-off
//!
//! When a holder releases while processes are waiting, the slot passes
//! directly to the head waiter: `held` does not drop and re-rise, so no
//! process that arrives later (even at the same instant) can overtake a
//! waiter.  The new holder's id is returned to the caller, who must schedule
//! it to resume.

use std::collections::VecDeque;

use rt_core::{PoolKind, ProcessId};

use crate::{ScheduleError, ScheduleResult};

/// Outcome of [`ResourcePool::acquire`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Acquire {
    /// A slot was free; the caller holds it now and continues.
    Granted,
    /// The caller is waiting; `position` is its 0-based place in line.
    Queued { position: usize },
}

/// At most `capacity` concurrent holders, waiters served in arrival order.
#[derive(Clone, Debug)]
pub struct ResourcePool {
    kind:       PoolKind,
    capacity:   u32,
    held:       u32,
    waiters:    VecDeque<ProcessId>,
    /// Highest `held` ever observed.
    peak_held:  u32,
    /// Longest wait line ever observed.
    peak_queue: usize,
}

impl ResourcePool {
    /// # Panics
    /// Panics if `capacity` is 0; configurations are validated before any
    /// pool is built.
    pub fn new(kind: PoolKind, capacity: u32) -> Self {
        assert!(capacity >= 1, "pool {kind} needs capacity >= 1");
        Self {
            kind,
            capacity,
            held: 0,
            waiters: VecDeque::new(),
            peak_held: 0,
            peak_queue: 0,
        }
    }

    /// Take a slot if one is free, otherwise join the back of the line.
    pub fn acquire(&mut self, process: ProcessId) -> Acquire {
        if self.held < self.capacity {
            self.held += 1;
            self.peak_held = self.peak_held.max(self.held);
            Acquire::Granted
        } else {
            self.waiters.push_back(process);
            self.peak_queue = self.peak_queue.max(self.waiters.len());
            Acquire::Queued { position: self.waiters.len() - 1 }
        }
    }

    /// Give back one slot.
    ///
    /// Returns the waiter that now holds the slot, if any.
    pub fn release(&mut self) -> ScheduleResult<Option<ProcessId>> {
        if self.held == 0 {
            return Err(ScheduleError::ReleaseUnheld(self.kind));
        }
        match self.waiters.pop_front() {
            Some(next) => Ok(Some(next)),
            None => {
                self.held -= 1;
                Ok(None)
            }
        }
    }

    #[inline]
    pub fn kind(&self) -> PoolKind {
        self.kind
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub fn held(&self) -> u32 {
        self.held
    }

    /// Processes currently waiting.
    #[inline]
    pub fn queue_len(&self) -> usize {
        self.waiters.len()
    }

    /// `held / capacity`, in `[0, 1]`.
    #[inline]
    pub fn utilization(&self) -> f64 {
        self.held as f64 / self.capacity as f64
    }

    pub fn peak_held(&self) -> u32 {
        self.peak_held
    }

    pub fn peak_queue(&self) -> usize {
        self.peak_queue
    }

    /// `true` while the safety invariant `held <= capacity` holds.
    #[inline]
    pub fn within_capacity(&self) -> bool {
        self.held <= self.capacity
    }
}
