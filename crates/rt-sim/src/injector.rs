//! `BatchInjector` — releases a whole rider batch once its latches fire.

use rt_core::{LatchKind, RiderKind};

/// A process that awaits a list of latches, in order, and then spawns
/// `count` riders of one kind at a single instant.
#[derive(Clone, Debug)]
pub struct BatchInjector {
    kind:   RiderKind,
    count:  u32,
    awaits: Vec<LatchKind>,
    /// Index of the first latch not yet observed fired.
    passed: usize,
    spent:  bool,
}

impl BatchInjector {
    pub fn new(kind: RiderKind, count: u32, awaits: Vec<LatchKind>) -> Self {
        Self { kind, count, awaits, passed: 0, spent: false }
    }

    /// The experienced batch goes once the instructor is done.
    pub fn experienced(count: u32) -> Self {
        Self::new(RiderKind::Experienced, count, vec![LatchKind::InstructorDone])
    }

    /// The focus batch goes once the experienced batch is done.  It also
    /// waits for the instructor so an empty experienced batch cannot let it
    /// overtake the instructor.
    pub fn focus(count: u32) -> Self {
        Self::new(
            RiderKind::Focus,
            count,
            vec![LatchKind::ExperiencedDone, LatchKind::InstructorDone],
        )
    }

    #[inline]
    pub fn kind(&self) -> RiderKind {
        self.kind
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// The next latch to wait on, or `None` once all have been passed.
    pub fn pending_latch(&self) -> Option<LatchKind> {
        self.awaits.get(self.passed).copied()
    }

    /// Record that the pending latch has fired.
    pub fn pass(&mut self) {
        self.passed = (self.passed + 1).min(self.awaits.len());
    }

    /// Mark the batch as released, returning `(kind, count)` the first time
    /// only.
    pub fn release(&mut self) -> Option<(RiderKind, u32)> {
        if self.spent || self.pending_latch().is_some() {
            return None;
        }
        self.spent = true;
        Some((self.kind, self.count))
    }

    #[inline]
    pub fn is_spent(&self) -> bool {
        self.spent
    }
}
