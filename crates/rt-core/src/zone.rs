//! Track layout: zones, log actions, capacity pools and batch latches.

use std::fmt;

/// A stage of the track.  Every rider visits all six, in declaration order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Zone {
    Queue,
    Gate,
    ZoneA,
    ZoneB,
    ZoneC,
    Exit,
}

impl Zone {
    /// All zones in traversal order.
    pub const ORDER: [Zone; 6] = [
        Zone::Queue,
        Zone::Gate,
        Zone::ZoneA,
        Zone::ZoneB,
        Zone::ZoneC,
        Zone::Exit,
    ];

    /// The practice zones whose utilization is sampled.
    pub const SAMPLED: [Zone; 3] = [Zone::ZoneA, Zone::ZoneB, Zone::ZoneC];

    /// The zone visited after `self`, or `None` after the exit gate.
    pub fn next(self) -> Option<Zone> {
        match self {
            Zone::Queue => Some(Zone::Gate),
            Zone::Gate  => Some(Zone::ZoneA),
            Zone::ZoneA => Some(Zone::ZoneB),
            Zone::ZoneB => Some(Zone::ZoneC),
            Zone::ZoneC => Some(Zone::Exit),
            Zone::Exit  => None,
        }
    }

    /// Position in [`Zone::ORDER`].
    #[inline]
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Label used in event logs and CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            Zone::Queue => "Queue",
            Zone::Gate  => "EnterGate",
            Zone::ZoneA => "ZoneA",
            Zone::ZoneB => "ZoneB",
            Zone::ZoneC => "ZoneC",
            Zone::Exit  => "ExitGate",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Action ────────────────────────────────────────────────────────────────────

/// Whether an event marks a rider entering or leaving a zone.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Enter,
    Exit,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Enter => "enter",
            Action::Exit  => "exit",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PoolKind ──────────────────────────────────────────────────────────────────

/// The capacity pools guarding the track.
///
/// `ZoneA` only has holders when Zone A is gated
/// ([`ZoneAPolicy::Gated`][crate::ZoneAPolicy::Gated]).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoolKind {
    EntryGate,
    ZoneA,
    ZoneB,
    ZoneC,
}

impl PoolKind {
    pub const ALL: [PoolKind; 4] = [PoolKind::EntryGate, PoolKind::ZoneA, PoolKind::ZoneB, PoolKind::ZoneC];

    /// Index into a `[_; 4]` pool table.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PoolKind::EntryGate => "entry-gate",
            PoolKind::ZoneA     => "zone-a",
            PoolKind::ZoneB     => "zone-b",
            PoolKind::ZoneC     => "zone-c",
        }
    }
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── LatchKind ─────────────────────────────────────────────────────────────────

/// The one-shot signals that sequence the three batches.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LatchKind {
    InstructorDone,
    ExperiencedDone,
}

impl LatchKind {
    pub const ALL: [LatchKind; 2] = [LatchKind::InstructorDone, LatchKind::ExperiencedDone];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LatchKind::InstructorDone  => "instructor-done",
            LatchKind::ExperiencedDone => "experienced-done",
        }
    }
}

impl fmt::Display for LatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
