//! Strongly typed identifiers.
//!
//! `ProcessId` indexes the scheduler's process table and follows the same
//! zero-cost wrapper pattern as any other index type.  `RiderId` is the
//! human-facing tag (`"EXP-3"`) carried by every logged event.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Slot of a process (rider, injector or sampler) in the scheduler's
    /// process table.  Assigned in registration order.
    pub struct ProcessId(u32);
}

// ── RiderKind ─────────────────────────────────────────────────────────────────

/// The batch a rider belongs to.  Batches run in this precedence order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiderKind {
    Instructor,
    Experienced,
    Focus,
}

impl RiderKind {
    pub const ALL: [RiderKind; 3] = [RiderKind::Instructor, RiderKind::Experienced, RiderKind::Focus];

    /// Short tag used in rider IDs and CSV columns.
    pub fn tag(self) -> &'static str {
        match self {
            RiderKind::Instructor  => "INST",
            RiderKind::Experienced => "EXP",
            RiderKind::Focus       => "FOC",
        }
    }
}

impl fmt::Display for RiderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ── RiderId ───────────────────────────────────────────────────────────────────

/// A rider's identity: batch plus 1-based sequence number within the batch.
///
/// Displays as `"<TAG>-<seq>"`, e.g. `INST-1`, `EXP-3`, `FOC-10`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiderId {
    pub kind: RiderKind,
    pub seq:  u32,
}

impl RiderId {
    /// The single instructor of every run.
    pub const INSTRUCTOR: RiderId = RiderId { kind: RiderKind::Instructor, seq: 1 };

    #[inline]
    pub fn new(kind: RiderKind, seq: u32) -> Self {
        Self { kind, seq }
    }
}

impl fmt::Display for RiderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind.tag(), self.seq)
    }
}
