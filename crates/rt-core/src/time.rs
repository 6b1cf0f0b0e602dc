//! Virtual time.
//!
//! # Design
//!
//! Durations in a track configuration are fractional minutes (`0.5`, `5.0`),
//! so virtual time is an `f64` rather than an integer tick.  `SimTime` wraps
//! it with a total order (`f64::total_cmp`) so it can key a `BTreeMap`
//! agenda.  Validation in [`TrackConfig`][crate::TrackConfig] guarantees every
//! duration is finite and non-negative, so no `NaN` ever reaches the clock and
//! the total order coincides with the numeric one.
//!
//! Time only moves forward by adding validated durations to the current
//! instant; identical configurations therefore produce bit-identical
//! timestamps.

use std::cmp::Ordering;
use std::fmt;

/// An absolute instant on the simulation's virtual clock.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0
    }

    /// The instant `duration` after `self`.
    #[inline]
    pub fn after(self, duration: f64) -> SimTime {
        SimTime(self.0 + duration)
    }

    /// Time elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        self.after(rhs)
    }
}

impl From<f64> for SimTime {
    fn from(t: f64) -> Self {
        SimTime(t)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.0)
    }
}
