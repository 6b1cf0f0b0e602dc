//! Run configuration: the track parameters, the policy points, and the
//! scheduler's run limits.
//!
//! All three are plain data with `Default` impls.  They are checked once by
//! [`TrackConfig::validate`] / [`RunLimits::validate`] before a run is built;
//! after that they are read-only.

use crate::{ConfigError, ConfigResult, RiderKind, Zone};

/// Virtual-time spacing of the queue and utilization samplers.
pub const DEFAULT_SAMPLE_INTERVAL: f64 = 0.5;

/// Safety ceiling on virtual time for a single run.
pub const DEFAULT_TIME_CEILING: f64 = 1_000_000.0;

/// Largest batch accepted from untyped input (scenario files, CLI).
pub const MAX_BATCH: i64 = 1_000_000;

/// Most sampler ticks a run may schedule before reaching its ceiling.
pub const MAX_SAMPLES: f64 = 10_000_000.0;

// ── TrackConfig ───────────────────────────────────────────────────────────────

/// Track parameters.  Field names follow the scenario-file keys
/// (`nEXP`, `capZone`, `tA`, …) in snake case.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackConfig {
    /// Experienced riders, released after the instructor.
    pub n_exp:    u32,
    /// Focus riders, released after the experienced batch.
    pub n_foc:    u32,
    /// Capacity of every zone pool (entry gate, B, C, and A when gated).
    pub cap_zone: u32,
    pub t_enter:  f64,
    pub t_a:      f64,
    pub t_b:      f64,
    pub t_c:      f64,
    pub t_exit:   f64,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            n_exp:    25,
            n_foc:    10,
            cap_zone: 1,
            t_enter:  0.5,
            t_a:      5.0,
            t_b:      5.0,
            t_c:      5.0,
            t_exit:   0.5,
        }
    }
}

impl TrackConfig {
    /// Reject zero capacity and any negative or non-finite duration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.cap_zone < 1 {
            return Err(ConfigError::ZeroCapacity(self.cap_zone as i64));
        }
        for (field, value) in [("nEXP", self.n_exp), ("nFOC", self.n_foc)] {
            if value as i64 > MAX_BATCH {
                return Err(ConfigError::BatchTooLarge { field, value: value as i64 });
            }
        }
        for (field, value) in self.durations() {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteDuration { field, value });
            }
            if value < 0.0 {
                return Err(ConfigError::NegativeDuration { field, value });
            }
        }
        Ok(())
    }

    /// `1 + n_exp + n_foc`: the completion barrier's target.
    #[inline]
    pub fn expected_riders(&self) -> u64 {
        1 + self.n_exp as u64 + self.n_foc as u64
    }

    /// Riders in one batch.
    pub fn batch_size(&self, kind: RiderKind) -> u32 {
        match kind {
            RiderKind::Instructor  => 1,
            RiderKind::Experienced => self.n_exp,
            RiderKind::Focus       => self.n_foc,
        }
    }

    /// Dwell time inside `zone`.  The queue has no fixed dwell.
    pub fn dwell(&self, zone: Zone) -> f64 {
        match zone {
            Zone::Queue => 0.0,
            Zone::Gate  => self.t_enter,
            Zone::ZoneA => self.t_a,
            Zone::ZoneB => self.t_b,
            Zone::ZoneC => self.t_c,
            Zone::Exit  => self.t_exit,
        }
    }

    /// Uncontended course time of a single rider.
    pub fn course_time(&self) -> f64 {
        self.t_enter + self.t_a + self.t_b + self.t_c + self.t_exit
    }

    fn durations(&self) -> [(&'static str, f64); 5] {
        [
            ("tEnter", self.t_enter),
            ("tA",     self.t_a),
            ("tB",     self.t_b),
            ("tC",     self.t_c),
            ("tExit",  self.t_exit),
        ]
    }
}

/// Convert an untyped batch size, rejecting negatives.
pub fn checked_batch(field: &'static str, value: i64) -> ConfigResult<u32> {
    if value < 0 {
        return Err(ConfigError::NegativeBatch { field, value });
    }
    if value > MAX_BATCH {
        return Err(ConfigError::BatchTooLarge { field, value });
    }
    Ok(value as u32)
}

/// Convert an untyped zone capacity, rejecting anything below 1.
pub fn checked_capacity(value: i64) -> ConfigResult<u32> {
    if value < 1 {
        return Err(ConfigError::ZeroCapacity(value));
    }
    u32::try_from(value).map_err(|_| ConfigError::ZeroCapacity(value))
}

// ── Policy ────────────────────────────────────────────────────────────────────

/// When the batch latches fire.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LatchPolicy {
    /// On the rider's `Finished` transition.
    #[default]
    AfterCourse,
    /// As soon as the rider leaves the entry gate.
    AfterGate,
}

/// Whether Zone A has its own capacity pool.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZoneAPolicy {
    /// Only the entry gate rate-limits Zone A.
    #[default]
    Unconstrained,
    /// Zone A is guarded by a pool of `cap_zone`, like B and C.
    Gated,
}

/// The two behavioral switch points of the track model.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackPolicy {
    pub latch:  LatchPolicy,
    pub zone_a: ZoneAPolicy,
}

// ── RunLimits ─────────────────────────────────────────────────────────────────

/// Scheduler limits.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunLimits {
    /// No agenda entry later than this instant is executed.
    pub time_ceiling:    f64,
    /// Sampler period.  `None` disables both samplers.
    pub sample_interval: Option<f64>,
}

impl Default for RunLimits {
    fn default() -> Self {
        Self {
            time_ceiling:    DEFAULT_TIME_CEILING,
            sample_interval: Some(DEFAULT_SAMPLE_INTERVAL),
        }
    }
}

impl RunLimits {
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.time_ceiling.is_finite() && self.time_ceiling > 0.0) {
            return Err(ConfigError::InvalidLimit {
                field: "time_ceiling",
                value: self.time_ceiling,
            });
        }
        match self.sample_interval {
            Some(interval) if !(interval.is_finite() && interval > 0.0) => {
                Err(ConfigError::InvalidLimit { field: "sample_interval", value: interval })
            }
            Some(interval) if self.time_ceiling / interval > MAX_SAMPLES => {
                Err(ConfigError::TooManySamples { interval, ceiling: self.time_ceiling })
            }
            _ => Ok(()),
        }
    }
}
