//! Periodic samplers.

/// A process that records one sample per interval for the whole run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sampler {
    /// Riders waiting for the entry gate.
    QueueLength,
    /// `held / capacity` of the zone A, B and C pools.
    ZoneUtilization,
}
