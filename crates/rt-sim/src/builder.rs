//! `TrackSimBuilder` — validates inputs and assembles a `TrackSim`.

use rt_core::{LatchKind, PoolKind, RiderId, RunLimits, SimTime, TrackConfig, TrackPolicy};
use rt_rider::RiderProcess;
use rt_schedule::{Latch, ResourcePool};

use crate::sim::Process;
use crate::{BatchInjector, Sampler, SimResult, TrackSim};

/// Fluent builder for [`TrackSim`].
///
/// # Required inputs
///
/// - `config`: batch sizes, zone capacity and dwell times
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                       |
/// |-------------------|-----------------------------------------------|
/// | `.policy(p)`      | `AfterCourse` latches, unconstrained Zone A   |
/// | `.limits(l)`      | ceiling `1e6`, samples every `0.5`            |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = TrackSimBuilder::new(config)
///     .policy(TrackPolicy { latch: LatchPolicy::AfterGate, ..Default::default() })
///     .build()?;
/// ```
pub struct TrackSimBuilder {
    config: TrackConfig,
    policy: TrackPolicy,
    limits: RunLimits,
}

impl TrackSimBuilder {
    pub fn new(config: TrackConfig) -> Self {
        Self {
            config,
            policy: TrackPolicy::default(),
            limits: RunLimits::default(),
        }
    }

    pub fn policy(mut self, policy: TrackPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn limits(mut self, limits: RunLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Validate all inputs and construct the [`TrackSim`].
    ///
    /// Processes are registered, and first scheduled at `t = 0`, in this
    /// order: the instructor, the queue sampler, the utilization sampler,
    /// the experienced injector, the focus injector.
    ///
    /// # Errors
    ///
    /// [`SimError::Config`][crate::SimError::Config] if the configuration or
    /// limits fail validation.
    pub fn build(self) -> SimResult<TrackSim> {
        self.config.validate()?;
        self.limits.validate()?;

        let cap = self.config.cap_zone;
        let pools = [
            ResourcePool::new(PoolKind::EntryGate, cap),
            ResourcePool::new(PoolKind::ZoneA, cap),
            ResourcePool::new(PoolKind::ZoneB, cap),
            ResourcePool::new(PoolKind::ZoneC, cap),
        ];

        // An empty experienced batch is "done" before the run starts.
        let experienced_done = if self.config.n_exp == 0 {
            Latch::fired(LatchKind::ExperiencedDone, SimTime::ZERO)
        } else {
            Latch::new(LatchKind::ExperiencedDone)
        };
        let latches = [Latch::new(LatchKind::InstructorDone), experienced_done];

        let n_exp = self.config.n_exp;
        let n_foc = self.config.n_foc;
        let sampling = self.limits.sample_interval.is_some();

        let mut sim = TrackSim::new(self.config, self.policy, self.limits, pools, latches);

        sim.spawn(Process::Rider(RiderProcess::new(RiderId::INSTRUCTOR)), SimTime::ZERO)?;
        if sampling {
            sim.spawn(Process::Sampler(Sampler::QueueLength), SimTime::ZERO)?;
            sim.spawn(Process::Sampler(Sampler::ZoneUtilization), SimTime::ZERO)?;
        }
        sim.spawn(Process::Injector(BatchInjector::experienced(n_exp)), SimTime::ZERO)?;
        sim.spawn(Process::Injector(BatchInjector::focus(n_foc)), SimTime::ZERO)?;

        tracing::debug!(
            processes = sim.processes.len(),
            cap_zone = cap,
            policy = ?sim.policy,
            "track simulation built"
        );
        Ok(sim)
    }
}
