//! `rt-sim` — virtual-clock orchestrator for the ridertrack simulation.
//!
//! # Scheduler step
//!
//! ```text
//! advance():
//!   ① Peek     — earliest agenda instant; past the ceiling → IncompleteRun.
//!   ② Pop      — front process of that instant (FIFO within an instant).
//!   ③ Resume   — rider:    apply its commands until it suspends
//!                injector: await latches in order, then spawn the batch
//!                sampler:  record one sample, reschedule one interval later
//!   ④ Barrier  — finished == 1 + nEXP + nFOC → the clock stops.
//! ```
//!
//! Everything that mutates run state happens inside ③, one process at a
//! time, so no locks are involved.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | [`sweep`] runs configurations on Rayon's thread pool.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rt_core::TrackConfig;
//! use rt_sim::{NoopObserver, TrackSimBuilder};
//!
//! let mut sim = TrackSimBuilder::new(TrackConfig::default()).build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! println!("everyone done after {}", report.total_time);
//! ```

pub mod builder;
pub mod error;
pub mod injector;
pub mod observer;
pub mod report;
pub mod sampler;
pub mod sim;
pub mod stats;
pub mod sweep;

#[cfg(test)]
mod tests;

pub use builder::TrackSimBuilder;
pub use error::{SimError, SimResult};
pub use injector::BatchInjector;
pub use observer::{NoopObserver, TrackObserver};
pub use report::{LatchTimes, PoolPeak, RunReport, StallReason, ZoneSeries};
pub use sampler::Sampler;
pub use sim::{Step, TrackSim};
pub use stats::{BatchSummary, RunSummary, Stint, ZoneSummary, stints};
pub use sweep::{capacity_sweep, sweep};

use rt_core::TrackConfig;

/// Build and run `config` with the default policy and limits.
pub fn simulate(config: TrackConfig) -> SimResult<RunReport> {
    TrackSimBuilder::new(config).build()?.run(&mut NoopObserver)
}
