//! Batch execution of independent configurations.

use rt_core::{RunLimits, TrackConfig, TrackPolicy};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{NoopObserver, RunReport, SimResult, TrackSimBuilder};

/// Run every configuration in `configs` and return one result per
/// configuration, in input order.
///
/// With the `parallel` feature the runs execute on Rayon's global pool.
/// Each run is self-contained, so results are identical either way.
pub fn sweep(
    configs: &[TrackConfig],
    policy:  TrackPolicy,
    limits:  RunLimits,
) -> Vec<SimResult<RunReport>> {
    let run_one = |config: &TrackConfig| -> SimResult<RunReport> {
        TrackSimBuilder::new(config.clone())
            .policy(policy)
            .limits(limits)
            .build()?
            .run(&mut NoopObserver)
    };

    #[cfg(feature = "parallel")]
    {
        configs.par_iter().map(run_one).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        configs.iter().map(run_one).collect()
    }
}

/// `base` repeated once per entry of `capacities`, with `cap_zone` replaced.
pub fn capacity_sweep(base: &TrackConfig, capacities: &[u32]) -> Vec<TrackConfig> {
    capacities
        .iter()
        .map(|&cap_zone| TrackConfig { cap_zone, ..base.clone() })
        .collect()
}
