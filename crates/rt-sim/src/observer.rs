//! Observer trait for progress reporting and data collection.

use rt_core::{Event, LatchKind, QueueSample, RiderId, RiderKind, SimTime, UtilizationSample, Zone};

/// Callbacks invoked by [`TrackSim::run`][crate::TrackSim::run] as the run
/// unfolds.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Callbacks fire in the same order as the
/// records they describe are appended to the run's log.
///
/// # Example: finish printer
///
/// ```rust,ignore
/// struct FinishPrinter;
///
/// impl TrackObserver for FinishPrinter {
///     fn on_rider_finished(&mut self, rider: RiderId, at: SimTime, finished: u64) {
///         println!("{rider} finished at {at} ({finished} done)");
///     }
/// }
/// ```
pub trait TrackObserver {
    /// A rider entered or left a zone.
    fn on_event(&mut self, _event: &Event) {}

    /// The queue sampler recorded a sample.
    fn on_queue_sample(&mut self, _sample: &QueueSample) {}

    /// The utilization sampler recorded `zone`'s sample.
    fn on_zone_sample(&mut self, _zone: Zone, _sample: &UtilizationSample) {}

    /// A batch latch fired during the run.  Latches pre-fired at build time
    /// (an empty experienced batch) are not reported here; see
    /// [`RunReport::latches`][crate::RunReport::latches].
    fn on_latch_fired(&mut self, _latch: LatchKind, _at: SimTime) {}

    /// An injector released its whole batch at `at`.
    fn on_batch_injected(&mut self, _kind: RiderKind, _count: u32, _at: SimTime) {}

    /// A rider completed the course; `finished` is the running total.
    fn on_rider_finished(&mut self, _rider: RiderId, _at: SimTime, _finished: u64) {}

    /// Called once when the clock stops.
    fn on_run_end(&mut self, _end: SimTime, _complete: bool) {}
}

/// A [`TrackObserver`] that does nothing.
pub struct NoopObserver;

impl TrackObserver for NoopObserver {}
