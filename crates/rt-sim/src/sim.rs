//! The `TrackSim` struct and its scheduler step.

use rt_core::{
    Action, Event, LatchKind, LatchPolicy, PoolKind, ProcessId, QueueSample, RiderId, RiderKind,
    RunLimits, SimTime, TrackConfig, TrackPolicy, UtilizationSample, Zone, ZoneAPolicy,
};
use rt_rider::{Command, Course, RiderProcess};
use rt_schedule::{Acquire, Agenda, Latch, LatchWait, ResourcePool};

use crate::{
    BatchInjector, LatchTimes, PoolPeak, RunReport, Sampler, SimError, SimResult, StallReason, TrackObserver,
    ZoneSeries,
};

// ── Process table ─────────────────────────────────────────────────────────────

/// Everything that can sit on the agenda.
#[derive(Clone, Debug)]
pub(crate) enum Process {
    Rider(RiderProcess),
    Injector(BatchInjector),
    Sampler(Sampler),
}

/// Lifecycle of the run as a whole.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Status {
    Running,
    Complete,
    Incomplete(StallReason),
}

/// Outcome of one [`TrackSim::advance`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Step {
    /// `process` was resumed at `time`; the run continues.
    Ran { time: SimTime, process: ProcessId },
    /// The completion barrier has fired; the clock is stopped.
    Complete,
    /// The clock stopped without the barrier.
    Incomplete(StallReason),
}

// ── TrackSim ──────────────────────────────────────────────────────────────────

/// The discrete-event simulation of one training-track run.
///
/// `TrackSim` owns the virtual clock (its [`Agenda`]), the process table,
/// the four zone pools, the two batch latches and the run's logs.  Create it
/// via [`TrackSimBuilder`][crate::TrackSimBuilder]; drive it with
/// [`run`](Self::run) or step it with [`advance`](Self::advance).
pub struct TrackSim {
    pub(crate) config:  TrackConfig,
    pub(crate) policy:  TrackPolicy,
    pub(crate) limits:  RunLimits,
    pub(crate) course:  Course,

    /// Pending wake-ups, FIFO within an instant.
    pub(crate) agenda:    Agenda,
    /// Indexed by `ProcessId`; entries are never removed during a run.
    pub(crate) processes: Vec<Process>,
    /// Indexed by `PoolKind::index()`.
    pub(crate) pools:     [ResourcePool; 4],
    /// Indexed by `LatchKind::index()`.
    pub(crate) latches:   [Latch; 2],

    /// Riders between Queue-enter and Queue-exit.
    queue_length:         u32,
    finished:             u64,
    experienced_finished: u32,
    experienced_cleared:  u32,
    status:               Status,

    events:        Vec<Event>,
    queue_samples: Vec<QueueSample>,
    /// Zones A, B, C.
    zone_util:     [Vec<UtilizationSample>; 3],
}

impl TrackSim {
    pub(crate) fn new(
        config: TrackConfig,
        policy: TrackPolicy,
        limits: RunLimits,
        pools:  [ResourcePool; 4],
        latches: [Latch; 2],
    ) -> Self {
        let course = Course::new(&config, policy.zone_a);
        Self {
            config,
            policy,
            limits,
            course,
            agenda: Agenda::new(),
            processes: Vec::new(),
            pools,
            latches,
            queue_length: 0,
            finished: 0,
            experienced_finished: 0,
            experienced_cleared: 0,
            status: Status::Running,
            events: Vec::new(),
            queue_samples: Vec::new(),
            zone_util: [Vec::new(), Vec::new(), Vec::new()],
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until the completion barrier fires.
    ///
    /// Returns the finished [`RunReport`], or
    /// [`SimError::IncompleteRun`] carrying the partial report if the
    /// ceiling is reached (or nothing is left to run) first.
    pub fn run<O: TrackObserver>(&mut self, observer: &mut O) -> SimResult<RunReport> {
        tracing::info!(
            n_exp = self.config.n_exp,
            n_foc = self.config.n_foc,
            cap_zone = self.config.cap_zone,
            "track run starting"
        );
        loop {
            match self.advance(observer)? {
                Step::Ran { .. } => {}
                Step::Complete => break,
                Step::Incomplete(reason) => {
                    tracing::warn!(
                        %reason,
                        finished = self.finished,
                        expected = self.config.expected_riders(),
                        "track run incomplete"
                    );
                    observer.on_run_end(self.now(), false);
                    return Err(SimError::IncompleteRun {
                        reason,
                        report: Box::new(self.report()),
                    });
                }
            }
        }
        let report = self.report();
        tracing::info!(
            total_time = report.total_time.as_f64(),
            events = report.events.len(),
            "track run complete"
        );
        observer.on_run_end(self.now(), true);
        Ok(report)
    }

    /// Resume the process at the front of the agenda.
    ///
    /// Once the run has completed or stalled every further call returns the
    /// same terminal [`Step`] without touching any state.
    pub fn advance<O: TrackObserver>(&mut self, observer: &mut O) -> SimResult<Step> {
        match self.status {
            Status::Running => {}
            Status::Complete => return Ok(Step::Complete),
            Status::Incomplete(reason) => return Ok(Step::Incomplete(reason)),
        }

        let next = match self.agenda.next_time() {
            Some(next) => next,
            None => return Ok(self.stall(StallReason::NoPendingWork)),
        };
        if next.as_f64() > self.limits.time_ceiling {
            let ceiling = self.limits.time_ceiling;
            return Ok(self.stall(StallReason::CeilingReached { ceiling, next }));
        }
        let Some((now, process)) = self.agenda.pop_next() else {
            return Ok(self.stall(StallReason::NoPendingWork));
        };

        self.resume(process, now, observer)?;

        if self.finished == self.config.expected_riders() {
            self.status = Status::Complete;
            return Ok(Step::Complete);
        }
        Ok(Step::Ran { time: now, process })
    }

    /// Snapshot of everything recorded so far.
    pub fn report(&self) -> RunReport {
        let zone_util = Zone::SAMPLED
            .iter()
            .zip(&self.zone_util)
            .map(|(&zone, samples)| ZoneSeries { zone, samples: samples.clone() })
            .collect();
        RunReport {
            config:        self.config.clone(),
            policy:        self.policy,
            events:        self.events.clone(),
            queue_samples: self.queue_samples.clone(),
            zone_util,
            total_time:    RunReport::latest_event_time(&self.events),
            end_time:      self.now(),
            finished:      self.finished,
            expected:      self.config.expected_riders(),
            pools:         self.pools.iter().map(PoolPeak::of).collect(),
            latches:       LatchTimes {
                instructor_done:  self.latch(LatchKind::InstructorDone).fired_at(),
                experienced_done: self.latch(LatchKind::ExperiencedDone).fired_at(),
            },
        }
    }

    /// Current virtual time.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.agenda.now()
    }

    #[inline]
    pub fn finished(&self) -> u64 {
        self.finished
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.status == Status::Complete
    }

    pub fn pool(&self, kind: PoolKind) -> &ResourcePool {
        &self.pools[kind.index()]
    }

    pub fn latch(&self, kind: LatchKind) -> &Latch {
        &self.latches[kind.index()]
    }

    /// Riders currently waiting for the entry gate.
    #[inline]
    pub fn queue_length(&self) -> u32 {
        self.queue_length
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn config(&self) -> &TrackConfig {
        &self.config
    }

    // ── Process registration ──────────────────────────────────────────────

    /// Append `process` to the table and schedule its first resume at `at`.
    pub(crate) fn spawn(&mut self, process: Process, at: SimTime) -> SimResult<ProcessId> {
        let len = self.processes.len();
        let id = ProcessId::try_from(len).map_err(|_| SimError::ProcessTableFull(len))?;
        self.processes.push(process);
        self.agenda.push(at, id)?;
        Ok(id)
    }

    // ── Core step ─────────────────────────────────────────────────────────

    fn resume<O: TrackObserver>(
        &mut self,
        process:  ProcessId,
        now:      SimTime,
        observer: &mut O,
    ) -> SimResult<()> {
        match self.processes.get(process.index()) {
            Some(Process::Rider(_))    => self.resume_rider(process, now, observer),
            Some(Process::Injector(_)) => self.resume_injector(process, now, observer),
            Some(Process::Sampler(s))  => {
                let sampler = *s;
                self.sample(sampler, process, now, observer)
            }
            None => Err(SimError::UnknownProcess(process)),
        }
    }

    /// Apply a rider's commands until it suspends.
    ///
    /// A granted `Acquire` does not suspend: the rider is resumed again at
    /// once, within the same step.
    fn resume_rider<O: TrackObserver>(
        &mut self,
        process:  ProcessId,
        now:      SimTime,
        observer: &mut O,
    ) -> SimResult<()> {
        loop {
            let (rider, commands) = match &mut self.processes[process.index()] {
                Process::Rider(r) => (r.id(), r.resume(&self.course)),
                _ => return Err(SimError::UnknownProcess(process)),
            };

            let mut granted = false;
            for command in commands {
                match command {
                    Command::Record(zone, action) => {
                        self.record(rider, zone, action, now, observer);
                    }

                    Command::Acquire(pool) => match self.pools[pool.index()].acquire(process) {
                        Acquire::Granted => granted = true,
                        Acquire::Queued { position } => {
                            tracing::trace!(%rider, %pool, position, "waiting for pool");
                        }
                    },

                    Command::Release(pool) => {
                        if let Some(next) = self.pools[pool.index()].release()? {
                            self.agenda.push(now, next)?;
                        }
                    }

                    Command::ClearedGate => self.on_cleared_gate(rider, now, observer)?,

                    Command::Dwell(duration) => self.agenda.push(now.after(duration), process)?,

                    Command::Finish => self.on_finish(rider, now, observer)?,
                }
            }

            if !granted {
                return Ok(());
            }
        }
    }

    /// Await the injector's latches in order; once all have fired, spawn the
    /// whole batch at `now`.
    fn resume_injector<O: TrackObserver>(
        &mut self,
        process:  ProcessId,
        now:      SimTime,
        observer: &mut O,
    ) -> SimResult<()> {
        let batch = loop {
            let Process::Injector(injector) = &mut self.processes[process.index()] else {
                return Err(SimError::UnknownProcess(process));
            };
            match injector.pending_latch() {
                Some(latch) => match self.latches[latch.index()].wait(process) {
                    LatchWait::Ready(_) => injector.pass(),
                    LatchWait::Pending => {
                        tracing::debug!(kind = %injector.kind(), %latch, "injector waiting");
                        return Ok(());
                    }
                },
                None => break injector.release(),
            }
        };

        let Some((kind, count)) = batch else {
            return Ok(());
        };
        tracing::debug!(%kind, count, at = now.as_f64(), "injecting batch");
        for seq in 1..=count {
            self.spawn(Process::Rider(RiderProcess::new(RiderId::new(kind, seq))), now)?;
        }
        observer.on_batch_injected(kind, count, now);
        Ok(())
    }

    fn sample<O: TrackObserver>(
        &mut self,
        sampler:  Sampler,
        process:  ProcessId,
        now:      SimTime,
        observer: &mut O,
    ) -> SimResult<()> {
        match sampler {
            Sampler::QueueLength => {
                let sample = QueueSample { time: now, queue_length: self.queue_length };
                self.queue_samples.push(sample);
                observer.on_queue_sample(&sample);
            }
            Sampler::ZoneUtilization => {
                for (slot, (zone, gauge)) in self.gauges().into_iter().enumerate() {
                    let pool = &self.pools[gauge.index()];
                    let sample = UtilizationSample { time: now, utilization: pool.utilization() };
                    self.zone_util[slot].push(sample);
                    observer.on_zone_sample(zone, &sample);
                }
            }
        }
        if let Some(interval) = self.limits.sample_interval {
            self.agenda.push(now.after(interval), process)?;
        }
        Ok(())
    }

    /// Zones A, B and C, each with the pool whose occupancy stands for its
    /// utilization.
    ///
    /// An unconstrained Zone A is metered by the entry gate that admits
    /// riders into it.
    pub(crate) fn gauges(&self) -> [(Zone, PoolKind); 3] {
        let zone_a = match self.policy.zone_a {
            ZoneAPolicy::Unconstrained => PoolKind::EntryGate,
            ZoneAPolicy::Gated         => PoolKind::ZoneA,
        };
        [
            (Zone::ZoneA, zone_a),
            (Zone::ZoneB, PoolKind::ZoneB),
            (Zone::ZoneC, PoolKind::ZoneC),
        ]
    }

    // ── Rider bookkeeping ─────────────────────────────────────────────────

    fn record<O: TrackObserver>(
        &mut self,
        rider:    RiderId,
        zone:     Zone,
        action:   Action,
        now:      SimTime,
        observer: &mut O,
    ) {
        if zone == Zone::Queue {
            match action {
                Action::Enter => self.queue_length += 1,
                Action::Exit  => self.queue_length -= 1,
            }
        }
        let event = Event { rider, zone, action, time: now };
        tracing::trace!(%rider, %zone, %action, time = now.as_f64(), "event");
        self.events.push(event);
        observer.on_event(&event);
    }

    fn on_cleared_gate<O: TrackObserver>(
        &mut self,
        rider:    RiderId,
        now:      SimTime,
        observer: &mut O,
    ) -> SimResult<()> {
        if self.policy.latch != LatchPolicy::AfterGate {
            return Ok(());
        }
        match rider.kind {
            RiderKind::Instructor => self.fire(LatchKind::InstructorDone, now, observer),
            RiderKind::Experienced => {
                self.experienced_cleared += 1;
                if self.experienced_cleared == self.config.n_exp {
                    self.fire(LatchKind::ExperiencedDone, now, observer)?;
                }
                Ok(())
            }
            RiderKind::Focus => Ok(()),
        }
    }

    fn on_finish<O: TrackObserver>(
        &mut self,
        rider:    RiderId,
        now:      SimTime,
        observer: &mut O,
    ) -> SimResult<()> {
        self.finished += 1;
        observer.on_rider_finished(rider, now, self.finished);

        if rider.kind == RiderKind::Experienced {
            self.experienced_finished += 1;
        }
        if self.policy.latch == LatchPolicy::AfterCourse {
            match rider.kind {
                RiderKind::Instructor => self.fire(LatchKind::InstructorDone, now, observer)?,
                RiderKind::Experienced if self.experienced_finished == self.config.n_exp => {
                    self.fire(LatchKind::ExperiencedDone, now, observer)?
                }
                _ => {}
            }
        }

        if self.finished == self.config.expected_riders() {
            tracing::debug!(finished = self.finished, at = now.as_f64(), "completion barrier");
        }
        Ok(())
    }

    fn fire<O: TrackObserver>(
        &mut self,
        latch:    LatchKind,
        now:      SimTime,
        observer: &mut O,
    ) -> SimResult<()> {
        let woken = self.latches[latch.index()].fire(now)?;
        tracing::debug!(%latch, at = now.as_f64(), woken = woken.len(), "latch fired");
        observer.on_latch_fired(latch, now);
        for process in woken {
            self.agenda.push(now, process)?;
        }
        Ok(())
    }

    fn stall(&mut self, reason: StallReason) -> Step {
        self.status = Status::Incomplete(reason);
        Step::Incomplete(reason)
    }
}
