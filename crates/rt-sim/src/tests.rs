//! Integration tests for rt-sim.

use rt_core::{
    Action, ConfigError, Event, LatchKind, LatchPolicy, PoolKind, ProcessId, QueueSample, RiderId,
    RiderKind, RunLimits, SimTime, TrackConfig, TrackPolicy, Zone, ZoneAPolicy,
};

use crate::{
    BatchInjector, NoopObserver, RunReport, RunSummary, SimError, StallReason, Step,
    TrackObserver, TrackSimBuilder, capacity_sweep, simulate, stints, sweep,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `capZone=1, tEnter=0.5, tA=tB=tC=5, tExit=0.5`.
fn track(n_exp: u32, n_foc: u32) -> TrackConfig {
    TrackConfig {
        n_exp,
        n_foc,
        cap_zone: 1,
        t_enter:  0.5,
        t_a:      5.0,
        t_b:      5.0,
        t_c:      5.0,
        t_exit:   0.5,
    }
}

fn run_with(config: TrackConfig, policy: TrackPolicy) -> RunReport {
    TrackSimBuilder::new(config).policy(policy).build().unwrap().run(&mut NoopObserver).unwrap()
}

fn rider(kind: RiderKind, seq: u32) -> RiderId {
    RiderId::new(kind, seq)
}

fn t(x: f64) -> SimTime {
    SimTime(x)
}

fn gate_enters(report: &RunReport, kind: RiderKind) -> Vec<SimTime> {
    report
        .events
        .iter()
        .filter(|e| e.rider.kind == kind && e.is(Zone::Gate, Action::Enter))
        .map(|e| e.time)
        .collect()
}

// ── Canonical single-rider run ────────────────────────────────────────────────

#[cfg(test)]
mod instructor_only {
    use super::*;

    #[test]
    fn total_time_is_sum_of_dwells() {
        let report = simulate(track(0, 0)).unwrap();
        assert_eq!(report.total_time, t(16.0));
        assert_eq!(report.end_time, t(16.0));
        assert!(report.is_complete());
        assert_eq!(report.finished, 1);
    }

    #[test]
    fn twelve_instructor_events_in_zone_order() {
        let report = simulate(track(0, 0)).unwrap();
        assert_eq!(report.events.len(), 12);
        assert!(report.events.iter().all(|e| e.rider == RiderId::INSTRUCTOR));

        let expected = [
            (Zone::Queue, Action::Enter, 0.0),
            (Zone::Queue, Action::Exit, 0.0),
            (Zone::Gate, Action::Enter, 0.0),
            (Zone::Gate, Action::Exit, 0.5),
            (Zone::ZoneA, Action::Enter, 0.5),
            (Zone::ZoneA, Action::Exit, 5.5),
            (Zone::ZoneB, Action::Enter, 5.5),
            (Zone::ZoneB, Action::Exit, 10.5),
            (Zone::ZoneC, Action::Enter, 10.5),
            (Zone::ZoneC, Action::Exit, 15.5),
            (Zone::Exit, Action::Enter, 15.5),
            (Zone::Exit, Action::Exit, 16.0),
        ];
        for (event, (zone, action, time)) in report.events.iter().zip(expected) {
            assert_eq!((event.zone, event.action, event.time), (zone, action, t(time)));
        }
    }

    #[test]
    fn event_times_never_decrease() {
        let report = simulate(track(0, 0)).unwrap();
        assert!(report.events.windows(2).all(|w| w[0].time <= w[1].time));
    }

    #[test]
    fn empty_experienced_batch_is_done_at_zero() {
        let report = simulate(track(0, 0)).unwrap();
        assert_eq!(report.latches.experienced_done, Some(SimTime::ZERO));
        assert_eq!(report.latches.instructor_done, Some(t(16.0)));
    }

    #[test]
    fn samples_stop_with_the_clock() {
        let report = simulate(track(0, 0)).unwrap();
        // 0.0, 0.5, …, 15.5: the rider's final wake-up at 16.0 was queued
        // ahead of the samplers' and the barrier stops the clock.
        assert_eq!(report.queue_samples.len(), 32);
        assert!(report.queue_samples.iter().all(|s| s.queue_length == 0));
        for zone in Zone::SAMPLED {
            assert_eq!(report.zone_util(zone).len(), 32);
        }
        let b_at_six = report.zone_util(Zone::ZoneB).iter().find(|s| s.time == t(6.0)).unwrap();
        assert_eq!(b_at_six.utilization, 1.0);
    }

    #[test]
    fn free_gate_is_taken_before_the_first_sample() {
        let report = simulate(track(0, 0)).unwrap();
        assert_eq!(report.queue_samples[0], QueueSample { time: SimTime::ZERO, queue_length: 0 });
        assert_eq!(report.time_of(RiderId::INSTRUCTOR, Zone::Queue, Action::Exit), Some(SimTime::ZERO));
    }

    #[test]
    fn unconstrained_zone_a_is_metered_by_the_gate() {
        let report = simulate(track(0, 0)).unwrap();
        let a = report.zone_util(Zone::ZoneA);
        assert_eq!(a[0].time, SimTime::ZERO);
        assert_eq!(a[0].utilization, 1.0); // holding the gate
        assert_eq!(a[1].utilization, 0.0); // gate released at 0.5
    }
}

// ── Contention and batches ────────────────────────────────────────────────────

#[cfg(test)]
mod contention {
    use super::*;

    #[test]
    fn second_rider_enters_gate_when_first_leaves() {
        let report = simulate(track(2, 0)).unwrap();
        let exp1 = rider(RiderKind::Experienced, 1);
        let exp2 = rider(RiderKind::Experienced, 2);

        assert_eq!(report.time_of(exp1, Zone::Gate, Action::Enter), Some(t(16.0)));
        assert_eq!(report.time_of(exp1, Zone::Gate, Action::Exit), Some(t(16.5)));
        assert_eq!(report.time_of(exp2, Zone::Gate, Action::Enter), Some(t(16.5)));
    }

    #[test]
    fn zone_b_serialises_the_batch() {
        let report = simulate(track(2, 0)).unwrap();
        let exp1 = rider(RiderKind::Experienced, 1);
        let exp2 = rider(RiderKind::Experienced, 2);

        assert_eq!(report.time_of(exp1, Zone::ZoneB, Action::Exit), Some(t(26.5)));
        assert_eq!(report.time_of(exp2, Zone::ZoneB, Action::Enter), Some(t(26.5)));
        assert_eq!(report.total_time, t(37.0));
        assert_eq!(report.latches.experienced_done, Some(t(37.0)));
    }

    #[test]
    fn batch_enters_in_sequence_order() {
        let report = simulate(track(5, 0)).unwrap();
        let queued: Vec<u32> = report
            .events
            .iter()
            .filter(|e| e.rider.kind == RiderKind::Experienced && e.is(Zone::Queue, Action::Enter))
            .map(|e| e.rider.seq)
            .collect();
        assert_eq!(queued, vec![1, 2, 3, 4, 5]);

        let entered: Vec<u32> = report
            .events
            .iter()
            .filter(|e| e.rider.kind == RiderKind::Experienced && e.is(Zone::Gate, Action::Enter))
            .map(|e| e.rider.seq)
            .collect();
        assert_eq!(entered, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn experienced_wait_for_instructor_and_focus_wait_for_experienced() {
        let report = simulate(TrackConfig::default()).unwrap();
        let inst_done = report.latches.instructor_done.unwrap();
        let exp_done = report.latches.experienced_done.unwrap();

        assert!(gate_enters(&report, RiderKind::Experienced).iter().all(|&at| at >= inst_done));
        assert!(gate_enters(&report, RiderKind::Focus).iter().all(|&at| at >= exp_done));
        assert_eq!(gate_enters(&report, RiderKind::Focus).len(), 10);
    }

    #[test]
    fn focus_still_follows_instructor_without_experienced() {
        let report = simulate(track(0, 3)).unwrap();
        let focus = gate_enters(&report, RiderKind::Focus);
        assert_eq!(focus.len(), 3);
        assert_eq!(focus[0], t(16.0));
        assert!(focus.iter().all(|&at| at >= t(16.0)));
    }

    #[test]
    fn pool_peaks_of_contended_batch() {
        let report = simulate(track(2, 0)).unwrap();
        let peak = |kind| *report.pool(kind).unwrap();

        assert_eq!(report.pools.len(), 4);
        assert_eq!(peak(PoolKind::EntryGate).peak_held, 1);
        assert_eq!(peak(PoolKind::EntryGate).peak_queue, 1);
        assert_eq!(peak(PoolKind::ZoneB).peak_held, 1);
        assert_eq!(peak(PoolKind::ZoneB).peak_queue, 1);
        // Unconstrained Zone A never touches its own pool.
        assert_eq!(peak(PoolKind::ZoneA).peak_held, 0);
        assert!(report.pools.iter().all(|p| p.peak_held <= p.capacity));
        assert_eq!(RunSummary::from_report(&report).pools, report.pools);
    }

    #[test]
    fn queue_sampler_sees_waiting_rider() {
        let report = simulate(track(2, 0)).unwrap();
        let at = |x: f64| report.queue_samples.iter().find(|s| s.time == t(x)).copied();
        // The batch is spawned after the 16.0 samples were taken.
        assert_eq!(at(16.0), Some(QueueSample { time: t(16.0), queue_length: 0 }));
        assert_eq!(at(16.5), Some(QueueSample { time: t(16.5), queue_length: 1 }));
    }
}

// ── Policies ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod policies {
    use super::*;

    #[test]
    fn after_gate_latches_fire_on_gate_exit() {
        let policy = TrackPolicy { latch: LatchPolicy::AfterGate, ..Default::default() };
        let report = run_with(track(2, 1), policy);

        assert_eq!(report.latches.instructor_done, Some(t(0.5)));
        assert_eq!(report.latches.experienced_done, Some(t(1.5)));
        assert_eq!(
            report.time_of(rider(RiderKind::Experienced, 1), Zone::Gate, Action::Enter),
            Some(t(0.5))
        );
        assert_eq!(report.time_of(rider(RiderKind::Focus, 1), Zone::Gate, Action::Enter), Some(t(1.5)));
        assert!(report.is_complete());
    }

    #[test]
    fn gated_zone_a_admits_one_at_a_time() {
        let policy = TrackPolicy { zone_a: ZoneAPolicy::Gated, ..Default::default() };
        let report = run_with(track(2, 0), policy);
        let exp1 = rider(RiderKind::Experienced, 1);
        let exp2 = rider(RiderKind::Experienced, 2);

        assert_eq!(report.time_of(exp1, Zone::ZoneA, Action::Exit), Some(t(21.5)));
        assert_eq!(report.time_of(exp2, Zone::ZoneA, Action::Enter), Some(t(21.5)));
        assert_eq!(report.total_time, t(37.0));
    }

    #[test]
    fn unconstrained_zone_a_overlaps() {
        let report = simulate(track(2, 0)).unwrap();
        let exp2 = rider(RiderKind::Experienced, 2);
        assert_eq!(report.time_of(exp2, Zone::ZoneA, Action::Enter), Some(t(17.0)));
    }

    #[test]
    fn sampled_zones_map_to_their_gauges() {
        let gauges = |zone_a| {
            let policy = TrackPolicy { zone_a, ..Default::default() };
            TrackSimBuilder::new(track(0, 0)).policy(policy).build().unwrap().gauges()
        };
        assert_eq!(
            gauges(ZoneAPolicy::Unconstrained),
            [
                (Zone::ZoneA, PoolKind::EntryGate),
                (Zone::ZoneB, PoolKind::ZoneB),
                (Zone::ZoneC, PoolKind::ZoneC),
            ]
        );
        assert_eq!(gauges(ZoneAPolicy::Gated)[0], (Zone::ZoneA, PoolKind::ZoneA));
        assert_eq!(gauges(ZoneAPolicy::Gated).map(|(zone, _)| zone), Zone::SAMPLED);
    }

    #[test]
    fn gated_zone_a_utilization_reads_its_own_pool() {
        let policy = TrackPolicy { zone_a: ZoneAPolicy::Gated, ..Default::default() };
        let report = run_with(track(0, 0), policy);
        let at_three = report.zone_util(Zone::ZoneA).iter().find(|s| s.time == t(3.0)).unwrap();
        assert_eq!(at_three.utilization, 1.0);
    }
}

// ── Safety and liveness ───────────────────────────────────────────────────────

#[cfg(test)]
mod invariants {
    use super::*;

    fn step_checking_capacity(config: TrackConfig, policy: TrackPolicy) {
        let cap = config.cap_zone;
        let mut sim = TrackSimBuilder::new(config).policy(policy).build().unwrap();
        let mut steps = 0;
        loop {
            match sim.advance(&mut NoopObserver).unwrap() {
                Step::Ran { .. } => {}
                Step::Complete => break,
                Step::Incomplete(reason) => panic!("stalled: {reason}"),
            }
            for kind in PoolKind::ALL {
                let pool = sim.pool(kind);
                assert!(pool.within_capacity());
                assert!(pool.held() <= cap);
            }
            steps += 1;
        }
        assert!(steps > 0);
        assert!(sim.is_complete());
    }

    #[test]
    fn capacity_holds_at_every_step() {
        for cap_zone in 1..=3 {
            for policy in [
                TrackPolicy::default(),
                TrackPolicy { latch: LatchPolicy::AfterGate, zone_a: ZoneAPolicy::Gated },
            ] {
                let config = TrackConfig { cap_zone, n_exp: 6, n_foc: 4, ..track(0, 0) };
                step_checking_capacity(config, policy);
            }
        }
    }

    #[test]
    fn zone_occupancy_never_exceeds_capacity() {
        let config = TrackConfig { cap_zone: 2, ..TrackConfig::default() };
        let report = simulate(config).unwrap();
        let all = stints(&report.events);
        for zone in [Zone::Gate, Zone::ZoneB, Zone::ZoneC] {
            for stint in all.iter().filter(|s| s.zone == zone) {
                let overlapping = all
                    .iter()
                    .filter(|s| s.zone == zone && s.start <= stint.start && stint.start < s.finish)
                    .count();
                assert!(overlapping <= 2, "{zone} holds {overlapping} at {}", stint.start);
            }
        }
    }

    #[test]
    fn every_rider_finishes_exactly_once() {
        let config = TrackConfig::default();
        let report = simulate(config.clone()).unwrap();
        assert_eq!(report.finished, config.expected_riders());
        assert_eq!(report.events.len() as u64, 12 * config.expected_riders());

        let finishes = report.events.iter().filter(|e| e.is(Zone::Exit, Action::Exit)).count();
        assert_eq!(finishes as u64, config.expected_riders());
    }

    #[test]
    fn nothing_after_a_riders_finish() {
        let report = simulate(TrackConfig::default()).unwrap();
        for kind in RiderKind::ALL {
            for seq in 1..=report.config.batch_size(kind) {
                let events: Vec<&Event> = report.events_for(rider(kind, seq)).collect();
                assert_eq!(events.len(), 12);
                assert!(events.last().unwrap().is(Zone::Exit, Action::Exit));
            }
        }
    }

    #[test]
    fn identical_configs_give_identical_reports() {
        let config = TrackConfig { cap_zone: 2, ..TrackConfig::default() };
        assert_eq!(simulate(config.clone()).unwrap(), simulate(config).unwrap());
    }

    #[test]
    fn processes_resume_in_registration_order_at_zero() {
        let mut sim = TrackSimBuilder::new(TrackConfig::default()).build().unwrap();
        assert_eq!(sim.processes.len(), 5);

        let first: Vec<Step> = (0..5).map(|_| sim.advance(&mut NoopObserver).unwrap()).collect();
        let expected: Vec<Step> =
            (0..5).map(|n| Step::Ran { time: SimTime::ZERO, process: ProcessId(n) }).collect();
        assert_eq!(first, expected);
    }

    #[test]
    fn advance_after_completion_is_idempotent() {
        let mut sim = TrackSimBuilder::new(track(0, 0)).build().unwrap();
        sim.run(&mut NoopObserver).unwrap();
        let events = sim.events().len();
        assert_eq!(sim.advance(&mut NoopObserver).unwrap(), Step::Complete);
        assert_eq!(sim.advance(&mut NoopObserver).unwrap(), Step::Complete);
        assert_eq!(sim.events().len(), events);
    }
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod errors {
    use super::*;

    #[test]
    fn zero_capacity_is_rejected_before_running() {
        let config = TrackConfig { cap_zone: 0, ..TrackConfig::default() };
        match TrackSimBuilder::new(config).build() {
            Err(SimError::Config(ConfigError::ZeroCapacity(0))) => {}
            Err(other) => panic!("unexpected error {other}"),
            Ok(_) => panic!("zero capacity accepted"),
        }
    }

    #[test]
    fn negative_duration_is_rejected() {
        let config = TrackConfig { t_b: -1.0, ..TrackConfig::default() };
        assert!(matches!(
            TrackSimBuilder::new(config).build(),
            Err(SimError::Config(ConfigError::NegativeDuration { field: "tB", .. }))
        ));
    }

    #[test]
    fn bad_sample_interval_is_rejected() {
        let limits = RunLimits { sample_interval: Some(0.0), ..RunLimits::default() };
        assert!(matches!(
            TrackSimBuilder::new(TrackConfig::default()).limits(limits).build(),
            Err(SimError::Config(ConfigError::InvalidLimit { field: "sample_interval", .. }))
        ));
    }

    #[test]
    fn sample_interval_too_fine_for_ceiling_is_rejected() {
        let limits = RunLimits { time_ceiling: 100.0, sample_interval: Some(1e-12) };
        assert!(matches!(
            TrackSimBuilder::new(TrackConfig::default()).limits(limits).build(),
            Err(SimError::Config(ConfigError::TooManySamples { .. }))
        ));
    }

    #[test]
    fn ceiling_yields_partial_report() {
        let limits = RunLimits { time_ceiling: 10.0, ..RunLimits::default() };
        let mut sim = TrackSimBuilder::new(track(0, 0)).limits(limits).build().unwrap();
        let err = sim.run(&mut NoopObserver).unwrap_err();

        match &err {
            SimError::IncompleteRun { reason, .. } => match reason {
                StallReason::CeilingReached { ceiling, next } => {
                    assert_eq!(*ceiling, 10.0);
                    assert!(next.as_f64() > 10.0);
                }
                other => panic!("unexpected stall {other}"),
            },
            other => panic!("unexpected error {other}"),
        }

        let partial = err.partial_report().unwrap();
        assert!(!partial.is_complete());
        assert_eq!(partial.finished, 0);
        assert_eq!(partial.expected, 1);
        assert!(partial.events.iter().all(|e| e.time <= t(10.0)));
        assert_eq!(partial.total_time, t(5.5)); // ZoneB-enter
    }

    #[test]
    fn incomplete_run_message_counts_riders() {
        let limits = RunLimits { time_ceiling: 1.0, ..RunLimits::default() };
        let err = TrackSimBuilder::new(track(1, 1))
            .limits(limits)
            .build()
            .unwrap()
            .run(&mut NoopObserver)
            .unwrap_err();
        assert!(err.to_string().ends_with("0/3 riders finished"));
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        events:   usize,
        latches:  Vec<(LatchKind, SimTime)>,
        batches:  Vec<(RiderKind, u32, SimTime)>,
        finished: Vec<u64>,
        ends:     Vec<bool>,
    }

    impl TrackObserver for Recorder {
        fn on_event(&mut self, _event: &Event) {
            self.events += 1;
        }
        fn on_latch_fired(&mut self, latch: LatchKind, at: SimTime) {
            self.latches.push((latch, at));
        }
        fn on_batch_injected(&mut self, kind: RiderKind, count: u32, at: SimTime) {
            self.batches.push((kind, count, at));
        }
        fn on_rider_finished(&mut self, _rider: RiderId, _at: SimTime, finished: u64) {
            self.finished.push(finished);
        }
        fn on_run_end(&mut self, _end: SimTime, complete: bool) {
            self.ends.push(complete);
        }
    }

    #[test]
    fn callbacks_mirror_the_report() {
        let mut rec = Recorder::default();
        let report = TrackSimBuilder::new(track(2, 1)).build().unwrap().run(&mut rec).unwrap();

        assert_eq!(rec.events, report.events.len());
        assert_eq!(
            rec.latches,
            vec![(LatchKind::InstructorDone, t(16.0)), (LatchKind::ExperiencedDone, t(37.0))]
        );
        assert_eq!(
            rec.batches,
            vec![(RiderKind::Experienced, 2, t(16.0)), (RiderKind::Focus, 1, t(37.0))]
        );
        assert_eq!(rec.finished, vec![1, 2, 3, 4]);
        assert_eq!(rec.ends, vec![true]);
    }

    #[test]
    fn prefired_latch_is_not_reported() {
        let mut rec = Recorder::default();
        TrackSimBuilder::new(track(0, 0)).build().unwrap().run(&mut rec).unwrap();
        assert_eq!(rec.latches, vec![(LatchKind::InstructorDone, t(16.0))]);
    }

    #[test]
    fn disabled_samplers_record_nothing() {
        let limits = RunLimits { sample_interval: None, ..RunLimits::default() };
        let report = TrackSimBuilder::new(track(1, 1))
            .limits(limits)
            .build()
            .unwrap()
            .run(&mut NoopObserver)
            .unwrap();
        assert!(report.queue_samples.is_empty());
        assert!(Zone::SAMPLED.iter().all(|&z| report.zone_util(z).is_empty()));
        assert!(report.is_complete());
    }
}

// ── Injector ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod injector {
    use super::*;

    #[test]
    fn focus_awaits_experienced_then_instructor() {
        let mut inj = BatchInjector::focus(4);
        assert_eq!(inj.pending_latch(), Some(LatchKind::ExperiencedDone));
        assert_eq!(inj.release(), None);
        inj.pass();
        assert_eq!(inj.pending_latch(), Some(LatchKind::InstructorDone));
        inj.pass();
        assert_eq!(inj.pending_latch(), None);
        assert_eq!(inj.release(), Some((RiderKind::Focus, 4)));
        assert_eq!(inj.release(), None);
        assert!(inj.is_spent());
    }

    #[test]
    fn pass_saturates() {
        let mut inj = BatchInjector::experienced(1);
        inj.pass();
        inj.pass();
        assert_eq!(inj.pending_latch(), None);
        assert_eq!(inj.release(), Some((RiderKind::Experienced, 1)));
    }
}

// ── Stats ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stats {
    use super::*;

    #[test]
    fn instructor_stints_cover_the_course() {
        let report = simulate(track(0, 0)).unwrap();
        let all = stints(&report.events);
        assert_eq!(all.len(), 6);
        assert_eq!(all[0].zone, Zone::Queue);
        assert_eq!(all[0].duration(), 0.0);

        let b = all.iter().find(|s| s.zone == Zone::ZoneB).unwrap();
        assert_eq!((b.start, b.finish), (t(5.5), t(10.5)));
    }

    #[test]
    fn unmatched_enter_makes_no_stint() {
        let events = [Event {
            rider:  RiderId::INSTRUCTOR,
            zone:   Zone::Queue,
            action: Action::Enter,
            time:   SimTime::ZERO,
        }];
        assert!(stints(&events).is_empty());
    }

    #[test]
    fn summary_of_contended_batch() {
        let summary = RunSummary::from_report(&simulate(track(2, 0)).unwrap());
        assert_eq!(summary.total_time, t(37.0));
        assert_eq!(summary.riders_finished, 3);
        assert_eq!(summary.max_queue_length, 1);

        let exp = summary.batch(RiderKind::Experienced).unwrap();
        assert_eq!(exp.riders, 2);
        assert_eq!(exp.first_gate_enter, Some(t(16.0)));
        assert_eq!(exp.last_finish, Some(t(37.0)));
        assert_eq!(exp.mean_queue_wait, 0.25);
        assert_eq!(exp.max_queue_wait, 0.5);

        let foc = summary.batch(RiderKind::Focus).unwrap();
        assert_eq!(foc.riders, 0);
        assert_eq!(foc.first_gate_enter, None);
        assert_eq!(foc.mean_queue_wait, 0.0);

        let b = summary.zone(Zone::ZoneB).unwrap();
        assert_eq!(b.peak_utilization, 1.0);
        assert!(b.mean_utilization > 0.0 && b.mean_utilization <= 1.0);
    }
}

// ── Sweep ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sweeps {
    use super::*;

    #[test]
    fn capacity_sweep_keeps_everything_else() {
        let base = TrackConfig::default();
        let configs = capacity_sweep(&base, &[1, 2, 4]);
        assert_eq!(configs.iter().map(|c| c.cap_zone).collect::<Vec<_>>(), vec![1, 2, 4]);
        assert!(configs.iter().all(|c| c.n_exp == base.n_exp && c.t_b == base.t_b));
    }

    #[test]
    fn results_come_back_in_input_order() {
        let mut configs = capacity_sweep(&track(3, 2), &[1, 2, 3]);
        configs.push(TrackConfig { cap_zone: 0, ..track(0, 0) });

        let results = sweep(&configs, TrackPolicy::default(), RunLimits::default());
        assert_eq!(results.len(), 4);
        for (result, config) in results.iter().zip(&configs[..3]) {
            let report = result.as_ref().unwrap();
            assert_eq!(report.config.cap_zone, config.cap_zone);
            assert!(report.is_complete());
        }
        assert!(matches!(results[3], Err(SimError::Config(ConfigError::ZeroCapacity(0)))));
    }

    #[test]
    fn more_capacity_never_slows_a_single_batch() {
        let results = sweep(
            &capacity_sweep(&track(6, 0), &[1, 2, 3]),
            TrackPolicy::default(),
            RunLimits::default(),
        );
        let times: Vec<SimTime> = results.into_iter().map(|r| r.unwrap().total_time).collect();
        assert!(times.windows(2).all(|w| w[1] <= w[0]));
    }
}
