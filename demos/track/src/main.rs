//! ridertrack — run the training-track simulation from the command line.
//!
//! ```text
//! ridertrack                                  # default scenario (25 EXP, 10 FOC)
//! ridertrack --n-exp 4 --cap-zone 2 --out out # export events/queue/zone CSVs
//! ridertrack --scenario track.json --gated-zone-a
//! ridertrack --sweep 1,2,3,4                  # total time per zone capacity
//! ```
//!
//! Logging follows `RUST_LOG`; `RUST_LOG=rt_sim=debug` shows latch fires
//! and batch injection, `trace` shows every event.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use rt_core::{LatchPolicy, RiderKind, RunLimits, Zone, ZoneAPolicy};
use rt_output::{CsvWriter, Scenario, SimOutputObserver};
use rt_sim::{NoopObserver, RunReport, RunSummary, SimError, TrackSimBuilder, capacity_sweep, sweep};

#[derive(Parser, Debug)]
#[command(name = "ridertrack")]
#[command(about = "Discrete-event simulation of a rider training track")]
struct Args {
    /// Scenario JSON file (keys nEXP, nFOC, capZone, tEnter, tA, tB, tC, tExit)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Experienced riders
    #[arg(long, allow_negative_numbers = true)]
    n_exp: Option<i64>,

    /// Focus riders
    #[arg(long, allow_negative_numbers = true)]
    n_foc: Option<i64>,

    /// Capacity of the entry gate and of each constrained zone
    #[arg(long, allow_negative_numbers = true)]
    cap_zone: Option<i64>,

    #[arg(long)]
    t_enter: Option<f64>,
    #[arg(long)]
    t_a: Option<f64>,
    #[arg(long)]
    t_b: Option<f64>,
    #[arg(long)]
    t_c: Option<f64>,
    #[arg(long)]
    t_exit: Option<f64>,

    /// Fire batch latches when a rider clears the entry gate instead of
    /// when it finishes
    #[arg(long)]
    after_gate: bool,

    /// Give Zone A its own capacity pool
    #[arg(long)]
    gated_zone_a: bool,

    /// Stop the clock at this instant if riders are still on the track
    #[arg(long)]
    ceiling: Option<f64>,

    /// Sampler period
    #[arg(long, conflicts_with = "no_samples")]
    sample_interval: Option<f64>,

    /// Disable the queue and utilization samplers
    #[arg(long)]
    no_samples: bool,

    /// Directory for events.csv, queue.csv and zone.csv
    #[arg(long)]
    out: Option<PathBuf>,

    /// Write the effective scenario to this JSON file
    #[arg(long)]
    save_scenario: Option<PathBuf>,

    /// Run once per zone capacity and print a comparison
    #[arg(long, value_delimiter = ',')]
    sweep: Vec<u32>,
}

impl Args {
    /// The scenario file (or the default one) with command-line overrides.
    fn scenario(&self) -> Result<Scenario> {
        let mut scenario = match &self.scenario {
            Some(path) => Scenario::load(path)
                .with_context(|| format!("loading scenario {}", path.display()))?,
            None => Scenario::default(),
        };

        if let Some(v) = self.n_exp    { scenario.n_exp = v; }
        if let Some(v) = self.n_foc    { scenario.n_foc = v; }
        if let Some(v) = self.cap_zone { scenario.cap_zone = v; }
        if let Some(v) = self.t_enter  { scenario.t_enter = v; }
        if let Some(v) = self.t_a      { scenario.t_a = v; }
        if let Some(v) = self.t_b      { scenario.t_b = v; }
        if let Some(v) = self.t_c      { scenario.t_c = v; }
        if let Some(v) = self.t_exit   { scenario.t_exit = v; }

        let mut policy = scenario.policy();
        if self.after_gate {
            policy.latch = LatchPolicy::AfterGate;
        }
        if self.gated_zone_a {
            policy.zone_a = ZoneAPolicy::Gated;
        }
        scenario.policy = Some(policy);

        if self.ceiling.is_some() || self.sample_interval.is_some() || self.no_samples {
            let mut limits = scenario.limits();
            if let Some(ceiling) = self.ceiling {
                limits.time_ceiling = ceiling;
            }
            if let Some(interval) = self.sample_interval {
                limits.sample_interval = Some(interval);
            }
            if self.no_samples {
                limits.sample_interval = None;
            }
            scenario.limits = Some(limits);
        }
        Ok(scenario)
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,rt_sim=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let scenario = args.scenario()?;
    let config = scenario.to_config()?;
    let policy = scenario.policy();
    let limits: RunLimits = scenario.limits();
    limits.validate()?;

    if let Some(path) = &args.save_scenario {
        scenario.save(path).with_context(|| format!("saving scenario {}", path.display()))?;
        info!(path = %path.display(), "scenario saved");
    }

    println!("=== ridertrack ===");
    println!(
        "EXP / FOC : {} / {}  |  capacity {} per zone  |  {:?}, Zone A {:?}",
        config.n_exp, config.n_foc, config.cap_zone, policy.latch, policy.zone_a
    );
    println!();

    if !args.sweep.is_empty() {
        return run_sweep(&args.sweep, &scenario);
    }

    let mut sim = TrackSimBuilder::new(config).policy(policy).limits(limits).build()?;

    let t0 = Instant::now();
    let result = match &args.out {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
            let mut obs = SimOutputObserver::new(CsvWriter::new(dir)?);
            let result = sim.run(&mut obs);
            if let Some(e) = obs.take_error() {
                warn!("output error: {e}");
            }
            result
        }
        None => sim.run(&mut NoopObserver),
    };
    let elapsed = t0.elapsed();

    match result {
        Ok(report) => {
            print_summary(&report);
            println!();
            println!("Simulated in {:.3} ms", elapsed.as_secs_f64() * 1e3);
            if let Some(dir) = &args.out {
                println!("CSVs written to {}", dir.display());
            }
            Ok(())
        }
        Err(SimError::IncompleteRun { reason, report }) => {
            print_summary(&report);
            bail!("run incomplete: {reason}");
        }
        Err(e) => Err(e.into()),
    }
}

fn run_sweep(capacities: &[u32], scenario: &Scenario) -> Result<()> {
    let base = scenario.to_config()?;
    let configs = capacity_sweep(&base, capacities);
    let results = sweep(&configs, scenario.policy(), scenario.limits());

    println!("{:<10} {:>12} {:>14}", "Capacity", "Total time", "Mean B util");
    println!("{}", "-".repeat(38));
    for (config, result) in configs.iter().zip(results) {
        match result {
            Ok(report) => {
                let summary = RunSummary::from_report(&report);
                let b = summary.zone(Zone::ZoneB).map_or(0.0, |z| z.mean_utilization);
                println!(
                    "{:<10} {:>12.2} {:>13.1}%",
                    config.cap_zone,
                    summary.total_time.as_f64(),
                    b * 100.0
                );
            }
            Err(e) => println!("{:<10} {e}", config.cap_zone),
        }
    }
    Ok(())
}

fn print_summary(report: &RunReport) {
    let summary = RunSummary::from_report(report);

    println!("Total time : {:.2} min", summary.total_time.as_f64());
    println!("Finished   : {} / {}", report.finished, report.expected);
    if let Some(at) = report.latches.instructor_done {
        println!("Instructor done at {:.2}", at.as_f64());
    }
    if let Some(at) = report.latches.experienced_done {
        println!("Experienced done at {:.2}", at.as_f64());
    }
    println!();

    println!(
        "{:<6} {:>7} {:>12} {:>12} {:>10} {:>10}",
        "Batch", "Riders", "First gate", "Last finish", "Mean wait", "Max wait"
    );
    println!("{}", "-".repeat(62));
    for kind in RiderKind::ALL {
        let Some(batch) = summary.batch(kind) else { continue };
        let fmt_time = |t: Option<rt_core::SimTime>| {
            t.map_or_else(|| "-".to_owned(), |t| format!("{:.2}", t.as_f64()))
        };
        println!(
            "{:<6} {:>7} {:>12} {:>12} {:>10.2} {:>10.2}",
            kind.tag(),
            batch.riders,
            fmt_time(batch.first_gate_enter),
            fmt_time(batch.last_finish),
            batch.mean_queue_wait,
            batch.max_queue_wait,
        );
    }
    println!();

    println!("Queue      : max {}  mean {:.2}", summary.max_queue_length, summary.mean_queue_length);
    for zone in &summary.zones {
        println!(
            "{:<10} : mean {:>5.1}%  peak {:>5.1}%",
            zone.zone.as_str(),
            zone.mean_utilization * 100.0,
            zone.peak_utilization * 100.0
        );
    }
    println!();

    println!("{:<10} {:>9} {:>10} {:>11}", "Pool", "Capacity", "Peak held", "Peak queue");
    for pool in &summary.pools {
        println!(
            "{:<10} {:>9} {:>10} {:>11}",
            pool.kind.to_string(),
            pool.capacity,
            pool.peak_held,
            pool.peak_queue
        );
    }
}
