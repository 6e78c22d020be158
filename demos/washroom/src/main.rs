//! washroom — N people, a fixed row of stalls, strict first-come-first-served.
//!
//! The classic operating-systems queueing exercise: arrivals draw a ticket,
//! the head of the line takes the next free stall, everyone else waits.
//! This binary wires the `fq-*` crates to a console renderer, timestamped
//! logs, and optional CSV export.
//!
//! ```text
//! washroom --actors 30 --capacity 2 --mean-interarrival-ms 120 \
//!          --mean-service-ms 500 --seed 123 --snapshots
//! ```

mod render;

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fq_core::SimConfig;
use fq_output::{CsvWriter, EventWriter, RecordingObserver, VisitRow};
use fq_protocol::FanoutObserver;
use fq_sim::SimBuilder;

use render::ConsoleObserver;

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Simulate people queueing for a fixed number of stalls, admitted in
/// strict ticket order.
#[derive(Parser, Debug)]
#[command(about)]
struct Args {
    /// How many people arrive over the run.
    #[arg(short = 'n', long, default_value_t = 30)]
    actors: usize,

    /// Number of stalls.
    #[arg(short = 'c', long, default_value_t = 2)]
    capacity: usize,

    /// Mean gap between arrivals, in milliseconds (exponential).
    #[arg(short = 'i', long, default_value_t = 120)]
    mean_interarrival_ms: u64,

    /// Mean stall occupancy, in milliseconds (exponential).
    #[arg(short = 't', long, default_value_t = 500)]
    mean_service_ms: u64,

    /// RNG seed.  Defaults to the wall clock, like every quick experiment.
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Cancel all still-queued people after this many milliseconds.
    #[arg(long)]
    deadline_ms: Option<u64>,

    /// Log arrivals too, not just admissions and releases.
    #[arg(short = 'd', long)]
    debug: bool,

    /// Print a state snapshot after every event.
    #[arg(short = 'v', long, conflicts_with = "live")]
    snapshots: bool,

    /// Redraw a live panel in place instead of appending snapshots.
    #[arg(short = 'V', long)]
    live: bool,

    /// Export events.csv and visits.csv into this directory.
    #[arg(short = 'o', long)]
    output_dir: Option<PathBuf>,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .init();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(1)
    });

    let config = SimConfig {
        actor_count:       args.actors,
        capacity:          args.capacity,
        mean_interarrival: Duration::from_millis(args.mean_interarrival_ms),
        mean_service:      Duration::from_millis(args.mean_service_ms),
        seed,
        deadline:          args.deadline_ms.map(Duration::from_millis),
    };

    println!(
        "=== washroom: {} people, {} stalls, ia={} ms, st={} ms, seed={} ===",
        config.actor_count,
        config.capacity,
        args.mean_interarrival_ms,
        args.mean_service_ms,
        seed,
    );

    // 1. Observers: console always, CSV recorder when exporting.
    let console = ConsoleObserver::new(args.snapshots, args.live);
    let mut fanout = FanoutObserver::new().with(Box::new(console));

    let mut recorded = None;
    if args.output_dir.is_some() {
        let (recorder, rows) = RecordingObserver::new();
        fanout = fanout.with(Box::new(recorder));
        recorded = Some(rows);
    }

    // 2. Build and run.
    let report = SimBuilder::new(config)
        .observer(Box::new(fanout))
        .build()?
        .run()?;

    // 3. CSV export.
    if let (Some(dir), Some(rows)) = (&args.output_dir, recorded) {
        std::fs::create_dir_all(dir)?;
        let mut writer = CsvWriter::new(dir)?;
        writer.write_events(&rows.lock().expect("recorder thread panicked"))?;
        let visit_rows: Vec<VisitRow> = report.visits.iter().map(VisitRow::from).collect();
        writer.write_visits(&visit_rows)?;
        writer.finish()?;
        println!("Wrote events.csv and visits.csv to {}", dir.display());
    }

    // 4. Summary.
    println!();
    println!(
        "=== done: {} served, {} cancelled, {:.3} s elapsed ===",
        report.completed(),
        report.cancelled,
        report.elapsed.as_secs_f64(),
    );
    println!(
        "wait: mean {:.1} ms, max {:.1} ms",
        report.mean_wait().as_secs_f64() * 1e3,
        report.max_wait().as_secs_f64() * 1e3,
    );

    println!();
    println!("{:<8} {:<8} {:<6} {:>10} {:>10}", "Person", "Ticket", "Stall", "Wait ms", "Hold ms");
    println!("{}", "-".repeat(46));
    for visit in &report.visits {
        println!(
            "{:<8} {:<8} {:<6} {:>10.1} {:>10.1}",
            visit.actor.0,
            visit.ticket.0,
            visit.slot.0,
            visit.waited().as_secs_f64() * 1e3,
            visit.held().as_secs_f64() * 1e3,
        );
    }

    Ok(())
}
