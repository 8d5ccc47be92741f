use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use fcfs_sim::{
    bernoulli_procs, summarize, Cadence, Player, PlaybackEvent, ProcessField, ProcessTable, Ticks,
};
use log::info;

/// Animated FCFS scheduling demo.
///
/// Seeds a process table either from explicit --proc arrival:burst pairs
/// or from a seeded random workload, plays the schedule against the wall
/// clock printing per-tick events, then prints the per-process results
/// and the average waiting/turnaround times.
#[derive(Debug, Parser)]
struct Opts {
    /// Add a process as arrival:burst, e.g. --proc 0:4. Repeatable.
    /// Defaults to the 0:4 1:3 2:1 reference workload.
    #[clap(short = 'p', long = "proc", value_parser = parse_proc)]
    procs: Vec<(Ticks, Ticks)>,

    /// Generate a random workload over this many arrival ticks instead of
    /// using --proc.
    #[clap(long, conflicts_with = "procs")]
    random_ticks: Option<Ticks>,

    /// Per-tick arrival probability for --random-ticks.
    #[clap(long, default_value = "0.3")]
    p_arrival: f64,

    /// RNG seed for --random-ticks.
    #[clap(long, default_value = "0")]
    seed: u64,

    /// Wall-clock milliseconds per animation tick.
    #[clap(short = 'i', long, default_value = "500")]
    interval_ms: u64,

    /// Virtual time units advanced per animation tick.
    #[clap(long, default_value = "0.5")]
    step: f64,

    /// Increase log verbosity (-v, -vv).
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_proc(s: &str) -> Result<(Ticks, Ticks)> {
    let (arrival, burst) = s
        .split_once(':')
        .with_context(|| format!("expected arrival:burst, got {s:?}"))?;
    let arrival = arrival
        .parse()
        .with_context(|| format!("bad arrival time in {s:?}"))?;
    let burst: Ticks = burst
        .parse()
        .with_context(|| format!("bad burst time in {s:?}"))?;
    if burst == 0 {
        bail!("burst time must be at least 1 in {s:?}");
    }
    Ok((arrival, burst))
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    init_logging(opts.verbose)?;

    let mut table = ProcessTable::new();
    if let Some(ticks) = opts.random_ticks {
        let added = bernoulli_procs(&mut table, ticks, opts.p_arrival, 0.3, 2, 6, opts.seed);
        info!("generated {added} processes over {ticks} arrival ticks");
    } else if opts.procs.is_empty() {
        for &(arrival, burst) in &[(0, 4), (1, 3), (2, 1)] {
            seed_proc(&mut table, arrival, burst);
        }
    } else {
        for &(arrival, burst) in &opts.procs {
            seed_proc(&mut table, arrival, burst);
        }
    }

    for spec in table.iter() {
        info!(
            "{}: arrival {}, burst {}",
            spec.name(),
            spec.arrival_time,
            spec.burst_time
        );
    }

    let cadence = Cadence {
        interval: Duration::from_millis(opts.interval_ms),
        step: opts.step,
    };
    let mut player = Player::new(cadence);

    let started = player.play_to_end(&table, |now, events| {
        for event in events {
            match event {
                PlaybackEvent::SegmentEntered {
                    process,
                    start,
                    end,
                } => {
                    println!("t={now:.1} running {process} [{start}, {end})");
                }
                PlaybackEvent::Finished { makespan } => {
                    println!("t={now:.1} schedule complete, makespan {makespan}");
                }
            }
        }
    });
    if !started {
        bail!("no processes to schedule");
    }

    let ctrl = player.controller();

    println!();
    println!(
        "{:<8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>11}",
        "process", "arrival", "burst", "start", "end", "waiting", "turnaround"
    );
    for proc in ctrl.executed() {
        println!(
            "{:<8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>11}",
            proc.spec.name(),
            proc.spec.arrival_time,
            proc.spec.burst_time,
            proc.start_time,
            proc.end_time,
            proc.waiting_time,
            proc.turnaround_time
        );
    }

    let metrics = summarize(ctrl.executed());
    println!();
    println!("Average waiting time:    {:.2}", metrics.avg_waiting_time);
    println!("Average turnaround time: {:.2}", metrics.avg_turnaround_time);

    Ok(())
}

fn seed_proc(table: &mut ProcessTable, arrival: Ticks, burst: Ticks) {
    let id = table.add();
    table.update(id, ProcessField::ArrivalTime, arrival as i64);
    table.update(id, ProcessField::BurstTime, burst as i64);
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => simplelog::LevelFilter::Info,
        1 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    let mut cfg = simplelog::ConfigBuilder::new();
    cfg.set_time_level(simplelog::LevelFilter::Error)
        .set_location_level(simplelog::LevelFilter::Off)
        .set_target_level(simplelog::LevelFilter::Off)
        .set_thread_level(simplelog::LevelFilter::Off);
    simplelog::TermLogger::init(
        level,
        cfg.build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}
