use rand::prelude::*;

use crate::core::{ProcessField, ProcessTable, Ticks};

/// Fill a table from a seeded Bernoulli arrival process: each tick in
/// `0..ticks` admits a new process with probability `p_arrival`, short
/// (`short_burst`) with probability `p_short`, long otherwise. Returns how
/// many processes were added.
pub fn bernoulli_procs(
    table: &mut ProcessTable,
    ticks: Ticks,
    p_arrival: f64,
    p_short: f64,
    short_burst: Ticks,
    long_burst: Ticks,
    seed: u64,
) -> usize {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut added = 0;

    for t in 0..ticks {
        if rng.random::<f64>() < p_arrival {
            let burst = if rng.random::<f64>() < p_short {
                short_burst
            } else {
                long_burst
            };

            let id = table.add();
            table.update(id, ProcessField::ArrivalTime, t as i64);
            table.update(id, ProcessField::BurstTime, burst as i64);
            added += 1;
        }
    }

    added
}
