//! Timing probe for the exhaustive solver.
//!
//! Purpose
//! - Give a reproducible, code-backed answer to "how many cities can a batch
//!   solve handle?" by timing seeded instances from 6 up to the batch limit.
//!
//! Usage: `cargo run --release -p tsp-exact --example timing_probe [max_n]`

use std::time::Instant;

use tsp_exact::api::{sample_points, solve, tour_count, SampleCfg};
use tsp_exact::prelude::BATCH_MAX_CITIES;

fn main() {
    let max_n = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10)
        .min(BATCH_MAX_CITIES);

    for n in 6..=max_n {
        let pts = sample_points(SampleCfg::new(n), Some(n as u64));
        let start = Instant::now();
        let sol = solve(&pts).expect("sampled points are finite and in range");
        let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
        println!(
            "cities={n} tours={} best={:.4} tour={} time_ms={elapsed_ms:.3}",
            tour_count(n).unwrap_or(0),
            sol.length,
            sol.tour
        );
    }
}
