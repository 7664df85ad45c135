use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing_subscriber::fmt::SubscriberBuilder;
use tsp_exact::api::{
    sample_points, solve_streaming_with_cfg, solve_with_cfg, tour_count, Point, SampleCfg,
    SolveCfg, Solution, Step,
};
use tsp_exact::prelude::{BATCH_MAX_CITIES, INTERACTIVE_MAX_CITIES};

mod provenance;
mod table;

use provenance::{provenance_doc, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "tsp-cli")]
#[command(about = "Exhaustive TSP solver: batch solves and step-by-step playback")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve once and print the optimal tour as JSON
    Solve {
        #[command(flatten)]
        points: PointsArgs,
        /// Also write every scored tour (.csv or .parquet) plus a provenance sidecar;
        /// limited to 10 cities
        #[arg(long)]
        out: Option<String>,
    },
    /// Pull the search one tour at a time, printing current vs best
    Stream {
        #[command(flatten)]
        points: PointsArgs,
        /// Pause between steps in milliseconds (0 disables pacing)
        #[arg(long, default_value_t = 500, value_parser = clap::value_parser!(u64).range(0..=1000))]
        interval_ms: u64,
        /// Stop after this many steps
        #[arg(long)]
        limit: Option<u64>,
        /// Stop once this much wall time has passed
        #[arg(long)]
        time_budget_ms: Option<u64>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Debug)]
struct PointsArgs {
    /// Number of random cities
    #[arg(long, default_value_t = 4)]
    cities: usize,
    /// Sampler seed; omitted means a fresh random city set
    #[arg(long)]
    seed: Option<u64>,
    /// CSV with `x` and `y` columns instead of random cities
    #[arg(long, conflicts_with = "cities")]
    input: Option<String>,
    /// Largest accepted city count (defaults: 12 for solve, 10 for stream)
    #[arg(long)]
    max_cities: Option<usize>,
}

impl PointsArgs {
    fn load(&self) -> Result<Vec<Point>> {
        match &self.input {
            Some(path) => table::read_points_csv(path),
            None => Ok(sample_points(SampleCfg::new(self.cities), self.seed)),
        }
    }

    fn cfg(&self, default_max: usize) -> SolveCfg {
        SolveCfg {
            max_cities: self.max_cities.unwrap_or(default_max),
        }
    }
}

#[derive(Serialize)]
struct SolveReport {
    cities: usize,
    tours: Option<u64>,
    best_length: f64,
    best_tour: Vec<usize>,
    points: Vec<[f64; 2]>,
    elapsed_ms: f64,
}

fn main() -> Result<()> {
    // stdout carries JSON and status lines only
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve { points, out } => solve(points, out, cmd.tag),
        Action::Stream {
            points,
            interval_ms,
            limit,
            time_budget_ms,
        } => stream(points, interval_ms, limit, time_budget_ms),
        Action::Report => report(cmd.tag),
    }
}

fn solve(args: PointsArgs, out: Option<String>, tag: Option<String>) -> Result<()> {
    let pts = args.load()?;
    let cfg = args.cfg(BATCH_MAX_CITIES);
    tracing::info!(cities = pts.len(), seed = ?args.seed, max = cfg.max_cities, "solve");

    let start = Instant::now();
    let (sol, steps) = match &out {
        Some(_) => {
            // The table holds n! rows; one pass yields both it and the optimum.
            let table_cfg = SolveCfg {
                max_cities: cfg.max_cities.min(INTERACTIVE_MAX_CITIES),
            };
            let steps: Vec<Step> = solve_streaming_with_cfg(&pts, table_cfg)?.collect();
            let last = steps.last().context("stream over validated input is non-empty")?;
            let sol = Solution {
                tour: last.best_tour.clone(),
                length: last.best_length,
            };
            (sol, Some(steps))
        }
        None => (solve_with_cfg(&pts, cfg)?, None),
    };
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
    tracing::info!(best = sol.length, tour = %sol.tour, elapsed_ms, "solved");

    let rep = SolveReport {
        cities: pts.len(),
        tours: tour_count(pts.len()),
        best_length: sol.length,
        best_tour: sol.tour.as_slice().to_vec(),
        points: pts.iter().map(|p| [p.x, p.y]).collect(),
        elapsed_ms,
    };
    println!("{}", serde_json::to_string_pretty(&rep)?);

    if let (Some(out), Some(steps)) = (out, steps) {
        let mut df = table::steps_frame(&steps)?;
        table::write_frame(&mut df, Path::new(&out))?;
        let payload = Payload::new(json!({
            "cities": pts.len(),
            "seed": args.seed,
            "input": args.input,
            "max_cities": cfg.max_cities,
            "best_length": sol.length,
        }))
        .with_tag(tag);
        let prov = write_sidecar(&out, payload)?;
        tracing::info!(out, provenance = %prov.display(), "outputs");
    }
    Ok(())
}

fn stream(
    args: PointsArgs,
    interval_ms: u64,
    limit: Option<u64>,
    time_budget_ms: Option<u64>,
) -> Result<()> {
    let pts = args.load()?;
    let cfg = args.cfg(INTERACTIVE_MAX_CITIES);
    if limit == Some(0) {
        bail!("--limit must be at least 1");
    }
    let mut steps = solve_streaming_with_cfg(&pts, cfg)?;
    tracing::info!(
        cities = pts.len(),
        total = ?steps.total_steps(),
        interval_ms,
        limit = ?limit,
        time_budget_ms = ?time_budget_ms,
        "stream"
    );

    let pause = Duration::from_millis(interval_ms);
    let budget = time_budget_ms.map(Duration::from_millis);
    let start = Instant::now();
    for step in steps.by_ref() {
        let mark = if step.improved { " *" } else { "" };
        println!("{} | Tour: {}{mark}", step.status_line(), step.tour);
        if limit.is_some_and(|l| step.index + 1 >= l)
            || budget.is_some_and(|b| start.elapsed() >= b)
        {
            break;
        }
        if !pause.is_zero() {
            std::thread::sleep(pause);
        }
    }

    let taken = steps.steps_taken();
    let exhausted = steps.total_steps() == Some(taken);
    if let Some((tour, length)) = steps.best() {
        tracing::info!(
            steps = taken,
            exhausted,
            best = length,
            tour = %tour,
            "stream_done"
        );
    }
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let payload = Payload::new(json!({
        "batch_max_cities": BATCH_MAX_CITIES,
        "interactive_max_cities": INTERACTIVE_MAX_CITIES,
    }))
    .with_tag(tag);
    let obj = provenance_doc(&payload, &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_conflicts_with_cities() {
        let both = Cmd::try_parse_from([
            "tsp-cli", "solve", "--input", "pts.csv", "--cities", "5",
        ]);
        assert!(both.is_err());
        let input_only = Cmd::try_parse_from(["tsp-cli", "solve", "--input", "pts.csv"]);
        assert!(input_only.is_ok());
        let cities_only = Cmd::try_parse_from(["tsp-cli", "stream", "--cities", "5"]);
        assert!(cities_only.is_ok());
    }

    #[test]
    fn interval_is_range_checked() {
        assert!(Cmd::try_parse_from(["tsp-cli", "stream", "--interval-ms", "1001"]).is_err());
        assert!(Cmd::try_parse_from(["tsp-cli", "stream", "--interval-ms", "0"]).is_ok());
    }
}
