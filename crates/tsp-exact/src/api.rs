//! Curated surface for display layers and drivers.
//!
//! Important
//! - Drivers (the CLI, benches, notebooks) should import from here rather than
//!   reaching into module paths, so internal moves stay cheap.

// Core data
pub use crate::types::{Point, Tour};
pub use crate::{InputError, SolveCfg, TourError, TspError};
// Metric + evaluator
pub use crate::metric::{check_tour, distance, tour_length};
// Enumeration
pub use crate::enumerate::{enumerate_tours, tour_count, Tours};
// Tracking + facades
pub use crate::solve::{
    solve, solve_streaming, solve_streaming_with_cfg, solve_with_all, solve_with_all_cfg,
    solve_with_cfg, Evaluated, FullSolution, SolveStream, Solution, Step,
};
pub use crate::tracker::BestTourState;
// Point sampling
pub use crate::sample::{
    sample_points, sample_points_replay, sample_points_with, ReplayToken, SampleCfg, DEFAULT_SIDE,
};
