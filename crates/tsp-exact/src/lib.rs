//! Exact travelling-salesman tours by exhaustive search.
//!
//! Layout (leaves first)
//! - `metric`: Euclidean distance and closed-tour length with tour validation.
//! - `enumerate`: lexicographic, restartable permutation stream (`Tours`).
//! - `tracker`: best-so-far state machine (`BestTourState`).
//! - `solve`: batch and streaming facades consumed by a display/driver layer.
//! - `sample`: seeded uniform point sampler used by drivers and benches.
//!
//! API Policy
//! - The batch and streaming entry points (`solve`, `solve_streaming`) are the
//!   supported surface; helpers behind them may change shape.
//! - Everything is single-threaded and synchronous. Callers who want
//!   cancellation pull the stream and stop when they like.

pub mod api;
pub mod cfg;
pub mod enumerate;
pub mod error;
pub mod metric;
pub mod sample;
pub mod solve;
pub mod tracker;
mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::SolveCfg;
pub use error::{InputError, TourError, TspError};
pub use nalgebra::Vector2 as Vec2;
pub use types::{Point, Tour};

/// Common exports for quick imports in drivers.
pub mod prelude {
    pub use crate::cfg::{SolveCfg, BATCH_MAX_CITIES, INTERACTIVE_MAX_CITIES};
    pub use crate::enumerate::{enumerate_tours, tour_count, Tours};
    pub use crate::error::{InputError, TourError, TspError};
    pub use crate::metric::{distance, tour_length};
    pub use crate::sample::{sample_points, SampleCfg};
    pub use crate::solve::{
        solve, solve_streaming, solve_with_all, solve_with_all_cfg, Evaluated, FullSolution,
        SolveStream, Solution, Step,
    };
    pub use crate::tracker::BestTourState;
    pub use crate::types::{Point, Tour};
}
