//! Random city sets (uniform in a square, seeded or not).
//!
//! Purpose
//! - Give drivers, benches and tests a quick source of point sets. The solver
//!   itself never samples; it takes whatever slice it is handed.
//!
//! Model
//! - Each coordinate is uniform on `[0, side)`; the default side is 100.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so a driver can redraw "the k-th set for seed s" without keeping state.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Point;

/// Default side length of the sampling square.
pub const DEFAULT_SIDE: f64 = 100.0;

/// Sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleCfg {
    pub cities: usize,
    /// Coordinates fall in `[0, side)`. Non-positive sides collapse to the origin.
    pub side: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            cities: 4,
            side: DEFAULT_SIDE,
        }
    }
}

impl SampleCfg {
    #[inline]
    pub fn new(cities: usize) -> Self {
        Self {
            cities,
            ..Self::default()
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.cities` points. `Some(seed)` is reproducible; `None` seeds from
/// the OS.
pub fn sample_points(cfg: SampleCfg, seed: Option<u64>) -> Vec<Point> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    sample_points_with(&mut rng, cfg)
}

/// Draw the point set addressed by `tok`.
pub fn sample_points_replay(cfg: SampleCfg, tok: ReplayToken) -> Vec<Point> {
    sample_points_with(&mut tok.to_std_rng(), cfg)
}

/// Draw from a caller-owned RNG.
pub fn sample_points_with<R: Rng>(rng: &mut R, cfg: SampleCfg) -> Vec<Point> {
    let side = cfg.side.max(0.0);
    (0..cfg.cities)
        .map(|_| Vector2::new(rng.gen::<f64>() * side, rng.gen::<f64>() * side))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_draws_repeat() {
        let cfg = SampleCfg::new(6);
        assert_eq!(sample_points(cfg, Some(9)), sample_points(cfg, Some(9)));
        assert_ne!(sample_points(cfg, Some(9)), sample_points(cfg, Some(10)));
    }

    #[test]
    fn replay_tokens_address_distinct_sets() {
        let cfg = SampleCfg::new(5);
        let a = ReplayToken { seed: 1, index: 0 };
        let b = ReplayToken { seed: 1, index: 1 };
        assert_eq!(sample_points_replay(cfg, a), sample_points_replay(cfg, a));
        assert_ne!(sample_points_replay(cfg, a), sample_points_replay(cfg, b));
    }

    #[test]
    fn points_stay_in_square() {
        let cfg = SampleCfg {
            cities: 200,
            side: 5.0,
        };
        for p in sample_points(cfg, None) {
            assert!((0.0..5.0).contains(&p.x) && (0.0..5.0).contains(&p.y));
        }
        let degenerate = SampleCfg {
            cities: 3,
            side: -1.0,
        };
        assert!(sample_points(degenerate, Some(0))
            .iter()
            .all(|p| *p == Vector2::zeros()));
    }
}
