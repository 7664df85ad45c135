//! Solver facades: batch, batch-with-table, and streaming.
//!
//! Every facade validates the input once (city count against `SolveCfg`,
//! finite coordinates), then walks `Tours` in lexicographic order, scores each
//! tour with the closed-tour metric, and folds it into a `BestTourState`.
//! Exhaustive search means the held tour at the end is a global optimum; the
//! strict-improvement rule makes it the first optimum in enumeration order.
//!
//! The streaming facade exposes that walk one step at a time. Pulling is the
//! only way work gets done, so a caller cancels by not pulling and bounds time
//! by counting steps or checking a clock between pulls.

use tracing::debug;

use crate::cfg::SolveCfg;
use crate::enumerate::Tours;
use crate::error::{InputError, TspError};
use crate::metric::{check_finite, closed_length};
use crate::tracker::BestTourState;
use crate::types::{Point, Tour};

/// Optimal tour and its closed length.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub tour: Tour,
    pub length: f64,
}

/// One scored tour.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluated {
    pub tour: Tour,
    pub length: f64,
}

/// Optimum plus every scored tour in enumeration order.
#[derive(Clone, Debug, PartialEq)]
pub struct FullSolution {
    pub best: Solution,
    pub all: Vec<Evaluated>,
}

/// One step of the streaming solve.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    /// Zero-based position in enumeration order.
    pub index: u64,
    pub tour: Tour,
    pub length: f64,
    pub best_tour: Tour,
    pub best_length: f64,
    /// This step's tour became the new best.
    pub improved: bool,
}

impl Step {
    /// One status line per frame, as a display layer shows it.
    pub fn status_line(&self) -> String {
        format!(
            "Cities: {} | Current Distance: {:.2} | Best Distance: {:.2}",
            self.tour.len(),
            self.length,
            self.best_length
        )
    }
}

/// Exact solve with the default supported range.
pub fn solve(points: &[Point]) -> Result<Solution, TspError> {
    solve_with_cfg(points, SolveCfg::default())
}

/// Exact solve, city count checked against `cfg`.
pub fn solve_with_cfg(points: &[Point], cfg: SolveCfg) -> Result<Solution, TspError> {
    check_input(points, cfg)?;
    let n = points.len();
    if n == 1 {
        return Ok(Solution {
            tour: Tour::trivial(),
            length: 0.0,
        });
    }
    debug!(cities = n, "solve start");
    let mut best = BestTourState::new();
    let mut evaluated = 0u64;
    for tour in Tours::new(n)? {
        let length = closed_length(tour.as_slice(), points);
        best.observe(&tour, length);
        evaluated += 1;
    }
    // Tours::new(n) with n >= 1 yields the identity tour first, so the tracker
    // cannot still be Empty; the error arm is unreachable.
    let (tour, length) = best.into_best().ok_or(InputError::NoCities)?;
    debug!(cities = n, evaluated, best = length, "solve done");
    Ok(Solution { tour, length })
}

/// Exact solve that also returns every `(tour, length)` pair, for displays
/// that replay the search. The table holds n! rows, so this is limited to the
/// interactive range (`SolveCfg::interactive()`).
pub fn solve_with_all(points: &[Point]) -> Result<FullSolution, TspError> {
    solve_with_all_cfg(points, SolveCfg::interactive())
}

/// `solve_with_all`, city count checked against `cfg`.
pub fn solve_with_all_cfg(points: &[Point], cfg: SolveCfg) -> Result<FullSolution, TspError> {
    let stream = solve_streaming_with_cfg(points, cfg)?;
    let mut all = Vec::with_capacity(stream.size_hint().0);
    let mut best = None;
    for step in stream {
        best = Some(Solution {
            tour: step.best_tour,
            length: step.best_length,
        });
        all.push(Evaluated {
            tour: step.tour,
            length: step.length,
        });
    }
    // Validated input has n >= 1, so the stream yielded at least one step.
    let best = best.ok_or(InputError::NoCities)?;
    Ok(FullSolution { best, all })
}

/// Step-by-step solve with the default supported range.
pub fn solve_streaming(points: &[Point]) -> Result<SolveStream<'_>, TspError> {
    solve_streaming_with_cfg(points, SolveCfg::default())
}

/// Step-by-step solve, city count checked against `cfg`.
pub fn solve_streaming_with_cfg(
    points: &[Point],
    cfg: SolveCfg,
) -> Result<SolveStream<'_>, TspError> {
    check_input(points, cfg)?;
    Ok(SolveStream {
        points,
        tours: Tours::new(points.len())?,
        best: BestTourState::new(),
        index: 0,
    })
}

fn check_input(points: &[Point], cfg: SolveCfg) -> Result<(), TspError> {
    cfg.check_city_count(points.len())?;
    check_finite(points)?;
    Ok(())
}

/// Pull-based solve: one `Step` per tour, in enumeration order.
///
/// Owns its tracker, so independent streams over the same points never see
/// each other's progress. Cloning snapshots the walk; `restart` rewinds it.
#[derive(Clone, Debug)]
pub struct SolveStream<'a> {
    points: &'a [Point],
    tours: Tours,
    best: BestTourState,
    index: u64,
}

impl<'a> SolveStream<'a> {
    #[inline]
    pub fn points(&self) -> &'a [Point] {
        self.points
    }

    /// Best seen so far (`None` before the first pull).
    #[inline]
    pub fn best(&self) -> Option<(&Tour, f64)> {
        self.best.current()
    }

    /// Steps taken so far.
    #[inline]
    pub fn steps_taken(&self) -> u64 {
        self.index
    }

    /// Total steps for this point set, if n! fits in a `u64`.
    #[inline]
    pub fn total_steps(&self) -> Option<u64> {
        crate::enumerate::tour_count(self.points.len())
    }

    /// Rewind to the first tour with a fresh tracker.
    pub fn restart(&mut self) {
        self.tours.restart();
        self.best.reset();
        self.index = 0;
    }

    /// Drain the rest of the stream and return the optimum.
    pub fn finish(mut self) -> Option<Solution> {
        self.by_ref().for_each(drop);
        self.best
            .into_best()
            .map(|(tour, length)| Solution { tour, length })
    }
}

impl Iterator for SolveStream<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let tour = self.tours.next()?;
        let length = closed_length(tour.as_slice(), self.points);
        let improved = self.best.observe(&tour, length);
        let (best_tour, best_length) = match self.best.current() {
            Some((t, l)) => (t.clone(), l),
            None => (tour.clone(), length),
        };
        let step = Step {
            index: self.index,
            tour,
            length,
            best_tour,
            best_length,
            improved,
        };
        self.index += 1;
        Some(step)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tours.size_hint()
    }
}

impl std::iter::FusedIterator for SolveStream<'_> {}
