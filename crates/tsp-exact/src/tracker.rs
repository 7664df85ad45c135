//! Best-so-far bookkeeping.
//!
//! Two states: `Empty` before the first observation, `Tracking` after. A
//! tracked tour is replaced only by a strictly shorter one, so ties keep the
//! tour seen first and the tracked length never increases.

use crate::types::Tour;

/// Running minimum over a stream of `(tour, length)` observations.
///
/// One tracker belongs to one solve session; start a new one for a new point
/// set.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum BestTourState {
    #[default]
    Empty,
    Tracking { tour: Tour, length: f64 },
}

impl BestTourState {
    #[inline]
    pub fn new() -> Self {
        Self::Empty
    }

    /// Fold one observation in. Returns `true` if it became the new best.
    ///
    /// The first observation is always taken. `length` is expected to be
    /// finite; a NaN never displaces a held tour.
    pub fn observe(&mut self, tour: &Tour, length: f64) -> bool {
        if let Self::Tracking { length: best, .. } = self {
            if length.is_nan() || length >= *best {
                return false;
            }
        }
        *self = Self::Tracking {
            tour: tour.clone(),
            length,
        };
        true
    }

    /// Current best, if anything has been observed.
    #[inline]
    pub fn current(&self) -> Option<(&Tour, f64)> {
        match self {
            Self::Empty => None,
            Self::Tracking { tour, length } => Some((tour, *length)),
        }
    }

    #[inline]
    pub fn best_length(&self) -> Option<f64> {
        self.current().map(|(_, length)| length)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn into_best(self) -> Option<(Tour, f64)> {
        match self {
            Self::Empty => None,
            Self::Tracking { tour, length } => Some((tour, length)),
        }
    }

    /// Back to `Empty`.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::Empty;
    }
}
