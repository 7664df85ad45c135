//! Euclidean metric and closed-tour length.
//!
//! - `distance`: norm of `p − q`.
//! - `tour_length`: validated sum over a closed tour, including the return edge.
//! - `closed_length`: the same sum without checks, for the enumeration hot loop.

use crate::error::{InputError, TourError, TspError};
use crate::types::{Point, Tour};

/// Euclidean distance between two points. Always `>= 0` for finite input.
#[inline]
pub fn distance(p: Point, q: Point) -> f64 {
    (p - q).norm()
}

/// Reject NaN and infinite coordinates.
pub fn check_finite(points: &[Point]) -> Result<(), InputError> {
    for (index, p) in points.iter().enumerate() {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return Err(InputError::NonFinite {
                index,
                x: p.x,
                y: p.y,
            });
        }
    }
    Ok(())
}

/// Check that `tour` is a permutation of `0..cities`.
pub fn check_tour(tour: &[usize], cities: usize) -> Result<(), TourError> {
    if tour.len() != cities {
        return Err(TourError::LengthMismatch {
            expected: cities,
            found: tour.len(),
        });
    }
    let mut seen = vec![false; cities];
    for &index in tour {
        let slot = seen
            .get_mut(index)
            .ok_or(TourError::IndexOutOfRange { index, cities })?;
        if *slot {
            return Err(TourError::DuplicateIndex { index });
        }
        *slot = true;
    }
    Ok(())
}

/// Total length of the closed tour over `points`.
///
/// Errors
/// - `InvalidInput` if `points` is empty or holds a non-finite coordinate.
/// - `InvalidTour` if `tour` is not a permutation of the point indices.
pub fn tour_length(tour: &Tour, points: &[Point]) -> Result<f64, TspError> {
    if points.is_empty() {
        return Err(InputError::NoCities.into());
    }
    check_tour(tour.as_slice(), points.len())?;
    check_finite(points)?;
    Ok(closed_length(tour.as_slice(), points))
}

/// Closed-tour length without validation.
///
/// Pre: `order` is a non-empty permutation of indices into `points`.
#[inline]
pub(crate) fn closed_length(order: &[usize], points: &[Point]) -> f64 {
    let (Some(&first), Some(&last)) = (order.first(), order.last()) else {
        return 0.0;
    };
    let open: f64 = order
        .windows(2)
        .map(|w| distance(points[w[0]], points[w[1]]))
        .sum();
    open + distance(points[last], points[first])
}
