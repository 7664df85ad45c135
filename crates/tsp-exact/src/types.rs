//! Point and tour types.
//!
//! - `Point`: a plane coordinate, `nalgebra::Vector2<f64>`.
//! - `Tour`: visiting order as indices into a point slice; closed implicitly
//!   (the last index connects back to the first).

use std::fmt;

use nalgebra::Vector2;

/// A city in the plane. Callers own their points; the solver only reads them.
pub type Point = Vector2<f64>;

/// Visiting order over a point set, by index.
///
/// Invariants (checked by `metric::check_tour`, not by construction):
/// - Length equals the number of points.
/// - Every index in `0..len` appears exactly once.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Tour(Vec<usize>);

impl Tour {
    #[inline]
    pub fn new(order: Vec<usize>) -> Self {
        Self(order)
    }

    /// The single-city tour `[0]`.
    #[inline]
    pub fn trivial() -> Self {
        Self(vec![0])
    }

    /// Identity order `0, 1, …, n-1` (the first tour in enumeration order).
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// Same cycle started `k` positions later.
    pub fn rotated(&self, k: usize) -> Tour {
        let mut order = self.0.clone();
        if !order.is_empty() {
            let k = k % order.len();
            order.rotate_left(k);
        }
        Tour(order)
    }

    /// Same cycle traversed backwards.
    pub fn reversed(&self) -> Tour {
        let mut order = self.0.clone();
        order.reverse();
        Tour(order)
    }

    /// Polyline a display draws for this tour: the visited points in order,
    /// with the first point repeated at the end to close the loop.
    ///
    /// Returns `None` if the tour is empty or refers past the end of `points`.
    pub fn closed_path(&self, points: &[Point]) -> Option<Vec<Point>> {
        let first = *self.0.first()?;
        let mut path = Vec::with_capacity(self.0.len() + 1);
        for &idx in &self.0 {
            path.push(*points.get(idx)?);
        }
        path.push(points[first]);
        Some(path)
    }
}

impl From<Vec<usize>> for Tour {
    #[inline]
    fn from(order: Vec<usize>) -> Self {
        Self(order)
    }
}

impl AsRef<[usize]> for Tour {
    #[inline]
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (k, idx) in self.0.iter().enumerate() {
            if k > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{idx}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn rotate_and_reverse_keep_indices() {
        let t = Tour::from(vec![0, 2, 1, 3]);
        assert_eq!(t.rotated(1).as_slice(), &[2, 1, 3, 0]);
        assert_eq!(t.rotated(5), t.rotated(1));
        assert_eq!(t.reversed().as_slice(), &[3, 1, 2, 0]);
        assert_eq!(Tour::default().rotated(3), Tour::default());
    }

    #[test]
    fn closed_path_repeats_start() {
        let pts = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![1.0, 1.0]];
        let path = Tour::from(vec![2, 0, 1]).closed_path(&pts).unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(path[0], pts[2]);
        assert_eq!(path[3], pts[2]);
        assert!(Tour::from(vec![0, 5]).closed_path(&pts).is_none());
        assert!(Tour::default().closed_path(&pts).is_none());
    }

    #[test]
    fn display_lists_indices() {
        assert_eq!(Tour::from(vec![1, 0, 2]).to_string(), "[1, 0, 2]");
        assert_eq!(Tour::trivial().to_string(), "[0]");
    }
}
