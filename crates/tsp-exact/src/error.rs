//! Error types for the solver.
//!
//! Two kinds reach callers: bad input (city count, coordinates) and malformed
//! tours handed to the evaluator. Both are deterministic, so nothing here is
//! ever worth retrying.

use std::fmt;

/// Problem with the point set or requested city count.
#[derive(Clone, Debug, PartialEq)]
pub enum InputError {
    /// A tour needs at least one city.
    NoCities,
    /// City count above the configured supported range.
    TooManyCities { cities: usize, max: usize },
    /// Point `index` has a NaN or infinite coordinate.
    NonFinite { index: usize, x: f64, y: f64 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCities => write!(f, "need at least one city"),
            Self::TooManyCities { cities, max } => write!(
                f,
                "{cities} cities is outside the supported range 1..={max} (n! tours)"
            ),
            Self::NonFinite { index, x, y } => {
                write!(f, "point {index} has a non-finite coordinate ({x}, {y})")
            }
        }
    }
}

/// A tour that is not a permutation of the point indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TourError {
    LengthMismatch { expected: usize, found: usize },
    IndexOutOfRange { index: usize, cities: usize },
    DuplicateIndex { index: usize },
}

impl fmt::Display for TourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, found } => {
                write!(f, "tour visits {found} cities, point set has {expected}")
            }
            Self::IndexOutOfRange { index, cities } => {
                write!(f, "tour index {index} is out of range for {cities} cities")
            }
            Self::DuplicateIndex { index } => write!(f, "tour visits city {index} twice"),
        }
    }
}

/// Error type shared by all solver entry points.
#[derive(Clone, Debug, PartialEq)]
pub enum TspError {
    InvalidInput(InputError),
    InvalidTour(TourError),
}

impl TspError {
    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    #[inline]
    pub fn is_invalid_tour(&self) -> bool {
        matches!(self, Self::InvalidTour(_))
    }
}

impl fmt::Display for TspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(e) => write!(f, "invalid input: {e}"),
            Self::InvalidTour(e) => write!(f, "invalid tour: {e}"),
        }
    }
}

impl std::error::Error for InputError {}
impl std::error::Error for TourError {}

impl std::error::Error for TspError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(e) => Some(e),
            Self::InvalidTour(e) => Some(e),
        }
    }
}

impl From<InputError> for TspError {
    #[inline]
    fn from(e: InputError) -> Self {
        Self::InvalidInput(e)
    }
}

impl From<TourError> for TspError {
    #[inline]
    fn from(e: TourError) -> Self {
        Self::InvalidTour(e)
    }
}
