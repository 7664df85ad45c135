//! Supported city-count range.
//!
//! Policy
//! - Work is n! tour evaluations. 10 cities (3.6M tours) keeps a pull-driven
//!   display responsive; 12 cities (479M tours) is a seconds-to-minutes batch
//!   job. Nothing past that is accepted by the facades.

use crate::error::InputError;

/// Upper city count for interactive (step-by-step) use.
pub const INTERACTIVE_MAX_CITIES: usize = 10;
/// Upper city count for batch solves.
pub const BATCH_MAX_CITIES: usize = 12;

/// Solve-session configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolveCfg {
    /// Largest accepted city count (inclusive). The smallest is always 1.
    pub max_cities: usize,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self {
            max_cities: BATCH_MAX_CITIES,
        }
    }
}

impl SolveCfg {
    #[inline]
    pub fn interactive() -> Self {
        Self {
            max_cities: INTERACTIVE_MAX_CITIES,
        }
    }

    /// Accept `1..=max_cities`.
    pub fn check_city_count(&self, cities: usize) -> Result<(), InputError> {
        if cities == 0 {
            return Err(InputError::NoCities);
        }
        if cities > self.max_cities {
            return Err(InputError::TooManyCities {
                cities,
                max: self.max_cities,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_count_bounds() {
        let cfg = SolveCfg::default();
        assert_eq!(cfg.check_city_count(0), Err(InputError::NoCities));
        assert!(cfg.check_city_count(1).is_ok());
        assert!(cfg.check_city_count(BATCH_MAX_CITIES).is_ok());
        assert_eq!(
            cfg.check_city_count(13),
            Err(InputError::TooManyCities { cities: 13, max: 12 })
        );
        assert!(SolveCfg::interactive().check_city_count(11).is_err());
    }
}
