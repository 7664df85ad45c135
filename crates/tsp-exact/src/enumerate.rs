//! Lexicographic tour enumeration.
//!
//! `Tours` walks all n! permutations of `0..n`, starting at the identity and
//! stepping with the classic next-permutation rule. The order is fixed, so two
//! walks over the same n agree step for step; `restart` (or a `clone` taken
//! before iterating) replays it.
//!
//! There is no guard against factorial blowup here. The facades in `solve`
//! apply `SolveCfg` before enumerating; direct callers pick n themselves.

use std::iter::FusedIterator;

use crate::error::{InputError, TspError};
use crate::types::Tour;

/// Finite, restartable stream of every tour over `n` cities.
#[derive(Clone, Debug)]
pub struct Tours {
    n: usize,
    next: Option<Vec<usize>>,
    remaining: Option<u64>,
}

impl Tours {
    pub fn new(n: usize) -> Result<Self, TspError> {
        if n == 0 {
            return Err(InputError::NoCities.into());
        }
        Ok(Self {
            n,
            next: Some((0..n).collect()),
            remaining: tour_count(n),
        })
    }

    #[inline]
    pub fn cities(&self) -> usize {
        self.n
    }

    /// Tours not yet yielded, if n! fits in a `u64`.
    #[inline]
    pub fn remaining(&self) -> Option<u64> {
        self.remaining
    }

    /// Rewind to the first tour.
    pub fn restart(&mut self) {
        self.next = Some((0..self.n).collect());
        self.remaining = tour_count(self.n);
    }
}

impl Iterator for Tours {
    type Item = Tour;

    fn next(&mut self) -> Option<Tour> {
        let current = self.next.take()?;
        let mut successor = current.clone();
        if next_permutation(&mut successor) {
            self.next = Some(successor);
        }
        if let Some(r) = self.remaining.as_mut() {
            *r = r.saturating_sub(1);
        }
        Some(Tour::from(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.and_then(|r| usize::try_from(r).ok()) {
            Some(r) => (r, Some(r)),
            None => (0, None),
        }
    }
}

impl FusedIterator for Tours {}

/// All tours over `n` cities in lexicographic order. `n == 0` is rejected.
pub fn enumerate_tours(n: usize) -> Result<Tours, TspError> {
    Tours::new(n)
}

/// Number of tours over `n` cities (`n!`), or `None` if it overflows `u64`.
pub fn tour_count(n: usize) -> Option<u64> {
    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

/// Advance `a` to its lexicographic successor. Returns `false` (leaving `a`
/// untouched) when `a` is already the last permutation.
fn next_permutation(a: &mut [usize]) -> bool {
    if a.len() < 2 {
        return false;
    }
    // pivot: rightmost i with a[i] < a[i+1]
    let Some(i) = (0..a.len() - 1).rev().find(|&i| a[i] < a[i + 1]) else {
        return false;
    };
    // rightmost j > i with a[j] > a[i]; exists because a[i+1] > a[i]
    let mut j = a.len() - 1;
    while a[j] <= a[i] {
        j -= 1;
    }
    a.swap(i, j);
    a[i + 1..].reverse();
    true
}
