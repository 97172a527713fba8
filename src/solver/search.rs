//! Parallel guess search
//!
//! Every strategy is a map-reduce over a guess pool: score each guess
//! independently against the read-only candidate set, then keep the best. Ties on
//! score go to a guess that is itself a candidate, then to the earliest guess in
//! pool order, so the result does not depend on thread scheduling.

use super::candidates::CandidateSet;
use crate::core::Code;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

/// Search progress snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Guesses scored so far
    pub examined: usize,
    /// Guesses in the pool
    pub total: usize,
}

impl Progress {
    /// Completed fraction in `[0, 1]`
    #[must_use]
    pub fn fraction(self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.examined as f64 / self.total as f64
        }
    }
}

/// Observer invoked from worker threads while a search runs
pub type ProgressCallback<'a> = &'a (dyn Fn(Progress) + Sync);

/// Throttled progress reporting shared by all workers of one search
///
/// The callback fires every `interval` guesses and exactly once when the last
/// guess is scored. It never influences the search result.
pub struct ProgressTracker<'a> {
    callback: Option<ProgressCallback<'a>>,
    interval: usize,
    total: usize,
    examined: AtomicUsize,
}

impl<'a> ProgressTracker<'a> {
    /// Track a search over `total` guesses
    #[must_use]
    pub fn new(total: usize, interval: usize, callback: Option<ProgressCallback<'a>>) -> Self {
        Self {
            callback,
            interval: interval.max(1),
            total,
            examined: AtomicUsize::new(0),
        }
    }

    /// Track without reporting
    #[must_use]
    pub fn silent(total: usize) -> Self {
        Self::new(total, usize::MAX, None)
    }

    /// Record one scored guess
    pub fn tick(&self) {
        let Some(callback) = self.callback else {
            return;
        };
        let examined = self.examined.fetch_add(1, AtomicOrdering::Relaxed) + 1;
        if examined % self.interval == 0 || examined == self.total {
            callback(Progress {
                examined,
                total: self.total,
            });
        }
    }
}

/// A scored guess
#[derive(Debug, Clone, Copy)]
pub struct Scored<S> {
    /// The guess
    pub guess: Code,
    /// Its strategy-specific score (higher is better)
    pub score: S,
    /// Whether the guess could itself be the secret
    pub is_candidate: bool,
    position: usize,
}

/// Find the best-scoring guess in `pool`
///
/// `score` returns `None` for guesses that must not be played; `compare` orders
/// scores. Returns `None` if no guess is eligible.
pub fn best_guess<S, F, C>(
    pool: &[Code],
    candidates: &CandidateSet,
    progress: &ProgressTracker<'_>,
    score: F,
    compare: C,
) -> Option<Scored<S>>
where
    S: Send,
    F: Fn(&Code) -> Option<S> + Sync,
    C: Fn(&S, &S) -> Ordering + Sync,
{
    pool.par_iter()
        .enumerate()
        .filter_map(|(position, guess)| {
            let scored = score(guess).map(|score| Scored {
                guess: *guess,
                score,
                is_candidate: candidates.contains(guess),
                position,
            });
            progress.tick();
            scored
        })
        .max_by(|a, b| {
            compare(&a.score, &b.score)
                .then(a.is_candidate.cmp(&b.is_candidate))
                .then(b.position.cmp(&a.position))
        })
}
