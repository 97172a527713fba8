//! Pure entropy-based guess selection
//!
//! Selects guesses that maximize Shannon entropy (expected information gain).

use super::calculator::calculate_entropy;
use crate::core::Code;
use crate::solver::candidates::CandidateSet;
use crate::solver::search::{ProgressTracker, best_guess};

/// Select best guess by maximizing entropy
///
/// Every guess in `guess_pool` is scored against `candidates`. On equal entropy a
/// guess that is itself a candidate wins, then the earliest in the pool.
///
/// Returns the guess and its entropy, or `None` if the guess pool is empty.
///
/// # Examples
/// ```
/// use hit_and_blow::core::Code;
/// use hit_and_blow::solver::CandidateSet;
/// use hit_and_blow::solver::entropy::select_best_guess;
/// use hit_and_blow::solver::search::ProgressTracker;
///
/// let pool: Vec<Code> = ["4567", "0145"].iter().map(|s| s.parse().unwrap()).collect();
/// let candidates: CandidateSet = ["0123", "1023", "0132"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
///
/// let tracker = ProgressTracker::silent(pool.len());
/// let (best, entropy) = select_best_guess(&pool, &candidates, &tracker).unwrap();
/// assert_eq!(best.to_string(), "0145"); // 4567 learns nothing here
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess(
    guess_pool: &[Code],
    candidates: &CandidateSet,
    progress: &ProgressTracker<'_>,
) -> Option<(Code, f64)> {
    let codes = candidates.codes();

    best_guess(
        guess_pool,
        candidates,
        progress,
        |guess| Some(calculate_entropy(guess, codes)),
        f64::total_cmp,
    )
    .map(|best| (best.guess, best.score))
}
