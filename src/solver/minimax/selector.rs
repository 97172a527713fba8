//! Win-rate guess selection
//!
//! Selects the guess with the highest win-rate score, skipping guesses that
//! cannot narrow the candidates.

use super::calculator::eligible_score_units;
use crate::core::Code;
use crate::solver::candidates::CandidateSet;
use crate::solver::search::{ProgressTracker, best_guess};

/// Select best guess by maximizing the win-rate score
///
/// Returns the guess and its score in `[0, 1]`, or `None` if no guess in the
/// pool is eligible. Ties prefer a guess that is itself a candidate, then the
/// earliest in the pool.
///
/// # Examples
/// ```
/// use hit_and_blow::core::Code;
/// use hit_and_blow::solver::CandidateSet;
/// use hit_and_blow::solver::minimax::select_best_guess;
/// use hit_and_blow::solver::search::ProgressTracker;
///
/// let pool: Vec<Code> = ["6789", "0123"].iter().map(|s| s.parse().unwrap()).collect();
/// let candidates: CandidateSet = ["0123", "4567"].iter().map(|s| s.parse().unwrap()).collect();
///
/// let tracker = ProgressTracker::silent(pool.len());
/// let (best, score) = select_best_guess(&pool, &candidates, &tracker).unwrap();
/// assert_eq!(best.to_string(), "0123");
/// assert!((score - 0.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn select_best_guess(
    guess_pool: &[Code],
    candidates: &CandidateSet,
    progress: &ProgressTracker<'_>,
) -> Option<(Code, f64)> {
    let n = candidates.len();
    if n == 0 {
        return None;
    }

    best_guess(
        guess_pool,
        candidates,
        progress,
        |guess| eligible_score_units(guess, candidates),
        Ord::cmp,
    )
    .map(|best| (best.guess, best.score as f64 / n as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outcome;
    use crate::solver::Universe;

    fn codes(list: &[&str]) -> Vec<Code> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn never_picks_uninformative_guess() {
        // 6789 keeps both candidates together; 0123 separates them
        let guesses = codes(&["6789", "0123"]);
        let candidates: CandidateSet = codes(&["0123", "1023"]).into_iter().collect();
        let tracker = ProgressTracker::silent(guesses.len());

        let (best, _) = select_best_guess(&guesses, &candidates, &tracker).unwrap();
        assert_eq!(best.to_string(), "0123");
    }

    #[test]
    fn prefers_candidates_on_equal_score() {
        let universe = Universe::new(4).unwrap();
        let candidates: CandidateSet = codes(&["0123", "4567"]).into_iter().collect();
        let tracker = ProgressTracker::silent(universe.len());

        let (best, score) = select_best_guess(universe.codes(), &candidates, &tracker).unwrap();

        // Any candidate scores 1/2; a non-candidate split scores 0
        assert!(candidates.contains(&best));
        assert!((score - 0.5).abs() < 1e-12);
        assert_eq!(best.to_string(), "0123");
    }

    #[test]
    fn chosen_guess_always_narrows() {
        let universe = Universe::new(4).unwrap();
        let candidates: CandidateSet = universe.codes()[..50].iter().copied().collect();
        let tracker = ProgressTracker::silent(universe.len());

        let (best, _) = select_best_guess(universe.codes(), &candidates, &tracker).unwrap();

        for secret in candidates.codes() {
            let outcome = Outcome::judge(&best, secret);
            let remaining = candidates.consistent_with(&best, outcome);
            assert!(remaining.len() < candidates.len());
            assert!(remaining.contains(secret));
        }
    }

    #[test]
    fn returns_none_without_candidates() {
        let guesses = codes(&["0123"]);
        let tracker = ProgressTracker::silent(guesses.len());
        assert!(select_best_guess(&guesses, &CandidateSet::default(), &tracker).is_none());
    }

    #[test]
    fn returns_none_on_empty_guess_pool() {
        let candidates: CandidateSet = codes(&["0123"]).into_iter().collect();
        let tracker = ProgressTracker::silent(0);
        assert!(select_best_guess(&[], &candidates, &tracker).is_none());
    }
}
