//! Win-rate score calculation for Hit/Blow guesses
//!
//! For a guess g against candidate set S (N = |S|):
//!
//! ```text
//! Score(g) = P(g is the secret) + Σ_b P(b) · (1 − w(|b|))
//! w(k)     = ⌊(k + 1) / 2⌋ / k
//! ```
//!
//! where b ranges over the outcome buckets of g. `w(k)` estimates the win
//! probability of the opponent, who moves next facing k equally likely
//! candidates. It is a heuristic, not an exact optimal-play value.
//!
//! Since `P(b) · (1 − w(|b|)) = ⌊|b| / 2⌋ / N`, the score is an integer count
//! divided by N. Scores are compared as those integers so equal scores are
//! exactly equal.

use crate::core::{Code, Outcome, bucket_counts};
use crate::solver::candidates::CandidateSet;
use rustc_hash::FxHashMap;

/// Estimated win probability for the player to move facing `k` candidates
///
/// # Examples
/// ```
/// use hit_and_blow::solver::minimax::opponent_win_rate;
///
/// assert_eq!(opponent_win_rate(1), 1.0);
/// assert_eq!(opponent_win_rate(2), 0.5);
/// assert!((opponent_win_rate(3) - 2.0 / 3.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn opponent_win_rate(k: usize) -> f64 {
    if k == 0 {
        return 0.0;
    }
    k.div_ceil(2) as f64 / k as f64
}

/// Score of `guess` scaled by the candidate count: `[g ∈ S] + Σ_b ⌊|b| / 2⌋`
#[must_use]
pub fn score_units(guess: &Code, candidates: &CandidateSet) -> usize {
    let counts = bucket_counts(guess, candidates.codes());
    units(candidates.contains(guess), &counts)
}

/// Scaled score of `guess`, or `None` if playing it cannot narrow the candidates
///
/// Computes the buckets once for both the eligibility check and the score.
#[must_use]
pub fn eligible_score_units(guess: &Code, candidates: &CandidateSet) -> Option<usize> {
    let is_candidate = candidates.contains(guess);
    let counts = bucket_counts(guess, candidates.codes());
    is_informative(is_candidate, &counts).then(|| units(is_candidate, &counts))
}

/// Win-rate score of `guess` in `[0, 1]`
#[must_use]
pub fn calculate_score(guess: &Code, candidates: &CandidateSet) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    score_units(guess, candidates) as f64 / candidates.len() as f64
}

fn units(is_candidate: bool, counts: &FxHashMap<Outcome, usize>) -> usize {
    let survive: usize = counts.values().map(|&size| size / 2).sum();
    usize::from(is_candidate) + survive
}

/// A guess is uninformative when it is not a candidate and every candidate
/// answers it identically.
fn is_informative(is_candidate: bool, counts: &FxHashMap<Outcome, usize>) -> bool {
    is_candidate || counts.len() > 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Universe;

    fn set(list: &[&str]) -> CandidateSet {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    /// Score computed literally from the probability formula
    fn float_score(guess: &Code, candidates: &CandidateSet) -> f64 {
        let n = candidates.len() as f64;
        let immediate = if candidates.contains(guess) { 1.0 / n } else { 0.0 };
        let survive: f64 = bucket_counts(guess, candidates.codes())
            .values()
            .map(|&size| size as f64 / n * (1.0 - opponent_win_rate(size)))
            .sum();
        immediate + survive
    }

    #[test]
    fn win_rate_values() {
        assert!(opponent_win_rate(0).abs() < f64::EPSILON);
        assert!((opponent_win_rate(1) - 1.0).abs() < f64::EPSILON);
        assert!((opponent_win_rate(2) - 0.5).abs() < f64::EPSILON);
        assert!((opponent_win_rate(4) - 0.5).abs() < f64::EPSILON);
        assert!((opponent_win_rate(5) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn integer_score_matches_formula() {
        let universe = Universe::new(3).unwrap();
        let candidates: CandidateSet = universe.codes()[..40].iter().copied().collect();

        for guess in universe.codes().iter().step_by(7) {
            let exact = calculate_score(guess, &candidates);
            let literal = float_score(guess, &candidates);
            assert!((exact - literal).abs() < 1e-9, "{guess}: {exact} vs {literal}");
        }
    }

    #[test]
    fn candidate_guess_scores_immediate_win() {
        // 0123 wins outright or leaves one candidate for the opponent
        let candidates = set(&["0123", "4567"]);
        let guess: Code = "0123".parse().unwrap();

        assert_eq!(score_units(&guess, &candidates), 1);
        assert!((calculate_score(&guess, &candidates) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn pairs_count_as_survivals() {
        // 6789 answers 0H0B to all four: one bucket of 4 → 2 units
        let candidates = set(&["0123", "1023", "0132", "4501"]);
        let guess: Code = "6789".parse().unwrap();
        assert_eq!(score_units(&guess, &candidates), 2);
    }

    #[test]
    fn eligible_units_skip_uninformative_guesses() {
        let candidates = set(&["0123", "1023", "0132", "4501"]);

        assert_eq!(eligible_score_units(&"6789".parse().unwrap(), &candidates), None);
        let guess: Code = "0132".parse().unwrap();
        assert_eq!(
            eligible_score_units(&guess, &candidates),
            Some(score_units(&guess, &candidates))
        );
    }

    #[test]
    fn empty_candidates_score_zero() {
        let guess: Code = "0123".parse().unwrap();
        assert!(calculate_score(&guess, &CandidateSet::default()).abs() < f64::EPSILON);
    }

    #[test]
    fn informative_guesses() {
        let candidates = set(&["0123", "1023"]);

        // Candidates are always playable
        assert!(eligible_score_units(&"0123".parse().unwrap(), &candidates).is_some());
        // 3H0B against 0123, 1H2B against 1023
        assert!(eligible_score_units(&"0193".parse().unwrap(), &candidates).is_some());
        // No shared digits: both answer 0H0B
        assert_eq!(eligible_score_units(&"4567".parse().unwrap(), &candidates), None);
        assert_eq!(
            eligible_score_units(&"4567".parse().unwrap(), &CandidateSet::default()),
            None
        );
    }
}
