//! Main Hit and Blow solver interface

use super::candidates::{CandidateSet, CandidateStore};
use super::config::SolverConfig;
use super::entropy::{self, GuessMetrics};
use super::error::SolverError;
use super::minimax;
use super::search::{ProgressCallback, ProgressTracker};
use super::strategy::{MoveSource, Strategy};
use super::universe::Universe;
use crate::core::{Code, CodeError, Outcome};
use std::sync::Arc;

/// A suggested guess and how it was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub guess: Code,
    pub source: MoveSource,
}

/// How an arbitrary guess would perform against the current candidates
#[derive(Debug, Clone, Copy)]
pub struct GuessReport {
    /// Entropy-side metrics of the outcome distribution
    pub metrics: GuessMetrics,
    /// Win-rate score in `[0, 1]`
    pub minimax_score: f64,
    /// Whether the guess could itself be the secret
    pub is_candidate: bool,
}

/// One game's solving session
///
/// Owns the candidate subset; the universe is shared. Alternate
/// [`Solver::suggest_move`] with [`Solver::update`] until [`Solver::is_solved`].
#[derive(Debug, Clone)]
pub struct Solver {
    config: SolverConfig,
    store: CandidateStore,
    opening: Code,
}

impl Solver {
    /// Create a session with its own universe
    ///
    /// # Errors
    /// Returns `SolverError::InvalidDigits` if the configured digit count is
    /// outside `1..=10`.
    ///
    /// # Examples
    /// ```
    /// use hit_and_blow::solver::{Solver, SolverConfig};
    ///
    /// let solver = Solver::new(SolverConfig::default()).unwrap();
    /// assert_eq!(solver.size(), 5040);
    /// assert_eq!(solver.suggest_move().guess.to_string(), "0123");
    /// ```
    pub fn new(config: SolverConfig) -> Result<Self, SolverError> {
        config.validate()?;
        let universe = Arc::new(Universe::new(config.digits)?);
        Self::with_universe(universe, config)
    }

    /// Create a session drawing from an already built universe
    ///
    /// # Errors
    /// Returns `SolverError::UniverseMismatch` if the universe was built for a
    /// different digit count, or `SolverError::InvalidDigits` as for [`Solver::new`].
    pub fn with_universe(universe: Arc<Universe>, config: SolverConfig) -> Result<Self, SolverError> {
        config.validate()?;
        if universe.digits() != config.digits {
            return Err(SolverError::UniverseMismatch {
                expected: config.digits,
                found: universe.digits(),
            });
        }

        let opening = config.opening_guess()?;
        Ok(Self {
            config,
            store: CandidateStore::new(universe),
            opening,
        })
    }

    /// Suggest the next guess
    #[must_use]
    pub fn suggest_move(&self) -> Suggestion {
        self.select(None)
    }

    /// Suggest the next guess, reporting search progress to `callback`
    ///
    /// The callback runs on worker threads every `progress_interval` guesses
    /// (`minimax_progress_interval` for minimax) and once when the search
    /// completes. It has no effect on the result.
    #[must_use]
    pub fn suggest_move_with_progress(&self, callback: ProgressCallback<'_>) -> Suggestion {
        self.select(Some(callback))
    }

    fn select(&self, callback: Option<ProgressCallback<'_>>) -> Suggestion {
        if let Some(guess) = self.store.sole_candidate() {
            return Suggestion {
                guess,
                source: MoveSource::SoleCandidate,
            };
        }

        if self.store.is_unfiltered() {
            log::info!("opening with {}", self.opening);
            return Suggestion {
                guess: self.opening,
                source: MoveSource::Opening,
            };
        }

        let size = self.store.size();
        let candidates = self.store.candidates();
        let universe = self.store.universe().codes();
        let strategy = self.config.strategy_for(size);

        let pool = match strategy {
            Strategy::Entropy if !self.config.searches_full_universe(size) => candidates.codes(),
            _ => universe,
        };
        log::debug!(
            "{size} candidates: {strategy} search over {} guesses",
            pool.len()
        );

        let interval = self.config.progress_interval_for(strategy);
        let tracker = ProgressTracker::new(pool.len(), interval, callback);
        let best = match strategy {
            Strategy::Entropy => entropy::select_best_guess(pool, candidates, &tracker),
            Strategy::Minimax => minimax::select_best_guess(pool, candidates, &tracker),
        };

        // Searches only come up empty on an empty pool, which the store rules out
        let guess = best
            .map(|(guess, _)| guess)
            .or_else(|| candidates.codes().first().copied())
            .unwrap_or(self.opening);

        Suggestion {
            guess,
            source: MoveSource::Search(strategy),
        }
    }

    /// Narrow the candidates with the feedback `outcome` for `guess`
    ///
    /// Returns the number of remaining candidates.
    ///
    /// # Errors
    /// - `SolverError::InvalidGuess` if `guess` has the wrong length
    /// - `SolverError::InconsistentFeedback` if no candidate could give this
    ///   feedback; the candidates are left unchanged
    pub fn update(&mut self, guess: &Code, outcome: Outcome) -> Result<usize, SolverError> {
        if guess.len() != self.config.digits {
            return Err(SolverError::InvalidGuess(CodeError::WrongLength {
                expected: self.config.digits,
                found: guess.len(),
            }));
        }

        let remaining = self.store.filter(guess, outcome).inspect_err(|err| {
            log::warn!("rejected feedback: {err}");
        })?;

        if let Some(answer) = self.store.sole_candidate() {
            log::info!("solved: {answer}");
        }

        Ok(remaining)
    }

    /// Score an arbitrary guess against the current candidates
    #[must_use]
    pub fn evaluate(&self, guess: &Code) -> GuessReport {
        let candidates = self.store.candidates();
        GuessReport {
            metrics: entropy::calculate_metrics(guess, candidates.codes()),
            minimax_score: minimax::calculate_score(guess, candidates),
            is_candidate: candidates.contains(guess),
        }
    }

    /// Start a new game against the same universe
    pub fn reset(&mut self) {
        self.store.reset();
    }

    /// Number of remaining candidates
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.store.size()
    }

    /// Check if exactly one candidate remains
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.store.is_solved()
    }

    /// The deduced secret, once solved
    #[must_use]
    pub fn sole_candidate(&self) -> Option<Code> {
        self.store.sole_candidate()
    }

    /// The remaining candidates
    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        self.store.candidates()
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn universe(&self) -> &Universe {
        self.store.universe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{Progress, StrategyMode};
    use std::sync::Mutex;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    fn play(solver: &mut Solver, secret: &Code, max_turns: usize) -> usize {
        for turn in 1..=max_turns {
            let guess = solver.suggest_move().guess;
            let outcome = Outcome::judge(&guess, secret);
            if outcome.is_solved(secret.len()) {
                return turn;
            }
            solver.update(&guess, outcome).unwrap();
        }
        panic!("{secret} not solved in {max_turns} turns");
    }

    #[test]
    fn rejects_invalid_digit_counts() {
        assert_eq!(
            Solver::new(SolverConfig::new(0)).unwrap_err(),
            SolverError::InvalidDigits(0)
        );
        assert_eq!(
            Solver::new(SolverConfig::new(11)).unwrap_err(),
            SolverError::InvalidDigits(11)
        );
    }

    #[test]
    fn rejects_mismatched_universe() {
        let universe = Arc::new(Universe::new(3).unwrap());
        let err = Solver::with_universe(universe, SolverConfig::new(4)).unwrap_err();
        assert_eq!(
            err,
            SolverError::UniverseMismatch {
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn opening_move_is_fixed() {
        let solver = Solver::new(SolverConfig::new(5)).unwrap();
        let first = solver.suggest_move();
        assert_eq!(first.guess.to_string(), "01234");
        assert_eq!(first.source, MoveSource::Opening);
        assert_eq!(solver.suggest_move(), first);
    }

    #[test]
    fn sole_candidate_is_returned() {
        let mut solver = Solver::new(SolverConfig::new(2)).unwrap();
        solver.update(&code("01"), Outcome::new(0, 2)).unwrap();

        assert!(solver.is_solved());
        assert_eq!(solver.sole_candidate(), Some(code("10")));
        let suggestion = solver.suggest_move();
        assert_eq!(suggestion.guess, code("10"));
        assert_eq!(suggestion.source, MoveSource::SoleCandidate);
    }

    #[test]
    fn dispatch_follows_subset_size() {
        let mut solver = Solver::new(SolverConfig::default()).unwrap();
        // 0H0B on 0123 leaves the 360 codes drawn from 4..9
        assert_eq!(solver.update(&code("0123"), Outcome::new(0, 0)).unwrap(), 360);
        assert_eq!(
            solver.suggest_move().source,
            MoveSource::Search(Strategy::Entropy)
        );

        let mut solver = Solver::new(SolverConfig::default()).unwrap();
        // 2H2B on 0123 leaves the six single swaps of 0123
        solver.update(&code("0123"), Outcome::new(2, 2)).unwrap();
        assert_eq!(solver.size(), 6);
        assert_eq!(
            solver.suggest_move().source,
            MoveSource::Search(Strategy::Minimax)
        );
    }

    #[test]
    fn pinned_modes_override_threshold() {
        let config = SolverConfig::default().with_mode(StrategyMode::Entropy);
        let mut solver = Solver::new(config).unwrap();
        solver.update(&code("0123"), Outcome::new(2, 2)).unwrap();
        assert_eq!(
            solver.suggest_move().source,
            MoveSource::Search(Strategy::Entropy)
        );
    }

    fn reported(solver: &Solver) -> Vec<Progress> {
        let seen = Mutex::new(Vec::new());
        let callback = |progress: Progress| seen.lock().unwrap().push(progress);
        let _ = solver.suggest_move_with_progress(&callback);
        let mut seen = seen.into_inner().unwrap();
        seen.sort_by_key(|p| p.examined);
        seen
    }

    #[test]
    fn progress_interval_depends_on_strategy() {
        let mut solver = Solver::new(SolverConfig::default()).unwrap();
        // 360 candidates: entropy over the candidates, every 100 guesses
        solver.update(&code("0123"), Outcome::new(0, 0)).unwrap();
        let examined: Vec<usize> = reported(&solver).iter().map(|p| p.examined).collect();
        assert_eq!(examined, [100, 200, 300, 360]);

        let mut solver = Solver::new(SolverConfig::default()).unwrap();
        // 6 candidates: minimax over all 5040 codes, every 50 guesses
        solver.update(&code("0123"), Outcome::new(2, 2)).unwrap();
        let seen = reported(&solver);
        assert_eq!(seen.len(), 5040 / 50 + 1);
        assert_eq!(seen[0].examined, 50);
        assert_eq!(seen.last().map(|p| (p.examined, p.total)), Some((5040, 5040)));
    }

    #[test]
    fn inconsistent_feedback_leaves_state_unchanged() {
        let mut solver = Solver::new(SolverConfig::default()).unwrap();
        solver.update(&code("0123"), Outcome::new(4, 0)).unwrap();
        assert!(solver.is_solved());

        let err = solver.update(&code("4567"), Outcome::new(1, 0)).unwrap_err();
        assert!(matches!(err, SolverError::InconsistentFeedback { .. }));
        assert_eq!(solver.size(), 1);
        assert_eq!(solver.sole_candidate(), Some(code("0123")));
    }

    #[test]
    fn wrong_length_guess_is_rejected() {
        let mut solver = Solver::new(SolverConfig::default()).unwrap();
        let err = solver.update(&code("012"), Outcome::new(0, 0)).unwrap_err();
        assert_eq!(
            err,
            SolverError::InvalidGuess(CodeError::WrongLength {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(solver.size(), 5040);
    }

    #[test]
    fn reset_restores_universe() {
        let mut solver = Solver::new(SolverConfig::default()).unwrap();
        solver.update(&code("0123"), Outcome::new(1, 1)).unwrap();
        assert!(solver.size() < 5040);

        solver.reset();
        assert_eq!(solver.size(), 5040);
        assert_eq!(solver.suggest_move().source, MoveSource::Opening);
    }

    #[test]
    fn evaluate_reports_membership() {
        let solver = Solver::new(SolverConfig::new(2)).unwrap();
        let report = solver.evaluate(&code("01"));
        assert!(report.is_candidate);
        assert!(report.metrics.entropy > 0.0);
        assert!(report.minimax_score > 0.0 && report.minimax_score <= 1.0);
    }

    #[test]
    fn solves_small_games() {
        let universe = Arc::new(Universe::new(3).unwrap());
        for secret in universe.codes().iter().step_by(37) {
            let mut solver = Solver::with_universe(Arc::clone(&universe), SolverConfig::new(3)).unwrap();
            play(&mut solver, secret, 15);
        }
    }

    #[test]
    fn solves_opening_secret_in_one_turn() {
        let mut solver = Solver::new(SolverConfig::default()).unwrap();
        assert_eq!(play(&mut solver, &code("0123"), 7), 1);
    }
}
