//! Solver configuration
//!
//! All tunable thresholds live here so that the dispatch rule is stated once.

use super::error::SolverError;
use super::strategy::{Strategy, StrategyMode};
use crate::core::{Code, MAX_DIGITS};

/// Smallest supported code length
pub const MIN_DIGITS: usize = 1;

/// Solver configuration with tunable thresholds
///
/// With default thresholds (50, 200):
/// - **1 candidate**: answer it directly
/// - **full universe**: fixed opening guess `0123…`
/// - **51+ candidates**: entropy, guessing from the candidates only when more
///   than 200 remain, otherwise from the whole universe
/// - **2-50 candidates**: minimax over the whole universe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Code length D (default: 4)
    pub digits: usize,

    /// How the per-turn strategy is chosen (default: adaptive)
    pub mode: StrategyMode,

    /// Candidates <= this use minimax (default: 50)
    pub minimax_threshold: usize,

    /// Candidates <= this let entropy search the full universe (default: 200)
    pub full_search_threshold: usize,

    /// Report entropy search progress every this many guesses (default: 100)
    pub progress_interval: usize,

    /// Report minimax search progress every this many guesses (default: 50)
    pub minimax_progress_interval: usize,
}

impl SolverConfig {
    /// Default configuration for codes of `digits` digits
    #[must_use]
    pub fn new(digits: usize) -> Self {
        Self {
            digits,
            ..Self::default()
        }
    }

    /// Override the strategy mode
    #[must_use]
    pub const fn with_mode(mut self, mode: StrategyMode) -> Self {
        self.mode = mode;
        self
    }

    /// Override the minimax threshold
    #[must_use]
    pub const fn with_minimax_threshold(mut self, threshold: usize) -> Self {
        self.minimax_threshold = threshold;
        self
    }

    /// Override the full-universe entropy search threshold
    #[must_use]
    pub const fn with_full_search_threshold(mut self, threshold: usize) -> Self {
        self.full_search_threshold = threshold;
        self
    }

    /// Override the entropy progress reporting interval
    #[must_use]
    pub const fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Override the minimax progress reporting interval
    #[must_use]
    pub const fn with_minimax_progress_interval(mut self, interval: usize) -> Self {
        self.minimax_progress_interval = interval;
        self
    }

    /// Check that the digit count is supported
    ///
    /// # Errors
    /// Returns `SolverError::InvalidDigits` unless `1 <= digits <= 10`.
    pub const fn validate(&self) -> Result<(), SolverError> {
        if self.digits < MIN_DIGITS || self.digits > MAX_DIGITS {
            return Err(SolverError::InvalidDigits(self.digits));
        }
        Ok(())
    }

    /// The fixed opening guess `0, 1, …, D-1`
    ///
    /// # Errors
    /// Returns `SolverError::InvalidDigits` unless `1 <= digits <= 10`.
    pub fn opening_guess(&self) -> Result<Code, SolverError> {
        self.validate()?;
        Ok(Code::sequential(self.digits)?)
    }

    /// Strategy for a subset of `subset_size` candidates
    #[must_use]
    pub const fn strategy_for(&self, subset_size: usize) -> Strategy {
        self.mode.resolve(subset_size, self.minimax_threshold)
    }

    /// Guesses between progress reports for a `strategy` search
    #[must_use]
    pub const fn progress_interval_for(&self, strategy: Strategy) -> usize {
        match strategy {
            Strategy::Entropy => self.progress_interval,
            Strategy::Minimax => self.minimax_progress_interval,
        }
    }

    /// Whether an entropy search over `subset_size` candidates may use
    /// non-candidate guesses from the whole universe
    #[must_use]
    pub const fn searches_full_universe(&self, subset_size: usize) -> bool {
        subset_size <= self.full_search_threshold
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            digits: 4,
            mode: StrategyMode::Adaptive,
            minimax_threshold: 50,
            full_search_threshold: 200,
            progress_interval: 100,
            minimax_progress_interval: 50,
        }
    }
}
