//! Move selection strategies
//!
//! The solver switches between two searches depending on how many candidates
//! remain. `StrategyMode` lets callers pin one of them for experiments.

use std::fmt;

/// The search used to pick a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Maximize Shannon entropy of the outcome distribution
    Entropy,
    /// Maximize the expected win-rate score over the remaining candidates
    Minimax,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entropy => write!(f, "entropy"),
            Self::Minimax => write!(f, "minimax"),
        }
    }
}

/// How a strategy is chosen for each turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyMode {
    /// Minimax at or below the threshold, entropy above it (default)
    #[default]
    Adaptive,
    /// Always entropy
    Entropy,
    /// Always minimax
    Minimax,
}

impl StrategyMode {
    /// Create a mode from its name
    ///
    /// Supported names: "adaptive", "entropy", "minimax".
    /// Defaults to adaptive if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "entropy" => Self::Entropy,
            "minimax" => Self::Minimax,
            _ => Self::Adaptive,
        }
    }

    /// Pick the strategy for a subset of `subset_size` candidates
    ///
    /// # Examples
    /// ```
    /// use hit_and_blow::solver::{Strategy, StrategyMode};
    ///
    /// let mode = StrategyMode::Adaptive;
    /// assert_eq!(mode.resolve(50, 50), Strategy::Minimax);
    /// assert_eq!(mode.resolve(51, 50), Strategy::Entropy);
    /// ```
    #[must_use]
    pub const fn resolve(self, subset_size: usize, minimax_threshold: usize) -> Strategy {
        match self {
            Self::Entropy => Strategy::Entropy,
            Self::Minimax => Strategy::Minimax,
            Self::Adaptive => {
                if subset_size <= minimax_threshold {
                    Strategy::Minimax
                } else {
                    Strategy::Entropy
                }
            }
        }
    }
}

impl fmt::Display for StrategyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adaptive => write!(f, "adaptive"),
            Self::Entropy => write!(f, "entropy"),
            Self::Minimax => write!(f, "minimax"),
        }
    }
}

/// Where a suggested move came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    /// Only one candidate remains
    SoleCandidate,
    /// Fixed opening guess, no feedback yet
    Opening,
    /// Result of a search
    Search(Strategy),
}

impl fmt::Display for MoveSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SoleCandidate => write!(f, "sole candidate"),
            Self::Opening => write!(f, "opening"),
            Self::Search(strategy) => write!(f, "{strategy}"),
        }
    }
}
