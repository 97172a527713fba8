//! Solver error type

use crate::core::{Code, CodeError, Outcome};
use std::fmt;

/// Errors reported by the solver session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Digit count outside the supported range `1..=10`
    InvalidDigits(usize),
    /// A shared universe was built for a different digit count
    UniverseMismatch { expected: usize, found: usize },
    /// A guess whose length does not match the session
    InvalidGuess(CodeError),
    /// Feedback that no remaining candidate can produce
    ///
    /// Earlier feedback was wrong, or the secret breaks the unique-digit rule.
    InconsistentFeedback { guess: Code, outcome: Outcome },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDigits(digits) => {
                write!(f, "Digit count must be between 1 and 10, got {digits}")
            }
            Self::UniverseMismatch { expected, found } => write!(
                f,
                "Universe has {found}-digit codes but the session expects {expected}"
            ),
            Self::InvalidGuess(err) => write!(f, "Invalid guess: {err}"),
            Self::InconsistentFeedback { guess, outcome } => write!(
                f,
                "No candidate is consistent with {guess} -> {outcome}; earlier feedback may be wrong"
            ),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGuess(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CodeError> for SolverError {
    fn from(err: CodeError) -> Self {
        Self::InvalidGuess(err)
    }
}
