//! Guess analysis command
//!
//! Reports how well a specific guess splits the solver's current candidates.

use crate::core::{Code, CodeError};
use crate::solver::{GuessReport, Solver};

/// Result of analyzing a guess
#[derive(Debug, Clone, Copy)]
pub struct AnalysisResult {
    pub guess: Code,
    pub report: GuessReport,
    pub expected_reduction: f64,
    pub total_candidates: usize,
}

/// Analyze `guess` against the solver's remaining candidates
///
/// # Errors
///
/// Returns `CodeError` if the guess is not a valid code for the solver's digit
/// count.
pub fn analyze_guess(guess: &str, solver: &Solver) -> Result<AnalysisResult, CodeError> {
    let guess = Code::parse(guess.trim(), solver.config().digits)?;
    let report = solver.evaluate(&guess);

    Ok(AnalysisResult {
        guess,
        report,
        expected_reduction: report.metrics.entropy.exp2(),
        total_candidates: solver.size(),
    })
}
