//! Secret solving command
//!
//! Plays the solver against a known secret and records every step.

use crate::core::{Code, CodeError, Outcome};
use crate::solver::{MoveSource, Solver, SolverError};

/// Turn cap for a solo game
pub const MAX_TURNS: usize = 20;

/// A single guess step in the solution
#[derive(Debug, Clone, Copy)]
pub struct GuessStep {
    pub guess: Code,
    pub outcome: Outcome,
    pub source: MoveSource,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Entropy of the guess against the candidates it was played into
    pub entropy: f64,
    pub is_candidate: bool,
}

/// Result of solving a secret
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub secret: Code,
    pub success: bool,
    pub steps: Vec<GuessStep>,
}

impl SolveResult {
    #[must_use]
    pub fn turns(&self) -> usize {
        self.steps.len()
    }
}

/// Solve `secret` in a fresh game
///
/// Resets the solver first. Stops when the secret is guessed or after
/// `max_turns` turns.
///
/// # Errors
/// Returns `SolverError::InvalidGuess` if the secret does not match the
/// solver's digit count.
pub fn solve_secret(
    solver: &mut Solver,
    secret: Code,
    max_turns: usize,
) -> Result<SolveResult, SolverError> {
    check_length(solver, &secret)?;
    solver.reset();
    let mut steps = Vec::new();

    for _ in 0..max_turns {
        let candidates_before = solver.size();
        let suggestion = solver.suggest_move();
        let report = solver.evaluate(&suggestion.guess);
        let outcome = Outcome::judge(&suggestion.guess, &secret);
        let candidates_after = solver.update(&suggestion.guess, outcome)?;

        steps.push(GuessStep {
            guess: suggestion.guess,
            outcome,
            source: suggestion.source,
            candidates_before,
            candidates_after,
            entropy: report.metrics.entropy,
            is_candidate: report.is_candidate,
        });

        if outcome.is_solved(secret.len()) {
            return Ok(SolveResult {
                secret,
                success: true,
                steps,
            });
        }
    }

    Ok(SolveResult {
        secret,
        success: false,
        steps,
    })
}

/// Turn count and candidates left after each turn of one game
#[derive(Debug, Clone, Default)]
pub struct GameRun {
    pub solved: bool,
    pub remaining: Vec<usize>,
}

impl GameRun {
    #[must_use]
    pub fn turns(&self) -> usize {
        self.remaining.len()
    }
}

/// Play one solo game without recording per-step metrics
///
/// # Errors
/// Returns `SolverError::InvalidGuess` if the secret does not match the
/// solver's digit count.
pub fn play_out(
    solver: &mut Solver,
    secret: &Code,
    max_turns: usize,
) -> Result<GameRun, SolverError> {
    check_length(solver, secret)?;
    solver.reset();
    let mut run = GameRun::default();

    for _ in 0..max_turns {
        let guess = solver.suggest_move().guess;
        let outcome = Outcome::judge(&guess, secret);
        run.remaining.push(solver.update(&guess, outcome)?);

        if outcome.is_solved(secret.len()) {
            run.solved = true;
            break;
        }
    }

    Ok(run)
}

fn check_length(solver: &Solver, secret: &Code) -> Result<(), SolverError> {
    let expected = solver.config().digits;
    if secret.len() == expected {
        Ok(())
    } else {
        Err(SolverError::InvalidGuess(CodeError::WrongLength {
            expected,
            found: secret.len(),
        }))
    }
}
