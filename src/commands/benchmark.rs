//! Benchmark command
//!
//! Tests solver performance across random secrets.

use super::solve::{MAX_TURNS, play_out};
use crate::core::Code;
use crate::solver::{Solver, SolverError};
use indicatif::ProgressBar;
use rand::Rng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub games: usize,
    pub total_turns: usize,
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    pub failed: usize,
    pub distribution: BTreeMap<usize, usize>,
    /// Average candidates left after turn `i + 1`, over games that played it
    pub average_remaining: Vec<f64>,
    pub duration: Duration,
}

impl BenchmarkResult {
    #[must_use]
    pub fn seconds_per_game(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.duration.as_secs_f64() / self.games as f64
        }
    }
}

/// Run `games` solo games against random secrets drawn from `rng`
///
/// # Errors
///
/// Returns `SolverError` if a game cannot be played, which only happens when
/// the solver receives inconsistent feedback.
pub fn run_benchmark<R: Rng + ?Sized>(
    solver: &mut Solver,
    games: usize,
    rng: &mut R,
    progress: &ProgressBar,
) -> Result<BenchmarkResult, SolverError> {
    let digits = solver.config().digits;
    let start = Instant::now();
    let mut total_turns = 0;
    let mut min_turns = usize::MAX;
    let mut max_turns = 0;
    let mut failed = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut remaining_sums: Vec<(usize, usize)> = Vec::new();

    for _ in 0..games {
        let secret = Code::random(digits, rng)?;
        let run = play_out(solver, &secret, MAX_TURNS)?;

        for (turn, &remaining) in run.remaining.iter().enumerate() {
            if remaining_sums.len() <= turn {
                remaining_sums.push((0, 0));
            }
            remaining_sums[turn].0 += remaining;
            remaining_sums[turn].1 += 1;
        }

        if run.solved {
            let turns = run.turns();
            total_turns += turns;
            min_turns = min_turns.min(turns);
            max_turns = max_turns.max(turns);
            *distribution.entry(turns).or_insert(0) += 1;
        } else {
            failed += 1;
        }

        progress.inc(1);
    }

    let solved = games - failed;
    let average_remaining = remaining_sums
        .iter()
        .map(|&(sum, count)| sum as f64 / count as f64)
        .collect();

    Ok(BenchmarkResult {
        games,
        total_turns,
        average_turns: if solved == 0 {
            0.0
        } else {
            total_turns as f64 / solved as f64
        },
        min_turns: if solved == 0 { 0 } else { min_turns },
        max_turns,
        failed,
        distribution,
        average_remaining,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn run(digits: usize, games: usize, seed: u64) -> BenchmarkResult {
        let mut solver = Solver::new(SolverConfig::new(digits)).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        run_benchmark(&mut solver, games, &mut rng, &ProgressBar::hidden()).unwrap()
    }

    #[test]
    fn benchmark_runs() {
        let result = run(3, 8, 1);

        assert_eq!(result.games, 8);
        assert_eq!(result.failed, 0);
        assert!(result.average_turns >= 1.0);
        assert!(result.min_turns >= 1);
        assert!(result.max_turns <= MAX_TURNS);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let result = run(3, 8, 2);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.games);
        let turns_sum: usize = result.distribution.iter().map(|(t, n)| t * n).sum();
        assert_eq!(turns_sum, result.total_turns);
    }

    #[test]
    fn remaining_candidates_shrink_per_turn() {
        let result = run(3, 6, 3);

        assert_eq!(result.average_remaining.len(), result.max_turns);
        assert!(result.average_remaining.iter().all(|&r| r >= 1.0));
        assert!((result.average_remaining.last().unwrap() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_is_reproducible() {
        let a = run(3, 5, 11);
        let b = run(3, 5, 11);
        assert_eq!(a.distribution, b.distribution);
        assert_eq!(a.average_remaining, b.average_remaining);
    }

    #[test]
    fn benchmark_no_games() {
        let result = run(2, 0, 0);

        assert_eq!(result.games, 0);
        assert_eq!(result.total_turns, 0);
        assert_eq!(result.min_turns, 0);
        assert!(result.average_remaining.is_empty());
        assert!(result.seconds_per_game().abs() < f64::EPSILON);
    }
}
