//! Test all secrets - comprehensive solver evaluation
//!
//! Runs the solver against every code of the universe and generates statistics.

use super::solve::{MAX_TURNS, play_out};
use crate::core::Code;
use crate::solver::{Solver, SolverError};
use colored::Colorize;
use indicatif::ProgressBar;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Statistics from testing all secrets
#[derive(Debug, Clone)]
pub struct TestAllStatistics {
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: usize,
    pub turn_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_turns: f64,
    pub max_turns: usize,
    pub min_turns: usize,
    /// Secrets that took the most turns, worst first
    pub hardest: Vec<(Code, usize)>,
}

/// Run the solver on every secret in universe order (or the first `limit`)
///
/// # Errors
///
/// Returns `SolverError` if a game cannot be played.
pub fn run_test_all(
    solver: &mut Solver,
    limit: Option<usize>,
    progress: &ProgressBar,
) -> Result<TestAllStatistics, SolverError> {
    let secrets: Vec<Code> = solver
        .universe()
        .codes()
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .copied()
        .collect();

    progress.set_length(secrets.len() as u64);

    let start = Instant::now();
    let mut results: Vec<(Code, usize)> = Vec::with_capacity(secrets.len());
    let mut turn_distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failed = 0;

    for (idx, secret) in secrets.iter().enumerate() {
        let run = play_out(solver, secret, MAX_TURNS)?;

        if run.solved {
            *turn_distribution.entry(run.turns()).or_insert(0) += 1;
            results.push((*secret, run.turns()));
        } else {
            failed += 1;
        }

        if idx % 10 == 0 && !results.is_empty() {
            let avg = results.iter().map(|(_, t)| t).sum::<usize>() as f64 / results.len() as f64;
            progress.set_message(format!("Avg: {avg:.2}"));
        }
        progress.inc(1);
    }

    progress.finish_with_message("Complete!");

    let solved = results.len();
    let total_turns: usize = results.iter().map(|(_, t)| t).sum();

    let mut hardest = results.clone();
    hardest.sort_by_key(|&(_, turns)| std::cmp::Reverse(turns));
    hardest.truncate(10);

    Ok(TestAllStatistics {
        total_secrets: secrets.len(),
        solved,
        failed,
        turn_distribution,
        total_time: start.elapsed(),
        average_turns: if solved > 0 {
            total_turns as f64 / solved as f64
        } else {
            0.0
        },
        max_turns: results.iter().map(|&(_, t)| t).max().unwrap_or(0),
        min_turns: results.iter().map(|&(_, t)| t).min().unwrap_or(0),
        hardest,
    })
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total secrets tested: {}", stats.total_secrets);
    if stats.total_secrets > 0 {
        println!(
            "  Successfully solved:  {} {}",
            stats.solved,
            format!(
                "({:.1}%)",
                stats.solved as f64 / stats.total_secrets as f64 * 100.0
            )
            .green()
        );
    }
    if stats.failed > 0 {
        println!("  Failed to solve:      {}", stats.failed.to_string().red());
    }
    println!(
        "  Average turns:        {}",
        format!("{:.3}", stats.average_turns).bright_yellow().bold()
    );
    println!("  Best / worst:         {} / {}", stats.min_turns, stats.max_turns);
    println!(
        "  Total time:           {:.2}s",
        stats.total_time.as_secs_f64()
    );
    if stats.total_secrets > 0 {
        println!(
            "  Time per secret:      {:.1}ms",
            stats.total_time.as_millis() as f64 / stats.total_secrets as f64
        );
    }

    println!("\n📈 {}", "Turn Distribution".bright_cyan().bold());
    crate::output::print_distribution(&stats.turn_distribution, stats.solved);

    println!("\n🧮 Information Theory Metrics");
    let total_bits = (stats.total_secrets as f64).log2();
    let bits_per_turn = if stats.average_turns > 0.0 {
        total_bits / stats.average_turns
    } else {
        0.0
    };
    println!("  Total information:    {total_bits:.2} bits");
    println!("  Bits per turn:        {bits_per_turn:.2} bits");

    if !stats.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (secret, turns) in stats.hardest.iter().take(5) {
            println!("  {} ({turns} turns)", secret.to_string().yellow());
        }
    }
}
