//! Display functions for command results

use super::formatters::{entropy_bar, outcome_pegs};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;
use std::collections::BTreeMap;

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let digits = result.secret.len();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {} {}",
            turn,
            step.guess.to_string().bold(),
            outcome_pegs(step.outcome, digits),
            step.outcome.to_string().bright_white()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Strategy:   {}", step.source);
            if step.candidates_before > 1 {
                println!("  Entropy:    {:.3} bits", step.entropy);
            }
            if !step.is_candidate {
                println!("  {}", "(not a candidate: cannot be the secret)".bright_black());
            }

            if step.candidates_after > 0 {
                let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({:.1}x reduction)",
                    ratio.log2(),
                    ratio
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} turns!", result.turns())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} turns", result.turns())
                .red()
                .bold()
        );
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    let metrics = &result.report.metrics;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(metrics.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} possible secrets:", result.total_candidates);
    println!(
        "   Entropy:       [{}] {}",
        bar.green(),
        format!("{:.3} bits", metrics.entropy).bright_yellow()
    );
    println!(
        "   Info gain:     {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:      {:.1} candidates remain",
        metrics.expected_remaining
    );
    println!(
        "   Worst case:    {} candidates",
        metrics.max_partition
    );
    println!("   Outcomes:      {}", metrics.outcomes);
    println!(
        "   Win-rate:      {:.3}",
        result.report.minimax_score
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!(
        "   Average turns:    {}",
        format!("{:.2}", result.average_turns)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_turns).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_turns).yellow()
    );
    if result.failed > 0 {
        println!("   Unsolved:         {}", result.failed.to_string().red());
    }
    println!(
        "   Time taken:       {:.2}s ({:.2}s/game)",
        result.duration.as_secs_f64(),
        result.seconds_per_game()
    );

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    print_distribution(&result.distribution, result.games - result.failed);

    println!("\n📉 {}", "Candidates after each turn:".bright_cyan().bold());
    for (i, remaining) in result.average_remaining.iter().enumerate() {
        println!("   Turn {:2}: {remaining:8.1} remaining", i + 1);
    }
}

/// Print a turn-count histogram
pub fn print_distribution(distribution: &BTreeMap<usize, usize>, total: usize) {
    if total == 0 {
        return;
    }
    let max_count = distribution.values().copied().max().unwrap_or(1).max(1);

    for (&turns, &count) in distribution {
        let pct = count as f64 / total as f64 * 100.0;
        let bar_width = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {turns:2}: {bar} {count:4} ({pct:5.1}%)");
    }
}
