//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_guess};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use simple::{MatchMode, play_match, run_simple};
pub use solve::{GameRun, GuessStep, MAX_TURNS, SolveResult, play_out, solve_secret};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
