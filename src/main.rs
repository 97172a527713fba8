//! Hit and Blow Solver - CLI
//!
//! Hit and Blow solver with TUI and CLI modes using information theory and game theory.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use hit_and_blow::{
    commands::{
        MAX_TURNS, MatchMode, analyze_guess, print_test_all_statistics, run_benchmark, run_simple,
        run_test_all, solve_secret,
    },
    core::Code,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{Solver, SolverConfig, StrategyMode},
};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "hit_and_blow",
    about = "Hit and Blow solver using adaptive entropy/minimax strategies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of digits in the secret (1-10)
    #[arg(short, long, global = true, default_value_t = 4)]
    digits: usize,

    /// Strategy: adaptive (default), entropy, minimax
    #[arg(short, long, global = true, default_value = "adaptive")]
    strategy: String,

    /// Candidates at or below this count are searched with minimax
    #[arg(long, global = true, default_value_t = 50)]
    minimax_threshold: usize,

    /// Candidates at or below this count let entropy search every code
    #[arg(long, global = true, default_value_t = 200)]
    full_search_threshold: usize,

    /// Seed for secret generation (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

impl Cli {
    fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.digits)
            .with_mode(StrategyMode::from_name(&self.strategy))
            .with_minimax_threshold(self.minimax_threshold)
            .with_full_search_threshold(self.full_search_threshold)
    }

    fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default - play against the AI)
    Play,

    /// Simple CLI mode (line-based match without TUI)
    Simple {
        /// Second seat: another human (pvp) or the AI (pvai)
        #[arg(short, long, value_enum, default_value_t = MatchMode::Pvai)]
        mode: MatchMode,
    },

    /// Watch the solver crack a given secret
    Solve {
        /// The secret to find
        secret: String,

        /// Show candidate counts, strategy and entropy for each turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze a guess against every possible secret
    Analyze {
        /// The guess to analyze
        guess: String,
    },

    /// Benchmark the solver on random secrets
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value_t = 20)]
        count: usize,
    },

    /// Test the solver against every possible secret
    TestAll {
        /// Limit the number of secrets tested (in universe order)
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    if !matches!(command, Commands::Play) {
        env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    }

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Simple { mode } => run_simple(mode, cli.solver_config(), &mut cli.rng()),
        Commands::Solve { secret, verbose } => run_solve_command(&cli, &secret, verbose),
        Commands::Analyze { guess } => run_analyze_command(&cli, &guess),
        Commands::Benchmark { count } => run_benchmark_command(&cli, count),
        Commands::TestAll { limit } => run_test_all_command(&cli, limit),
    }
}

fn progress_bar(len: usize) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );
    Ok(pb)
}

fn run_solve_command(cli: &Cli, secret: &str, verbose: bool) -> Result<()> {
    let secret = Code::parse(secret, cli.digits)?;
    let mut solver = Solver::new(cli.solver_config())?;

    let result = solve_secret(&mut solver, secret, MAX_TURNS)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(cli: &Cli, guess: &str) -> Result<()> {
    let solver = Solver::new(cli.solver_config())?;
    let result = analyze_guess(guess, &solver)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(cli: &Cli, count: usize) -> Result<()> {
    let mut solver = Solver::new(cli.solver_config())?;
    let mut rng = cli.rng();

    println!(
        "Running benchmark on {count} random {}-digit secrets ({} strategy)...",
        cli.digits,
        solver.config().mode
    );

    let pb = progress_bar(count)?;
    let result = run_benchmark(&mut solver, count, &mut rng, &pb)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_test_all_command(cli: &Cli, limit: Option<usize>) -> Result<()> {
    let mut solver = Solver::new(cli.solver_config())?;

    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Hit and Blow Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nTesting against {} possible secrets",
        limit.map_or(solver.universe().len(), |n| n.min(solver.universe().len()))
    );
    println!("Strategy: {}", solver.config().mode);
    println!();

    let pb = progress_bar(solver.universe().len())?;
    let stats = run_test_all(&mut solver, limit, &pb)?;
    print_test_all_statistics(&stats);
    Ok(())
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use hit_and_blow::interactive::{App, run_tui};

    let app = App::new(cli.solver_config(), cli.seed)?;
    run_tui(app)
}
