//! Hit and Blow Solver
//!
//! A Hit and Blow (Bulls and Cows) solver using information theory and game
//! theory. Secrets are sequences of distinct decimal digits; after each guess
//! the solver learns how many digits are in the right place (hits) and how
//! many are present elsewhere (blows).
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hit_and_blow::core::{Code, Outcome};
//! use hit_and_blow::solver::{Solver, SolverConfig};
//!
//! let secret = Code::parse("4721", 4).unwrap();
//! let mut solver = Solver::new(SolverConfig::new(4)).unwrap();
//!
//! while !solver.is_solved() {
//!     let guess = solver.suggest_move().guess;
//!     let outcome = Outcome::judge(&guess, &secret);
//!     println!("{guess} -> {outcome}");
//!     solver.update(&guess, outcome).unwrap();
//! }
//! assert_eq!(solver.sole_candidate(), Some(secret));
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Game rules and matches
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
