//! Hit and Blow solving algorithms
//!
//! A [`Solver`] session keeps the candidate subset for one game and picks each
//! guess with an entropy search or a win-rate (minimax) search, depending on
//! how many candidates remain.

mod candidates;
mod config;
mod engine;
pub mod entropy;
mod error;
pub mod minimax;
pub mod search;
mod strategy;
mod universe;

pub use candidates::{CandidateSet, CandidateStore};
pub use config::{MIN_DIGITS, SolverConfig};
pub use engine::{GuessReport, Solver, Suggestion};
pub use error::SolverError;
pub use search::{Progress, ProgressCallback};
pub use strategy::{MoveSource, Strategy, StrategyMode};
pub use universe::{Universe, permutation_count};
