//! Entropy-based guess selection
//!
//! Implements Shannon entropy calculation for Hit/Blow outcome distributions.
//! This is the strategy used while many candidates remain.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy};
pub use selector::select_best_guess;
