//! Win-rate (minimax) guess selection
//!
//! Exhaustive scoring used once few candidates remain: every guess in the
//! universe is scored by the chance of winning now plus the chance the opponent
//! fails on the following turn.

mod calculator;
mod selector;

pub use calculator::{calculate_score, eligible_score_units, opponent_win_rate, score_units};
pub use selector::select_best_guess;
