//! Game logic around the solver
//!
//! `Game` holds the secret and judges guesses against it. `Match` seats two
//! players, human or AI, who race to find the same secret.

mod logic;
mod versus;

pub use logic::Game;
pub use versus::{Match, MatchError, Player, TurnRecord};
