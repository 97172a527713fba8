//! Two-player race for a shared secret
//!
//! Players alternate, starting with the first seat. An AI seat keeps a
//! [`Solver`] that learns from every guess in the match, its opponent's
//! included, since all feedback is public.

use super::logic::Game;
use crate::core::{Code, CodeError, Outcome};
use crate::solver::{ProgressCallback, Solver, SolverConfig, SolverError, Suggestion};
use std::fmt;

/// A seat at the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Player {
    Human(String),
    Ai,
}

impl Player {
    #[must_use]
    pub const fn is_ai(&self) -> bool {
        matches!(self, Self::Ai)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human(name) => write!(f, "{name}"),
            Self::Ai => write!(f, "AI"),
        }
    }
}

/// One played turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnRecord {
    /// 1-based turn number across both players
    pub turn: usize,
    /// Seat index of the player who guessed (0 or 1)
    pub seat: usize,
    pub guess: Code,
    pub outcome: Outcome,
    /// AI candidates left after this turn, if an AI is seated
    pub ai_candidates: Option<usize>,
}

/// Errors from driving a match
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The secret has already been found
    Finished,
    /// `ai_move` was called on a human's turn
    NotAiTurn,
    /// Guess does not fit the game
    InvalidGuess(CodeError),
    /// The AI seat's solver failed
    Solver(SolverError),
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished => write!(f, "The match is already over"),
            Self::NotAiTurn => write!(f, "It is not the AI's turn"),
            Self::InvalidGuess(err) => write!(f, "Invalid guess: {err}"),
            Self::Solver(err) => write!(f, "AI error: {err}"),
        }
    }
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGuess(err) => Some(err),
            Self::Solver(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SolverError> for MatchError {
    fn from(err: SolverError) -> Self {
        Self::Solver(err)
    }
}

/// A shared-secret race between two players
#[derive(Debug, Clone)]
pub struct Match {
    game: Game,
    players: [Player; 2],
    ai: Option<Solver>,
    history: Vec<TurnRecord>,
    winner: Option<usize>,
}

impl Match {
    /// Seat `players` around `game`
    ///
    /// A solver is created from `config` (with the game's digit count) if either
    /// seat is an AI.
    ///
    /// # Errors
    /// Returns `MatchError::Solver` if the solver cannot be built.
    pub fn new(game: Game, players: [Player; 2], config: SolverConfig) -> Result<Self, MatchError> {
        let ai = if players.iter().any(Player::is_ai) {
            let config = SolverConfig {
                digits: game.digits(),
                ..config
            };
            Some(Solver::new(config)?)
        } else {
            None
        };
        Ok(Self::with_solver(game, players, ai))
    }

    /// Seat `players` with an already built solver for the AI seat
    #[must_use]
    pub fn with_solver(game: Game, players: [Player; 2], ai: Option<Solver>) -> Self {
        Self {
            game,
            players,
            ai,
            history: Vec::new(),
            winner: None,
        }
    }

    /// Human against human
    #[must_use]
    pub fn pvp(game: Game) -> Self {
        let players = [
            Player::Human("Player 1".to_string()),
            Player::Human("Player 2".to_string()),
        ];
        Self::with_solver(game, players, None)
    }

    /// Human first, AI second
    ///
    /// # Errors
    /// Returns `MatchError::Solver` if the solver cannot be built.
    pub fn pvai(game: Game, config: SolverConfig) -> Result<Self, MatchError> {
        Self::new(game, [Player::Human("Player 1".to_string()), Player::Ai], config)
    }

    /// Seat index of the player to move
    #[must_use]
    pub fn current_seat(&self) -> usize {
        self.history.len() % 2
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_seat()]
    }

    /// Submit `guess` for the player to move
    ///
    /// # Errors
    /// - `MatchError::Finished` if someone already won
    /// - `MatchError::InvalidGuess` if the guess has the wrong length
    /// - `MatchError::Solver` if the AI cannot apply the feedback
    pub fn play_turn(&mut self, guess: Code) -> Result<TurnRecord, MatchError> {
        if self.winner.is_some() {
            return Err(MatchError::Finished);
        }
        if guess.len() != self.game.digits() {
            return Err(MatchError::InvalidGuess(CodeError::WrongLength {
                expected: self.game.digits(),
                found: guess.len(),
            }));
        }

        let seat = self.current_seat();
        let outcome = self.game.judge(&guess);
        let ai_candidates = match self.ai.as_mut() {
            Some(solver) => Some(solver.update(&guess, outcome)?),
            None => None,
        };

        let record = TurnRecord {
            turn: self.history.len() + 1,
            seat,
            guess,
            outcome,
            ai_candidates,
        };
        self.history.push(record);

        if outcome.is_solved(self.game.digits()) {
            log::info!("{} wins on turn {}", self.players[seat], record.turn);
            self.winner = Some(seat);
        }

        Ok(record)
    }

    /// The AI's choice for the current turn
    ///
    /// # Errors
    /// Returns `MatchError::NotAiTurn` unless an AI is to move, or
    /// `MatchError::Finished` after the match ended.
    pub fn ai_move(&self) -> Result<Suggestion, MatchError> {
        self.ai_solver().map(Solver::suggest_move)
    }

    /// Like [`Match::ai_move`], reporting search progress
    ///
    /// # Errors
    /// Same as [`Match::ai_move`].
    pub fn ai_move_with_progress(
        &self,
        callback: ProgressCallback<'_>,
    ) -> Result<Suggestion, MatchError> {
        self.ai_solver()
            .map(|solver| solver.suggest_move_with_progress(callback))
    }

    fn ai_solver(&self) -> Result<&Solver, MatchError> {
        if self.winner.is_some() {
            return Err(MatchError::Finished);
        }
        match (&self.ai, self.current_player()) {
            (Some(solver), Player::Ai) => Ok(solver),
            _ => Err(MatchError::NotAiTurn),
        }
    }

    /// Let the AI pick and play its guess
    ///
    /// # Errors
    /// Same as [`Match::ai_move`] and [`Match::play_turn`].
    pub fn play_ai_turn(&mut self) -> Result<TurnRecord, MatchError> {
        let suggestion = self.ai_move()?;
        self.play_turn(suggestion.guess)
    }

    /// The winner, once the secret is found
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|seat| &self.players[seat])
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn players(&self) -> &[Player; 2] {
        &self.players
    }

    #[inline]
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// The AI seat's solver, if any
    #[must_use]
    pub const fn solver(&self) -> Option<&Solver> {
        self.ai.as_ref()
    }
}
