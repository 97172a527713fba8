//! Simple line-mode match
//!
//! Text-based shared-secret race without the TUI

use crate::core::Code;
use crate::game::{Game, Match, MatchError, Player};
use crate::output::formatters::outcome_pegs;
use crate::solver::SolverConfig;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Who sits in the second seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MatchMode {
    /// Two humans at one keyboard
    Pvp,
    /// Human against the solver
    #[default]
    Pvai,
}

/// Run a line-mode match on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the AI
/// cannot be built for `config`.
pub fn run_simple<R: Rng + ?Sized>(
    mode: MatchMode,
    config: SolverConfig,
    rng: &mut R,
) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_match(mode, config, rng, &mut stdin.lock(), &mut stdout.lock())
}

/// Play one match reading guesses from `input`
///
/// Returns when someone wins, on `quit`, or at end of input.
///
/// # Errors
///
/// Returns an error on I/O failure or if the AI cannot be built.
pub fn play_match<R, I, O>(
    mode: MatchMode,
    config: SolverConfig,
    rng: &mut R,
    input: &mut I,
    out: &mut O,
) -> Result<()>
where
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    let digits = config.digits;
    let game = Game::new(digits, rng)?;
    let mut game = match mode {
        MatchMode::Pvp => Match::pvp(game),
        MatchMode::Pvai => Match::pvai(game, config)?,
    };

    writeln!(out, "\n=== Hit and Blow ===")?;
    writeln!(
        out,
        "Race to find the shared {digits}-digit secret (distinct digits)."
    )?;
    writeln!(
        out,
        "{} vs {}. Type 'quit' to give up.",
        game.players()[0],
        game.players()[1]
    )?;

    while !game.is_over() {
        let turn = game.history().len() + 1;
        let player = game.current_player().clone();
        writeln!(out, "\n--- Turn {turn} ({player}) ---")?;

        let guess = if player.is_ai() {
            write!(out, "AI thinking...")?;
            out.flush()?;
            let start = Instant::now();
            let suggestion = game.ai_move()?;
            writeln!(
                out,
                " done ({:.2}s, {})",
                start.elapsed().as_secs_f64(),
                suggestion.source
            )?;
            writeln!(out, "[{player}] guess: {}", suggestion.guess)?;
            suggestion.guess
        } else {
            let Some(guess) = read_guess(&game, &player, input, out)? else {
                writeln!(out, "\nMatch abandoned. The secret was {}.", game.game().secret())?;
                return Ok(());
            };
            guess
        };

        let record = match game.play_turn(guess) {
            Ok(record) => record,
            Err(MatchError::Finished) => break,
            Err(err) => return Err(err.into()),
        };

        writeln!(
            out,
            "Result: {} -> {} [ Hit: {}, Blow: {} ]",
            record.guess,
            outcome_pegs(record.outcome, digits),
            record.outcome.hit(),
            record.outcome.blow()
        )?;
        if let (Some(remaining), false) = (record.ai_candidates, player.is_ai()) {
            writeln!(
                out,
                "  (the AI saw this result too: {remaining} candidates left)"
            )?;
        }
    }

    if let Some(winner) = game.winner() {
        writeln!(out, "\n{}", "=".repeat(40))?;
        writeln!(out, "{}", format!("Winner: {winner}!").green().bold())?;
        writeln!(out, "Secret: {}", game.game().secret())?;
        writeln!(out, "{}", "=".repeat(40))?;
    }

    Ok(())
}

/// Prompt until a valid guess is entered; `None` on quit or end of input
fn read_guess<I: BufRead, O: Write>(
    game: &Match,
    player: &Player,
    input: &mut I,
    out: &mut O,
) -> Result<Option<Code>> {
    loop {
        write!(out, "[{player}] Enter your guess (e.g. {}) > ", example(game))?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.trim() {
            "quit" | "q" | "exit" => return Ok(None),
            text => match game.game().validate_guess(text) {
                Ok(guess) => return Ok(Some(guess)),
                Err(err) => writeln!(out, "Error: {err}")?,
            },
        }
    }
}

fn example(game: &Match) -> String {
    (0..game.game().digits()).map(|d| char::from(b'0' + d as u8)).collect()
}
