//! TUI application state and logic

use crate::game::{Game, Match, Player, TurnRecord};
use crate::solver::{MoveSource, Progress, Solver, SolverConfig, Suggestion};
use anyhow::{Result, anyhow};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

/// Application state
pub struct App {
    pub config: SolverConfig,
    pub game: Match,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub thinking: Thinking,
    pub last_ai_source: Option<MoveSource>,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub matches: usize,
    pub human_wins: usize,
    pub ai_wins: usize,
}

/// AI search progress, written from worker threads and read while drawing
#[derive(Debug, Default)]
pub struct Thinking {
    active: AtomicBool,
    examined: AtomicUsize,
    total: AtomicUsize,
}

impl Thinking {
    fn start(&self) {
        self.examined.store(0, Ordering::Relaxed);
        self.total.store(0, Ordering::Relaxed);
        self.active.store(true, Ordering::Relaxed);
    }

    fn record(&self, progress: Progress) {
        self.total.store(progress.total, Ordering::Relaxed);
        self.examined.fetch_max(progress.examined, Ordering::Relaxed);
    }

    fn finish(&self) {
        self.active.store(false, Ordering::Relaxed);
    }

    /// Current progress while the AI is searching
    #[must_use]
    pub fn snapshot(&self) -> Option<Progress> {
        self.active.load(Ordering::Relaxed).then(|| Progress {
            examined: self.examined.load(Ordering::Relaxed),
            total: self.total.load(Ordering::Relaxed),
        })
    }
}

impl App {
    /// Create the app with a fresh human-vs-AI match
    ///
    /// # Errors
    ///
    /// Returns an error if `config` has an unsupported digit count.
    pub fn new(config: SolverConfig, seed: Option<u64>) -> Result<Self> {
        let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let game = Match::pvai(Game::new(config.digits, &mut rng)?, config.clone())?;

        let mut app = Self {
            config,
            game,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            thinking: Thinking::default(),
            last_ai_source: None,
            should_quit: false,
            rng,
        };
        app.announce_match();
        Ok(app)
    }

    fn announce_match(&mut self) {
        let digits = self.config.digits;
        self.add_message(
            &format!("New match! Find the {digits}-digit secret before the AI does."),
            MessageStyle::Info,
        );
        self.add_message(
            "Type your guess and press Enter. The AI sees every result.",
            MessageStyle::Info,
        );
    }

    /// Start a new match with a new secret
    ///
    /// # Errors
    ///
    /// Returns an error if the AI cannot be rebuilt.
    pub fn new_match(&mut self) -> Result<()> {
        let game = Game::new(self.config.digits, &mut self.rng)?;
        self.game = Match::pvai(game, self.config.clone())?;
        self.input_buffer.clear();
        self.messages.clear();
        self.last_ai_source = None;
        self.announce_match();
        Ok(())
    }

    /// Whether the AI should move now
    #[must_use]
    pub fn ai_to_move(&self) -> bool {
        !self.game.is_over() && self.game.current_player().is_ai()
    }

    /// Add a typed digit to the input, ignoring anything that cannot fit
    pub fn push_digit(&mut self, c: char) {
        if c.is_ascii_digit() && self.input_buffer.len() < self.config.digits {
            self.input_buffer.push(c);
        }
    }

    /// Submit the typed guess for the human seat
    ///
    /// Returns true if the guess was played.
    pub fn submit_guess(&mut self) -> bool {
        if self.game.is_over() || self.ai_to_move() {
            return false;
        }

        let guess = match self.game.game().validate_guess(&self.input_buffer) {
            Ok(guess) => guess,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return false;
            }
        };

        match self.game.play_turn(guess) {
            Ok(record) => {
                self.input_buffer.clear();
                self.report_turn(&record);
                true
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                false
            }
        }
    }

    /// Play the AI's chosen guess
    pub fn apply_ai_move(&mut self, suggestion: Suggestion) {
        self.last_ai_source = Some(suggestion.source);
        match self.game.play_turn(suggestion.guess) {
            Ok(record) => self.report_turn(&record),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn report_turn(&mut self, record: &TurnRecord) {
        let player = self.game.players()[record.seat].clone();
        self.add_message(
            &format!("{player}: {} -> {}", record.guess, record.outcome),
            MessageStyle::Info,
        );

        if let Some(winner) = self.game.winner().cloned() {
            self.stats.matches += 1;
            if winner.is_ai() {
                self.stats.ai_wins += 1;
                self.add_message(
                    &format!("The AI wins! The secret was {}.", self.game.game().secret()),
                    MessageStyle::Error,
                );
            } else {
                self.stats.human_wins += 1;
                self.add_message(
                    &format!("You win in {} turns!", record.turn),
                    MessageStyle::Success,
                );
            }
            self.add_message("Press 'n' for a new match or 'q' to quit.", MessageStyle::Info);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }

    /// Candidates the AI still considers
    #[must_use]
    pub fn ai_candidates(&self) -> usize {
        self.game.solver().map_or(0, Solver::size)
    }

    /// Name of the human seat
    #[must_use]
    pub fn human(&self) -> &Player {
        &self.game.players()[0]
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                KeyCode::Char('n') => app.new_match()?,
                KeyCode::Char(c) => app.push_digit(c),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => {
                    if app.submit_guess() && app.ai_to_move() {
                        think(terminal, &mut app)?;
                    }
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Run the AI search on a worker thread, redrawing its progress meanwhile
fn think<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    app.thinking.start();

    let view: &App = app;
    let result = thread::scope(|scope| -> Result<Suggestion> {
        let worker = scope.spawn(move || {
            let callback = |progress: Progress| view.thinking.record(progress);
            view.game.ai_move_with_progress(&callback)
        });

        while !worker.is_finished() {
            terminal.draw(|f| super::rendering::ui(f, view))?;
            thread::sleep(Duration::from_millis(50));
        }

        worker
            .join()
            .map_err(|_| anyhow!("AI search panicked"))?
            .map_err(anyhow::Error::from)
    });

    app.thinking.finish();
    app.apply_ai_move(result?);
    Ok(())
}
