//! Interactive TUI: play against the solver in the terminal

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
