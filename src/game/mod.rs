//! Game engine
//!
//! `Session` is the state machine, `Game` is the line-oriented loop that
//! feeds it and renders the grid.

mod config;
mod runner;
mod session;

pub use config::{DEFAULT_MAX_GUESSES, DEFAULT_STOP_WORD, DEFAULT_WORD_LENGTH, GameConfig};
pub use runner::Game;
pub use session::{Row, Session, Status, TurnOutcome};
