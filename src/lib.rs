//! Terminal Wordle
//!
//! Guess a hidden word in six tries; each guess is answered with colored
//! tiles marking letters that are correct, present elsewhere, or absent.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_cli::core::Word;
//! use wordle_cli::game::{GameConfig, Session, Status, TurnOutcome};
//!
//! let solution = Word::new("beach", 5).unwrap();
//! let mut session = Session::new(solution, GameConfig::default()).unwrap();
//!
//! let outcome = session.submit("beach").unwrap();
//! assert_eq!(outcome, TurnOutcome::Accepted(Status::Won));
//! println!("{}", session.rows()[0].evaluation.to_emoji());
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Session state machine and turn loop
pub mod game;

// Terminal output formatting
pub mod output;

// Solution word sources
pub mod wordlists;
