//! Core domain types for Wordle
//!
//! Words and guess evaluation. Everything here is pure and has no I/O.

mod evaluation;
mod word;

pub use evaluation::{Evaluation, Mark, Scoring};
pub use word::{Word, WordError};
