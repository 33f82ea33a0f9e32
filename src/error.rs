//! Error types for the game engine and word sources

use crate::core::WordError;
use std::io;
use thiserror::Error;

/// Errors that end a game session
#[derive(Debug, Error)]
pub enum GameError {
    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input stream ended before the game finished
    #[error("input closed before the game finished")]
    InputClosed,

    /// The solution does not fit the configured word length
    #[error("invalid solution word: {0}")]
    InvalidSolution(WordError),

    /// Word length or guess limit out of range
    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),

    /// A guess was submitted after the session ended
    #[error("the game is already over")]
    SessionFinished,
}

/// Errors raised while choosing the solution word
#[derive(Debug, Error)]
pub enum SourceError {
    /// Downloading the remote word list failed
    #[error("failed to fetch word list: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Reading a local word list failed
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),

    /// The list holds no usable word of the requested length
    #[error("no {length}-letter words available in {origin}")]
    NoCandidates { length: usize, origin: String },

    /// A word given directly was not usable
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),
}
