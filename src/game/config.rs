//! Game configuration

use crate::core::Scoring;
use crate::error::GameError;

/// Default number of letters in a word
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Default number of guesses before the game is lost
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Input that ends the game early, compared case-insensitively
pub const DEFAULT_STOP_WORD: &str = "STOP";

/// Configuration for a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_guesses: usize,
    pub stop_word: String,
    pub scoring: Scoring,
}

impl GameConfig {
    #[must_use]
    pub fn new(word_length: usize, max_guesses: usize) -> Self {
        Self {
            word_length,
            max_guesses,
            ..Self::default()
        }
    }

    /// Use a different duplicate-letter rule
    #[must_use]
    pub const fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Check that the limits describe a playable game
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfig` if the word length or guess limit is zero.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.word_length == 0 {
            return Err(GameError::InvalidConfig(
                "word length must be at least 1".to_string(),
            ));
        }
        if self.max_guesses == 0 {
            return Err(GameError::InvalidConfig(
                "maximum guesses must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_guesses: DEFAULT_MAX_GUESSES,
            stop_word: DEFAULT_STOP_WORD.to_string(),
            scoring: Scoring::Standard,
        }
    }
}
