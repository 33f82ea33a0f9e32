//! Game session state machine
//!
//! A `Session` owns the solution and every evaluated guess. `submit` is the
//! only way to change it, one line of player input at a time.

use super::GameConfig;
use crate::core::{Evaluation, Word, WordError};
use crate::error::GameError;
use tracing::{debug, info};

/// Where the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
    Quit,
}

impl Status {
    /// True once the session can no longer accept guesses
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// An accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub guess: Word,
    pub evaluation: Evaluation,
}

/// What a single call to `Session::submit` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The stop word was entered
    Quit,
    /// The input was not a usable guess; no guess was consumed
    Rejected { guess: String, reason: WordError },
    /// The guess was recorded; carries the status after it
    Accepted(Status),
}

/// A single game from first guess to win, loss or quit
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    solution: Word,
    rows: Vec<Row>,
    status: Status,
}

impl Session {
    /// Start a new session
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the solution length
    /// does not match `config.word_length`.
    pub fn new(solution: Word, config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;

        if solution.len() != config.word_length {
            return Err(GameError::InvalidSolution(WordError::InvalidLength {
                expected: config.word_length,
                actual: solution.len(),
            }));
        }

        Ok(Self {
            rows: Vec::with_capacity(config.max_guesses),
            config,
            solution,
            status: Status::InProgress,
        })
    }

    /// Process one line of player input
    ///
    /// Precedence: stop word, then word validation, then the guess is
    /// recorded and checked for a win, then for running out of guesses.
    ///
    /// # Errors
    ///
    /// Returns `GameError::SessionFinished` if the session is already over.
    pub fn submit(&mut self, input: &str) -> Result<TurnOutcome, GameError> {
        if self.status.is_over() {
            return Err(GameError::SessionFinished);
        }

        let normalized = input.trim().to_uppercase();

        if normalized == self.config.stop_word.to_uppercase() {
            info!(guesses = self.rows.len(), "player quit");
            self.status = Status::Quit;
            return Ok(TurnOutcome::Quit);
        }

        let guess = match Word::new(&normalized, self.config.word_length) {
            Ok(guess) => guess,
            Err(reason) => {
                debug!(guess = %normalized, %reason, "guess rejected");
                return Ok(TurnOutcome::Rejected {
                    guess: normalized,
                    reason,
                });
            }
        };

        let evaluation = Evaluation::calculate(&guess, &self.solution, self.config.scoring);
        debug!(
            turn = self.rows.len() + 1,
            guess = %guess,
            feedback = %evaluation,
            "guess evaluated"
        );

        let won = guess == self.solution;
        self.rows.push(Row { guess, evaluation });

        if won {
            self.status = Status::Won;
            info!(guesses = self.rows.len(), "solution found");
        } else if self.rows.len() >= self.config.max_guesses {
            self.status = Status::Lost;
            info!(solution = %self.solution, "out of guesses");
        }

        Ok(TurnOutcome::Accepted(self.status))
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    /// Accepted guesses, oldest first
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of guesses consumed so far
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.config.max_guesses.saturating_sub(self.rows.len())
    }
}
