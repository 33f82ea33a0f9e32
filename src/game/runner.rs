//! Interactive turn loop
//!
//! Drives a `Session` from a line-oriented input and writes prompts,
//! messages and the tile grid to an output. Both ends are generic so the
//! loop runs the same against stdin/stdout and in-memory buffers.

use super::{GameConfig, Session, Status, TurnOutcome};
use crate::core::WordError;
use crate::error::GameError;
use crate::output::TileRenderer;
use std::io::{BufRead, Write};

/// Reads guesses and reports feedback until the session ends
pub struct Game<R, W> {
    input: R,
    output: W,
    renderer: TileRenderer,
}

impl<R: BufRead, W: Write> Game<R, W> {
    pub const fn new(input: R, output: W, renderer: TileRenderer) -> Self {
        Self {
            input,
            output,
            renderer,
        }
    }

    /// Play `session` to the end and return its final status
    ///
    /// On a loss the solution is revealed before returning. Turning the
    /// status into a process exit code is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends early, or reading or writing fails.
    pub fn play(&mut self, session: &mut Session) -> Result<Status, GameError> {
        self.intro(session.config())?;

        while !session.status().is_over() {
            write!(
                self.output,
                "\nGuess ({}/{}): ",
                session.guesses_used() + 1,
                session.config().max_guesses
            )?;
            self.output.flush()?;

            let line = self.read_line()?;

            match session.submit(&line)? {
                TurnOutcome::Quit => {}
                TurnOutcome::Rejected { guess, reason } => self.reject(&guess, &reason)?,
                TurnOutcome::Accepted(status) => {
                    let config = session.config();
                    let grid = self.renderer.render_grid(
                        session.rows(),
                        config.max_guesses,
                        config.word_length,
                    );
                    self.output.write_all(grid.as_bytes())?;

                    if status == Status::Lost {
                        writeln!(self.output)?;
                        let reveal = self.renderer.render_solution(session.solution());
                        self.output.write_all(reveal.as_bytes())?;
                    }
                }
            }
        }

        self.output.flush()?;
        Ok(session.status())
    }

    /// Give back the output, mainly so tests can inspect it
    pub fn into_output(self) -> W {
        self.output
    }

    fn intro(&mut self, config: &GameConfig) -> Result<(), GameError> {
        writeln!(self.output, "Version: \t{}", env!("CARGO_PKG_VERSION"))?;
        writeln!(self.output, "Info: \t\t{}", env!("CARGO_PKG_REPOSITORY"))?;
        writeln!(
            self.output,
            "About: \t\tA CLI adaptation of Josh Wardle's Wordle (https://www.nytimes.com/games/wordle)\n"
        )?;
        writeln!(
            self.output,
            "Guess a {}-letter word within {} guesses...",
            config.word_length, config.max_guesses
        )?;
        Ok(())
    }

    fn reject(&mut self, guess: &str, reason: &WordError) -> Result<(), GameError> {
        match reason {
            WordError::InvalidLength { expected, .. } => writeln!(
                self.output,
                "{guess} is not a {expected}-letter word. Try again..."
            )?,
            WordError::InvalidCharacters => {
                writeln!(self.output, "{guess} is not a valid word. Try again...")?;
            }
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, GameError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line)
    }
}
