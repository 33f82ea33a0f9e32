//! Random word from the embedded list or a user file

use super::loader::{parse_words, words_from_slice};
use super::{SOLUTIONS, WordSource};
use crate::core::Word;
use crate::error::SourceError;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fs;
use std::path::Path;
use tracing::info;

/// Picks a random word from a list held in memory
#[derive(Debug, Clone)]
pub struct RandomSource {
    entries: Entries,
    origin: String,
}

#[derive(Debug, Clone)]
enum Entries {
    Embedded(&'static [&'static str]),
    Text(String),
}

impl RandomSource {
    /// Random word from the embedded solution list
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            entries: Entries::Embedded(SOLUTIONS),
            origin: "the embedded list".to_string(),
        }
    }

    /// Random word from a word list file (one per line, or comma separated)
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Io` if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Ok(Self::from_text(text, path.display().to_string()))
    }

    /// Random word from list text already in memory
    #[must_use]
    pub fn from_text(text: String, origin: impl Into<String>) -> Self {
        Self {
            entries: Entries::Text(text),
            origin: origin.into(),
        }
    }

    /// All usable words of `length` letters
    #[must_use]
    pub fn candidates(&self, length: usize) -> Vec<Word> {
        match &self.entries {
            Entries::Embedded(slice) => words_from_slice(slice, length),
            Entries::Text(text) => parse_words(text, length),
        }
    }

    /// Pick a word using the given random number generator
    ///
    /// # Errors
    ///
    /// Returns `SourceError::NoCandidates` if no word has `length` letters.
    pub fn pick<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Result<Word, SourceError> {
        let candidates = self.candidates(length);
        let word = candidates
            .choose(rng)
            .cloned()
            .ok_or_else(|| SourceError::NoCandidates {
                length,
                origin: self.origin.clone(),
            })?;

        info!(origin = %self.origin, candidates = candidates.len(), "picked random word");
        Ok(word)
    }
}

impl WordSource for RandomSource {
    fn current_word(&self, length: usize) -> Result<Word, SourceError> {
        self.pick(length, &mut rand::rng())
    }
}
