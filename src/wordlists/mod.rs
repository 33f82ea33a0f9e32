//! Word sources for the solution word
//!
//! The game only needs one word per session; these types decide which one.
//! The embedded list is compiled into the binary by the build script.

pub mod daily;
mod embedded;
pub mod loader;
pub mod random;
pub mod remote;

pub use daily::DailySource;
pub use embedded::{SOLUTIONS, SOLUTIONS_COUNT};
pub use random::RandomSource;
pub use remote::{DEFAULT_WORDS_URL, RemoteSource};

use crate::core::Word;
use crate::error::SourceError;

/// Supplies the solution word for a session
pub trait WordSource {
    /// The uppercase solution word, exactly `length` letters long
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if no suitable word can be produced.
    fn current_word(&self, length: usize) -> Result<Word, SourceError>;
}

/// A word chosen up front, e.g. from the command line
#[derive(Debug, Clone)]
pub struct FixedSource(String);

impl FixedSource {
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self(word.into())
    }
}

impl WordSource for FixedSource {
    fn current_word(&self, length: usize) -> Result<Word, SourceError> {
        Ok(Word::new(&self.0, length)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;

    #[test]
    fn solutions_count_matches_const() {
        assert_eq!(SOLUTIONS.len(), SOLUTIONS_COUNT);
        assert!(SOLUTIONS_COUNT > 0);
    }

    #[test]
    fn solutions_are_valid_words() {
        for &word in SOLUTIONS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn solutions_have_no_duplicates() {
        let unique: std::collections::HashSet<_> = SOLUTIONS.iter().collect();
        assert_eq!(unique.len(), SOLUTIONS.len());
    }

    #[test]
    fn fixed_source_normalizes() {
        let word = FixedSource::new("beach").current_word(5).unwrap();
        assert_eq!(word.text(), "BEACH");
    }

    #[test]
    fn fixed_source_checks_length() {
        let result = FixedSource::new("beach").current_word(6);
        assert!(matches!(
            result,
            Err(SourceError::InvalidWord(WordError::InvalidLength { .. }))
        ));
    }
}
