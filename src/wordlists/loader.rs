//! Word list loading utilities
//!
//! Turns raw word list text into validated words of a given length.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Parse words of `length` letters from list text
///
/// Entries may be separated by newlines (`\n` or `\r\n`) or commas. Blank
/// lines, `#` comments and entries of any other length or with non-letters
/// are skipped.
///
/// # Examples
/// ```
/// use wordle_cli::wordlists::loader::parse_words;
///
/// let words = parse_words("crane\r\nslate,irate\nab\n", 5);
/// assert_eq!(words.len(), 3);
/// assert_eq!(words[0].text(), "CRANE");
/// ```
#[must_use]
pub fn parse_words(text: &str, length: usize) -> Vec<Word> {
    let mut skipped = 0usize;

    let words: Vec<Word> = text
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            Word::new(entry, length)
                .inspect_err(|_| skipped += 1)
                .ok()
        })
        .collect();

    debug!(kept = words.len(), skipped, length, "parsed word list");
    words
}

/// Load words of `length` letters from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_cli::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/solutions.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content, length))
}

/// Convert an embedded string slice to words of `length` letters
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::new(s, length).ok())
        .collect()
}
