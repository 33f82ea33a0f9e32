//! Guess evaluation: per-letter feedback marks
//!
//! Each position of a guess gets one of three marks:
//! - Absent (gray): letter not in the solution
//! - Present (yellow): letter in the solution, wrong position
//! - Correct (green): letter in the correct position

use super::Word;
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent,
    Present,
    Correct,
}

impl Mark {
    /// Compact text form: `G`, `Y` or `-`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Emoji square: 🟩, 🟨 or ⬜
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Rule used to assign marks when letters repeat
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Scoring {
    /// Exact matches first, then present marks limited by how often the
    /// letter occurs in the solution
    #[default]
    Standard,
    /// Single pass that never consumes solution letters, so a repeated guess
    /// letter can be marked present more times than it occurs
    Classic,
}

/// Feedback for a whole guess, one mark per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Evaluation(Vec<Mark>);

impl Evaluation {
    /// Calculate the feedback when `guess` is played against `solution`
    ///
    /// Both words must have the same length; `Session` guarantees this for
    /// every accepted guess.
    ///
    /// # Algorithm
    /// `Scoring::Standard`:
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass: mark present letters while the pool still holds that letter
    ///
    /// `Scoring::Classic` scans the whole solution for every guess letter: a
    /// positional match marks correct and stops the scan, any other match
    /// marks present.
    ///
    /// # Examples
    /// ```
    /// use wordle_cli::core::{Evaluation, Scoring, Word};
    ///
    /// let guess = Word::new("burst", 5).unwrap();
    /// let solution = Word::new("beats", 5).unwrap();
    /// let evaluation = Evaluation::calculate(&guess, &solution, Scoring::Standard);
    ///
    /// assert_eq!(evaluation.to_string(), "G--YY");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word, scoring: Scoring) -> Self {
        debug_assert_eq!(guess.len(), solution.len(), "guess and solution lengths differ");

        match scoring {
            Scoring::Standard => Self::calculate_standard(guess, solution),
            Scoring::Classic => Self::calculate_classic(guess, solution),
        }
    }

    fn calculate_standard(guess: &Word, solution: &Word) -> Self {
        let mut marks = vec![Mark::Absent; guess.len()];
        let mut available = solution.letter_counts();

        // First pass: exact position matches
        for (i, (&g, &s)) in guess.letters().iter().zip(solution.letters()).enumerate() {
            if g == s {
                marks[i] = Mark::Correct;
                if let Some(count) = available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but an unconsumed occurrence remains
        for (i, &g) in guess.letters().iter().enumerate() {
            if marks[i] == Mark::Absent
                && let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                marks[i] = Mark::Present;
                *count -= 1;
            }
        }

        Self(marks)
    }

    fn calculate_classic(guess: &Word, solution: &Word) -> Self {
        let mut marks = vec![Mark::Absent; guess.len()];

        for (j, &g) in guess.letters().iter().enumerate() {
            for (k, &s) in solution.letters().iter().enumerate() {
                if g == s {
                    if j == k {
                        marks[j] = Mark::Correct;
                        break;
                    }
                    marks[j] = Mark::Present;
                }
            }
        }

        Self(marks)
    }

    /// An evaluation with every position marked correct
    #[must_use]
    pub fn solved(length: usize) -> Self {
        Self(vec![Mark::Correct; length])
    }

    /// The marks, in guess order
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == Mark::Correct)
    }

    /// Count the positions carrying `mark`
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

/// Parse an evaluation from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
///
/// Accepts:
/// - 'G'/'g'/🟩 for correct
/// - 'Y'/'y'/🟨 for present
/// - '-'/'_'/⬜ for absent
impl FromStr for Evaluation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(Mark::from_symbol)
            .collect::<Option<Vec<_>>>()
            .filter(|marks| !marks.is_empty())
            .map(Self)
            .ok_or_else(|| format!("Invalid evaluation string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text, text.len()).unwrap()
    }

    fn eval(guess: &str, solution: &str, scoring: Scoring) -> Evaluation {
        Evaluation::calculate(&word(guess), &word(solution), scoring)
    }

    fn marks(s: &str) -> Evaluation {
        s.parse().unwrap()
    }

    #[test]
    fn evaluation_all_correct() {
        for scoring in [Scoring::Standard, Scoring::Classic] {
            for w in ["crane", "slate", "zzzzz", "aaaaa", "beach"] {
                let e = eval(w, w, scoring);
                assert!(e.is_solved());
                assert_eq!(e, Evaluation::solved(5));
            }
        }
    }

    #[test]
    fn evaluation_disjoint_letters_all_absent() {
        for scoring in [Scoring::Standard, Scoring::Classic] {
            let e = eval("bochy", "later", scoring);
            assert_eq!(e, marks("-----"));
            assert_eq!(e.count(Mark::Absent), 5);
        }
    }

    #[test]
    fn evaluation_beats_burst() {
        let expected = vec![
            Mark::Correct,
            Mark::Absent,
            Mark::Absent,
            Mark::Present,
            Mark::Present,
        ];
        assert_eq!(eval("burst", "beats", Scoring::Standard).marks(), expected);
        assert_eq!(eval("burst", "beats", Scoring::Classic).marks(), expected);
    }

    #[test]
    fn evaluation_booty_raise() {
        assert_eq!(eval("raise", "booty", Scoring::Standard), marks("-----"));
        assert_eq!(eval("raise", "booty", Scoring::Classic), marks("-----"));
    }

    #[test]
    fn evaluation_standard_consumes_repeated_letters() {
        // Only one E in ABCDE: the second E in SPEED gets nothing
        assert_eq!(eval("speed", "abcde", Scoring::Standard), marks("--Y-Y"));
    }

    #[test]
    fn evaluation_classic_overcounts_repeated_letters() {
        assert_eq!(eval("speed", "abcde", Scoring::Classic), marks("--YYY"));
    }

    #[test]
    fn evaluation_standard_green_takes_priority() {
        // ROBOT vs FLOOR: the first O is present, the second O is correct
        let e = eval("robot", "floor", Scoring::Standard);
        assert_eq!(e, marks("YY-G-"));
        assert_eq!(e.count(Mark::Correct), 1);
        assert_eq!(e.count(Mark::Present), 2);
    }

    #[test]
    fn evaluation_standard_exact_match_consumes_before_present() {
        // One L in LATER; it is used by the exact match at position 0
        assert_eq!(eval("lolly", "later", Scoring::Standard), marks("G----"));
        assert_eq!(eval("lolly", "later", Scoring::Classic), marks("G-YY-"));
    }

    #[test]
    fn evaluation_classic_later_exact_match_overrides_present() {
        // E at guess position 4 matches solution position 1 first, then 4
        assert_eq!(eval("geese", "verge", Scoring::Classic), marks("YGY-G"));
    }

    #[test]
    fn evaluation_correct_iff_same_letter() {
        let solution = word("crane");
        for guess in ["slate", "trace", "nacre", "caner", "crank"] {
            for scoring in [Scoring::Standard, Scoring::Classic] {
                let guess = word(guess);
                let e = Evaluation::calculate(&guess, &solution, scoring);
                assert_eq!(e.len(), 5);
                for (i, &m) in e.marks().iter().enumerate() {
                    let same = guess.letters()[i] == solution.letters()[i];
                    assert_eq!(m == Mark::Correct, same, "{guess} position {i}");
                }
            }
        }
    }

    #[test]
    fn evaluation_other_lengths() {
        assert_eq!(eval("planet", "plants", Scoring::Standard), marks("GGGG-Y"));
        assert_eq!(eval("cat", "act", Scoring::Standard), marks("YYG"));
    }

    #[test]
    fn evaluation_parse_and_display() {
        let p1: Evaluation = "GYG--".parse().unwrap();
        let p2: Evaluation = "🟩🟨🟩⬜⬜".parse().unwrap();
        let p3: Evaluation = "gyg__".parse().unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.to_string(), "GYG--");
        assert_eq!(p1.to_emoji(), "🟩🟨🟩⬜⬜");
    }

    #[test]
    fn evaluation_parse_invalid() {
        assert!("GXGGY".parse::<Evaluation>().is_err());
        assert!("".parse::<Evaluation>().is_err());
    }
}
