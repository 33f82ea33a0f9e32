//! Word of the day from the embedded list

use super::loader::words_from_slice;
use super::{SOLUTIONS, WordSource};
use crate::core::Word;
use crate::error::SourceError;
use chrono::{NaiveDate, Utc};
use tracing::info;

/// First day of the rotation; the list's first word is the solution on this day
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2021, 6, 19) {
    Some(date) => date,
    None => panic!("invalid epoch date"),
};

/// Picks the same word for everyone on a given UTC day
///
/// Walks the embedded list one word per day from `EPOCH`, wrapping around
/// when the list runs out.
#[derive(Debug, Clone, Default)]
pub struct DailySource {
    date: Option<NaiveDate>,
}

impl DailySource {
    /// Use today's UTC date
    #[must_use]
    pub const fn new() -> Self {
        Self { date: None }
    }

    /// Use a fixed date instead of today
    #[must_use]
    pub const fn for_date(date: NaiveDate) -> Self {
        Self { date: Some(date) }
    }

    fn date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Utc::now().date_naive())
    }
}

/// Index into a list of `count` words for `date`
///
/// Days before `EPOCH` count backwards from the end of the list.
///
/// # Panics
/// Panics if `count` is zero.
#[must_use]
pub fn day_index(date: NaiveDate, count: usize) -> usize {
    let days = date.signed_duration_since(EPOCH).num_days();
    days.rem_euclid(count as i64) as usize
}

impl WordSource for DailySource {
    fn current_word(&self, length: usize) -> Result<Word, SourceError> {
        let candidates = words_from_slice(SOLUTIONS, length);
        if candidates.is_empty() {
            return Err(SourceError::NoCandidates {
                length,
                origin: "the embedded list".to_string(),
            });
        }

        let date = self.date();
        let index = day_index(date, candidates.len());
        info!(%date, index, "picked word of the day");

        Ok(candidates[index].clone())
    }
}
