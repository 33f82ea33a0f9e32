//! Random word from a word list downloaded over HTTP

use super::WordSource;
use super::random::RandomSource;
use crate::core::Word;
use crate::error::SourceError;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::info;

/// Default list: every English word, one per line
pub const DEFAULT_WORDS_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/master/words_alpha.txt";

/// Downloads a newline-delimited list and picks a random word from it
///
/// The list is fetched on every call; there is no cache.
#[derive(Debug, Clone)]
pub struct RemoteSource {
    url: String,
    timeout: Duration,
}

impl RemoteSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    fn fetch(&self) -> Result<String, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;

        let body = client.get(&self.url).send()?.error_for_status()?.text()?;
        info!(url = %self.url, bytes = body.len(), "downloaded word list");
        Ok(body)
    }

    fn fetch_with_spinner(&self) -> Result<String, SourceError> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("Downloading word list from {}", self.url));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = self.fetch();
        spinner.finish_and_clear();
        result
    }
}

impl Default for RemoteSource {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS_URL)
    }
}

impl WordSource for RemoteSource {
    fn current_word(&self, length: usize) -> Result<Word, SourceError> {
        let body = self.fetch_with_spinner()?;
        RandomSource::from_text(body, self.url.clone()).current_word(length)
    }
}
