use rand::Rng;

use super::{Corpus, Lexicon, LexiconError};
use crate::utils::letters::char_prefix;

/// Completions a generated challenge prefix must admit
pub const MIN_CHALLENGE_COMPLETIONS: usize = 20;

/// Sampling attempts before the generator gives up and returns its last candidate
pub const MAX_GENERATION_ATTEMPTS: usize = 10_000;

/// Shorter dictionary words are never used as a prefix source
pub const MIN_SOURCE_WORD_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeSettings {
    /// Minimum number of dictionary words an accepted prefix must begin
    pub min_completions: usize,
    /// Upper bound on rejection-sampling iterations
    pub max_attempts: usize,
}

impl Default for ChallengeSettings {
    fn default() -> Self {
        Self {
            min_completions: MIN_CHALLENGE_COMPLETIONS,
            max_attempts: MAX_GENERATION_ATTEMPTS,
        }
    }
}

impl Lexicon {
    /// Check if at least `min_count` dictionary words start with `prefix`.
    ///
    /// Scans the word list and stops as soon as enough matches are seen.
    pub fn check_prefix_has_minimum_words(&self, prefix: &str, min_count: usize) -> bool {
        if min_count == 0 {
            return true;
        }

        let words = self.dictionary.all_words();
        if words.is_empty() {
            tracing::warn!("No words available in the dictionary");
            return false;
        }

        words
            .iter()
            .filter(|word| word.starts_with(prefix))
            .take(min_count)
            .count()
            == min_count
    }

    /// Check if `prefix` admits the configured number of completions.
    ///
    /// Same answer as [`Self::check_prefix_has_minimum_words`] but reads the
    /// per-node counts of the dictionary tree instead of scanning every word.
    pub fn prefix_meets_challenge(&self, prefix: &str) -> bool {
        self.dictionary.count_with_prefix(prefix) >= self.settings.min_completions
    }

    /// Generate a challenge prefix from a randomly drawn dictionary word.
    ///
    /// The prefix is `length` characters long, or a random length in
    /// `1..=length` when `randomize` is set, clamped to the drawn word.
    pub fn generate_prefix_from_random_word(
        &self,
        length: usize,
        randomize: bool,
    ) -> Result<String, LexiconError> {
        self.generate_prefix_from_random_word_with(&mut rand::rng(), length, randomize)
    }

    /// Rejection-sample a prefix with at least `min_completions` completions.
    ///
    /// Each attempt costs O(length). Gives up after `max_attempts` draws (at
    /// least one) and returns the last candidate seen, which then may admit
    /// fewer completions.
    pub fn generate_prefix_from_random_word_with<R: Rng>(
        &self,
        rng: &mut R,
        length: usize,
        randomize: bool,
    ) -> Result<String, LexiconError> {
        if self.dictionary.is_empty() {
            tracing::error!("Cannot generate a prefix, no words available in the dictionary");
            return Err(LexiconError::EmptyCorpus(Corpus::Dictionary));
        }

        let length = length.max(1);
        let ChallengeSettings {
            min_completions,
            max_attempts,
        } = self.settings;
        let max_attempts = max_attempts.max(1);

        let mut last_candidate = None;
        for attempt in 1..=max_attempts {
            let Some(word) = self.dictionary.random_word(rng) else {
                break;
            };

            let word_len = word.chars().count();
            if word_len < MIN_SOURCE_WORD_LEN {
                continue;
            }

            let prefix_len = if randomize {
                rng.random_range(1..=length)
            } else {
                length
            };
            let candidate = char_prefix(word, prefix_len.min(word_len));

            if self.prefix_meets_challenge(candidate) {
                tracing::debug!(
                    "Generated prefix '{}' from '{}' after {} attempts",
                    candidate,
                    word,
                    attempt
                );
                return Ok(candidate.to_owned());
            }
            last_candidate = Some(candidate);
        }

        match last_candidate {
            Some(candidate) => {
                tracing::warn!(
                    "No prefix with {} completions found in {} attempts, falling back to '{}'",
                    min_completions,
                    max_attempts,
                    candidate
                );
                Ok(candidate.to_owned())
            }
            None => {
                tracing::error!(
                    "No dictionary word of at least {} characters drawn in {} attempts",
                    MIN_SOURCE_WORD_LEN,
                    max_attempts
                );
                Err(LexiconError::NoCandidate {
                    attempts: max_attempts,
                })
            }
        }
    }
}
