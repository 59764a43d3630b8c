//! Word validation, profanity filtering and challenge prefixes.
//!
//! A [`Lexicon`] is populated once from three raw lists and is read-only
//! afterwards. Gameplay code reaches it through a [`LexiconHandle`], which
//! starts out uninitialized and accepts exactly one initialization.

mod challenge;
mod error;

pub use challenge::{
    ChallengeSettings, MAX_GENERATION_ATTEMPTS, MIN_CHALLENGE_COMPLETIONS, MIN_SOURCE_WORD_LEN,
};
pub use error::{Corpus, LexiconError};

use once_cell::sync::OnceCell;
use rand::{seq::IndexedRandom, Rng};
use serde::Serialize;

use crate::{
    dictionary::PrefixTree,
    utils::letters::{count_letters, normalize_word, sanitize_entry},
};

/// Corpus sizes, reported by the health endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LexiconStats {
    pub words: usize,
    pub nsfw_words: usize,
    pub prefixes: usize,
}

/// Dictionary and profanity corpora plus the curated challenge prefixes
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    dictionary: PrefixTree,
    profanity: PrefixTree,
    prefixes: Vec<String>,
    settings: ChallengeSettings,
}

impl Lexicon {
    /// Create an empty lexicon
    pub fn new(settings: ChallengeSettings) -> Self {
        Self {
            dictionary: PrefixTree::new(),
            profanity: PrefixTree::new(),
            prefixes: Vec::new(),
            settings,
        }
    }

    /// Build a lexicon from raw, unsanitized lists
    pub fn from_lists<W, P, N>(
        settings: ChallengeSettings,
        words: W,
        prefixes: P,
        nsfw_words: N,
    ) -> Self
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        let mut lexicon = Self::new(settings);
        lexicon.ingest(words, prefixes, nsfw_words);
        lexicon
    }

    /// Sanitize and store raw list entries.
    ///
    /// Dictionary and profanity entries are lowercased; prefixes keep their
    /// case since they are only displayed. Entries that end up empty are skipped.
    pub fn ingest<W, P, N>(&mut self, words: W, prefixes: P, nsfw_words: N)
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        for raw in words {
            self.dictionary
                .insert(&sanitize_entry(raw.as_ref()).to_lowercase());
        }

        for raw in nsfw_words {
            self.profanity
                .insert(&sanitize_entry(raw.as_ref()).to_lowercase());
        }

        self.prefixes.extend(
            prefixes
                .into_iter()
                .map(|raw| sanitize_entry(raw.as_ref()))
                .filter(|prefix| !prefix.is_empty()),
        );
    }

    pub fn dictionary(&self) -> &PrefixTree {
        &self.dictionary
    }

    /// Write access to the dictionary, only available while loading
    pub fn dictionary_mut(&mut self) -> &mut PrefixTree {
        &mut self.dictionary
    }

    pub fn profanity(&self) -> &PrefixTree {
        &self.profanity
    }

    /// Write access to the profanity corpus, only available while loading
    pub fn profanity_mut(&mut self) -> &mut PrefixTree {
        &mut self.profanity
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn challenge_settings(&self) -> ChallengeSettings {
        self.settings
    }

    pub fn stats(&self) -> LexiconStats {
        LexiconStats {
            words: self.dictionary.len(),
            nsfw_words: self.profanity.len(),
            prefixes: self.prefixes.len(),
        }
    }

    /// Check if the player's word is in the dictionary.
    ///
    /// Whitespace around the word and letter case are ignored.
    pub fn check_user_word(&self, raw: &str) -> bool {
        let word = normalize_word(raw);
        if word.is_empty() {
            tracing::debug!("Word lookup on empty input");
            return false;
        }

        let found = self.dictionary.search(&word);
        tracing::trace!("Dictionary lookup for '{}': {}", word, found);
        found
    }

    /// Check if the word is a profanity term (same normalization as [`Self::check_user_word`])
    pub fn is_nsfw_word(&self, raw: &str) -> bool {
        let word = normalize_word(raw);
        if word.is_empty() {
            tracing::debug!("NSFW lookup on empty input");
            return false;
        }

        self.profanity.search(&word)
    }

    /// Count the alphabetic characters of a word
    pub fn count_letters(word: &str) -> usize {
        count_letters(word)
    }

    /// Pick one curated prefix uniformly at random
    pub fn random_prefix(&self) -> Result<&str, LexiconError> {
        self.random_prefix_with(&mut rand::rng())
    }

    pub fn random_prefix_with<R: Rng>(&self, rng: &mut R) -> Result<&str, LexiconError> {
        self.prefixes
            .choose(rng)
            .map(String::as_str)
            .ok_or_else(|| {
                tracing::error!("No prefixes loaded");
                LexiconError::EmptyCorpus(Corpus::Prefixes)
            })
    }
}

/// Shared entry point to the lexicon.
///
/// Constructed uninitialized; the first call to [`LexiconHandle::initialize`]
/// populates it and every later call is ignored.
#[derive(Debug, Default)]
pub struct LexiconHandle {
    cell: OnceCell<Lexicon>,
    settings: ChallengeSettings,
}

impl LexiconHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uninitialized handle whose lexicon will use `settings` for challenges
    pub fn with_settings(settings: ChallengeSettings) -> Self {
        Self {
            cell: OnceCell::new(),
            settings,
        }
    }

    /// Populate the lexicon from raw lists.
    ///
    /// Only the first call has an effect; later calls leave the existing
    /// corpus in place and return it.
    pub fn initialize<W, P, N>(&self, words: W, prefixes: P, nsfw_words: N) -> &Lexicon
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        let mut populated = false;
        let lexicon = self.cell.get_or_init(|| {
            populated = true;
            Lexicon::from_lists(self.settings, words, prefixes, nsfw_words)
        });

        if populated {
            let stats = lexicon.stats();
            tracing::info!(
                "Lexicon initialized: {} words, {} NSFW terms, {} prefixes",
                stats.words,
                stats.nsfw_words,
                stats.prefixes
            );
        } else {
            tracing::warn!("Lexicon already initialized, ignoring re-initialization");
        }

        lexicon
    }

    /// Install a lexicon that was built elsewhere.
    ///
    /// Returns the lexicon back if the handle was already initialized.
    pub fn install(&self, lexicon: Lexicon) -> Result<&Lexicon, Lexicon> {
        match self.cell.try_insert(lexicon) {
            Ok(installed) => {
                tracing::info!("Lexicon installed");
                Ok(installed)
            }
            Err((_, rejected)) => {
                tracing::warn!("Lexicon already initialized, rejecting installed lexicon");
                Err(rejected)
            }
        }
    }

    /// Get the initialized lexicon
    pub fn get(&self) -> Result<&Lexicon, LexiconError> {
        self.cell.get().ok_or_else(|| {
            tracing::error!("Lexicon accessed before initialization");
            LexiconError::Uninitialized
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Corpus sizes, if initialized
    pub fn stats(&self) -> Option<LexiconStats> {
        self.cell.get().map(Lexicon::stats)
    }
}
