use std::fmt;

/// Word collection a sampling operation drew from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corpus {
    Dictionary,
    Prefixes,
}

impl fmt::Display for Corpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Corpus::Dictionary => f.write_str("dictionary"),
            Corpus::Prefixes => f.write_str("prefix list"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LexiconError {
    #[error("lexicon accessed before initialization")]
    Uninitialized,
    #[error("cannot sample from an empty {0}")]
    EmptyCorpus(Corpus),
    #[error("no candidate prefix was produced after {attempts} attempts")]
    NoCandidate { attempts: usize },
}
