pub mod config;
pub mod content;
pub mod dictionary;
pub mod lexicon;
pub mod routes;
pub mod utils;

use config::Config;
use lexicon::LexiconHandle;

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    pub lexicon: LexiconHandle,
}
