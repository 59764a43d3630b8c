pub mod health;
pub mod lexicon;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/lexicon/words/check", get(lexicon::check_word))
        .route("/lexicon/nsfw", get(lexicon::check_nsfw))
        .route("/lexicon/letters", get(lexicon::count_letters))
        .route("/lexicon/prefixes/random", get(lexicon::random_prefix))
        .route("/lexicon/prefixes/generate", get(lexicon::generate_prefix))
        .route("/lexicon/prefixes/check", get(lexicon::check_prefix))
}
