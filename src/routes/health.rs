use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let lexicon = match state.lexicon.stats() {
        Some(stats) => json!({
            "initialized": true,
            "words": stats.words,
            "nsfw_words": stats.nsfw_words,
            "prefixes": stats.prefixes,
        }),
        None => json!({ "initialized": false }),
    };

    Json(json!({
        "status": "ok",
        "service": "lexicon-backend",
        "version": env!("CARGO_PKG_VERSION"),
        "lexicon": lexicon
    }))
}
