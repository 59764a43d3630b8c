use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    lexicon::{Lexicon, LexiconError},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct WordQuery {
    pub word: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordCheckResponse {
    pub word: String,
    /// Word is in the dictionary
    pub valid: bool,
    /// Word is in the profanity corpus
    pub nsfw: bool,
    pub letters: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NsfwResponse {
    pub word: String,
    pub nsfw: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LettersResponse {
    pub word: String,
    pub letters: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PrefixResponse {
    pub prefix: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeneratedPrefixResponse {
    pub prefix: String,
    /// False when generation ran out of attempts and fell back to a weaker prefix
    pub satisfied: bool,
}

#[derive(Debug, Deserialize)]
pub struct GenerateQuery {
    /// Defaults to the configured prefix length
    pub length: Option<usize>,
    #[serde(default)]
    pub randomize: bool,
}

#[derive(Debug, Deserialize)]
pub struct PrefixCheckQuery {
    pub prefix: String,
    /// Defaults to the configured completion minimum
    pub min: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PrefixCheckResponse {
    pub prefix: String,
    pub min: usize,
    pub satisfied: bool,
}

/// Validate a player's word against the dictionary and the profanity filter
pub async fn check_word(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WordQuery>,
) -> Result<Json<WordCheckResponse>, StatusCode> {
    let lexicon = live_lexicon(&state)?;

    Ok(Json(WordCheckResponse {
        valid: lexicon.check_user_word(&query.word),
        nsfw: lexicon.is_nsfw_word(&query.word),
        letters: Lexicon::count_letters(&query.word),
        word: query.word,
    }))
}

pub async fn check_nsfw(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WordQuery>,
) -> Result<Json<NsfwResponse>, StatusCode> {
    let lexicon = live_lexicon(&state)?;

    Ok(Json(NsfwResponse {
        nsfw: lexicon.is_nsfw_word(&query.word),
        word: query.word,
    }))
}

pub async fn count_letters(Query(query): Query<WordQuery>) -> Json<LettersResponse> {
    Json(LettersResponse {
        letters: Lexicon::count_letters(&query.word),
        word: query.word,
    })
}

/// Pick one of the curated prefixes
pub async fn random_prefix(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PrefixResponse>, StatusCode> {
    let prefix = live_lexicon(&state)?
        .random_prefix()
        .map_err(error_status)?
        .to_owned();

    Ok(Json(PrefixResponse { prefix }))
}

/// Generate a challenge prefix from the dictionary
pub async fn generate_prefix(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GenerateQuery>,
) -> Result<Json<GeneratedPrefixResponse>, StatusCode> {
    let length = query
        .length
        .unwrap_or(state.config.lexicon.default_prefix_length);
    let randomize = query.randomize;

    // Rejection sampling may run many attempts, keep it off the async workers
    let response = tokio::task::spawn_blocking(move || {
        let lexicon = state.lexicon.get()?;
        let prefix = lexicon.generate_prefix_from_random_word(length, randomize)?;
        Ok::<_, LexiconError>(GeneratedPrefixResponse {
            satisfied: lexicon.prefix_meets_challenge(&prefix),
            prefix,
        })
    })
    .await
    .map_err(|e| {
        tracing::error!("Prefix generation task failed: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?
    .map_err(error_status)?;

    Ok(Json(response))
}

/// Check that a prefix admits enough dictionary completions
pub async fn check_prefix(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PrefixCheckQuery>,
) -> Result<Json<PrefixCheckResponse>, StatusCode> {
    let lexicon = live_lexicon(&state)?;
    let min = query
        .min
        .unwrap_or(lexicon.challenge_settings().min_completions);

    Ok(Json(PrefixCheckResponse {
        satisfied: lexicon.check_prefix_has_minimum_words(&query.prefix, min),
        prefix: query.prefix,
        min,
    }))
}

fn live_lexicon(state: &AppState) -> Result<&Lexicon, StatusCode> {
    state.lexicon.get().map_err(error_status)
}

fn error_status(err: LexiconError) -> StatusCode {
    tracing::warn!("Lexicon request failed: {}", err);
    match err {
        LexiconError::Uninitialized => StatusCode::SERVICE_UNAVAILABLE,
        LexiconError::EmptyCorpus(_) | LexiconError::NoCandidate { .. } => StatusCode::NOT_FOUND,
    }
}
