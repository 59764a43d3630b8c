use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use lexicon_backend::{
    config::Config, content::LexiconContent, lexicon::LexiconHandle, routes, AppState,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lexicon_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting lexicon backend server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load word lists
    let content = match LexiconContent::load(&config.lexicon).await {
        Ok(content) => {
            tracing::info!("Word lists loaded successfully");
            content
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load word lists: {:#}. Using an empty dictionary for now.",
                e
            );
            tracing::warn!(
                "Provide a word list at {} for full functionality",
                config.lexicon.dictionary_path
            );
            LexiconContent::default()
        }
    };

    let lexicon = LexiconHandle::with_settings(config.lexicon.challenge_settings());
    lexicon.initialize(content.words, content.prefixes, content.nsfw_words);

    // Create application state
    let state = Arc::new(AppState {
        config: config.clone(),
        lexicon,
    });

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .merge(routes::create_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Lexicon API: http://{}/api/lexicon", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
