mod classify;
mod config;
mod errors;
mod lang_id;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::classify::lexicon::TagLexicon;
use crate::config::Config;
use crate::lang_id::{FastTextClient, LanguageIdentifier};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobTag API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the language-identification client
    let identifier: Arc<dyn LanguageIdentifier> =
        Arc::new(FastTextClient::new(config.lang_id_url.clone()));
    info!("Language identifier client initialized ({})", config.lang_id_url);

    // Build the static tag lexicon; read-only for the process lifetime
    let lexicon = Arc::new(TagLexicon::builtin());
    info!(
        "Tag lexicon loaded ({} words, {} allowed languages)",
        lexicon.len(),
        lexicon.language_count()
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        identifier,
        lexicon,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
