use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skillmatch::analysis::Analyzer;
use skillmatch::config::Config;
use skillmatch::extraction::build_extractor;
use skillmatch::matching::KeywordRoleMatcher;
use skillmatch::profile::catalog::SkillCatalog;
use skillmatch::recognizer::{EntityRecognizer, HttpEntityRecognizer, NullRecognizer};
use skillmatch::routes::build_router;
use skillmatch::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Skill catalog: file override or built-in tables
    let catalog = Arc::new(match &config.skill_catalog_path {
        Some(path) => {
            info!("Loading skill catalog from {}", path.display());
            SkillCatalog::from_json_file(path)?
        }
        None => SkillCatalog::builtin(),
    });
    info!(
        "Skill catalog ready: {} terms, {} roles",
        catalog.entries().count(),
        catalog.roles().len()
    );

    // Text extraction backend
    let extractor = build_extractor(config.extraction_strategy, config.ocr.clone());
    info!(
        "Text extractor: {} (timeout {:?})",
        extractor.name(),
        config.extraction_timeout
    );

    // Optional entity recognizer (no-op when NER_SERVICE_URL is unset)
    let recognizer: Arc<dyn EntityRecognizer> = match &config.ner_service_url {
        Some(url) => Arc::new(HttpEntityRecognizer::new(url.clone(), config.ner_timeout)?),
        None => Arc::new(NullRecognizer),
    };
    info!("Entity recognizer: {}", recognizer.backend());

    let analyzer = Analyzer::new(
        catalog.clone(),
        extractor,
        recognizer,
        Arc::new(KeywordRoleMatcher),
        config.extraction_timeout,
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        catalog,
        analyzer: Arc::new(analyzer),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
