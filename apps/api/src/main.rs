mod config;
mod curation;
mod db;
mod errors;
mod learning_path;
mod routes;
mod state;
mod verification;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::curation::pipeline::CurationPipeline;
use crate::curation::selector::ResourceSelector;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;
use crate::verification::batch::BatchVerifier;
use crate::verification::cache::TtlCache;
use crate::verification::probe::HttpProbe;
use crate::verification::verifier::LinkVerifier;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Curator v{}", env!("CARGO_PKG_VERSION"));

    let db = create_pool(&config.database_url)?;

    // Verification stack: probe → verifier → cache-backed batch verifier
    let settings = &config.verification;
    let probe = Arc::new(HttpProbe::new(settings.probe_timeout));
    let verifier = LinkVerifier::new(probe, settings.probe_timeout).strict(settings.strict);
    let cache = Arc::new(TtlCache::new(settings.cache_ttl, settings.cache_max_entries));
    let batch = BatchVerifier::new(verifier, cache, settings);
    info!(
        "Verification: ttl={}s max_entries={} batch_width={} batch_delay={}ms probe_timeout={}ms strict={}",
        settings.cache_ttl.as_secs(),
        settings.cache_max_entries,
        settings.batch_width,
        settings.batch_delay.as_millis(),
        settings.probe_timeout.as_millis(),
        settings.strict
    );

    let pipeline = Arc::new(CurationPipeline::new(ResourceSelector::default(), batch));

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        pipeline,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client domain is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
