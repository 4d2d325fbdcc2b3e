use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skill_api::config::Config;
use skill_api::normalize::SkillNormalizer;
use skill_api::routes::build_router;
use skill_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so RUST_LOG from .env reaches the filter
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting skill API v{}", env!("CARGO_PKG_VERSION"));

    // Rule tables are compiled once and shared read-only by every request
    let normalizer = Arc::new(SkillNormalizer::builtin()?);
    info!("Skill normalizer initialized");
    info!(
        "Limits: max_skill_len={} max_batch_size={} remove_stopwords={}",
        config.max_skill_len, config.max_batch_size, config.remove_stopwords
    );

    let state = AppState {
        config: config.clone(),
        normalizer,
    };

    let app = build_router(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
