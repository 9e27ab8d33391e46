//! Emergency Triage Service — Binary Entrypoint
//! Boots the Axum HTTP server: loads config, seeds the report store from
//! disk, wires the pipeline and routes.

use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use emergency_triage::api::{self, AppState};
use emergency_triage::config::AppConfig;
use emergency_triage::pipeline::ReportPipeline;
use emergency_triage::store::ReportStore;
use emergency_triage::summarize::Summarizer;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("emergency_triage=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = AppConfig::from_env();

    let store = Arc::new(ReportStore::new(&cfg.data_dir));
    let loaded = store.load_from_dir();
    tracing::info!(loaded, dir = %cfg.data_dir.display(), "report store ready");

    // Summarizer backend comes from config/summarizer.json + env.
    let pipeline = Arc::new(ReportPipeline::new(Summarizer::from_config()));

    let state = AppState { pipeline, store };
    let router = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!(addr = %cfg.bind_addr, "emergency triage service listening");
    axum::serve(listener, router).await?;

    Ok(())
}
