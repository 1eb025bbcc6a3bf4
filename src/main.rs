//! DamBTI HTTP server binary.
//!
//! # Environment Variables
//!
//! - `DAMBTI__SERVER__PORT` - HTTP port (default: 3000)
//! - `DAMBTI__SERVER__LOG_LEVEL` - Tracing filter, overridden by `RUST_LOG`
//! - `DAMBTI__CORPUS__PATH` - Dam corpus file (default: `data/dams.json`)
//! - `DAMBTI__CORPUS__PRELOAD` - Load the corpus before serving (default: true)
//! - `DAMBTI__MATCHING__SECONDARY_COUNT` - Runner-up matches (default: 2)

use std::sync::Arc;

use dambti::adapters::{
    app_router, with_middleware, DiagnosisAppState, FileDamSource, SimulatedRealtimeProvider,
};
use dambti::application::{
    DamCatalog, DiagnoseHandler, GetDamDetailHandler, ListQuestionsHandler,
};
use dambti::config::AppConfig;
use dambti::domain::matching::DamMatcher;
use dambti::domain::survey::QuestionCatalog;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server.log_level, config.is_production());

    let source = Arc::new(FileDamSource::new(&config.corpus.path));
    let dams = Arc::new(DamCatalog::new(source));
    if config.corpus.preload {
        // A failed preload is retried on the first request.
        if let Err(e) = dams.corpus().await {
            tracing::warn!(error = %e, "Corpus preload failed; will retry on demand");
        }
    }

    let questions = Arc::new(QuestionCatalog::standard().clone());
    let state = DiagnosisAppState::new(
        Arc::new(ListQuestionsHandler::new(questions.clone())),
        Arc::new(DiagnoseHandler::new(
            questions,
            dams.clone(),
            DamMatcher::new(config.matching.secondary_count),
        )),
        Arc::new(GetDamDetailHandler::new(
            dams,
            Arc::new(SimulatedRealtimeProvider::new()),
        )),
    );

    let app = with_middleware(
        app_router(state),
        &config.server.cors_origins_list(),
        config.server.request_timeout(),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, environment = ?config.server.environment, "DamBTI server starting");
    tracing::info!("  GET  /               - health");
    tracing::info!("  GET  /api/questions  - survey questions");
    tracing::info!("  POST /api/diagnose   - diagnosis");
    tracing::info!("  GET  /api/dams/:id   - dam detail");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
