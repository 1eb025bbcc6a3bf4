//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the health probe and the diagnosis endpoints;
//! `with_middleware` adds tracing, CORS and request timeouts around it.

pub mod diagnosis;

use std::time::Duration;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

pub use diagnosis::{diagnosis_router, DiagnosisAppState};

/// Plain-text body served at `/`.
pub const HEALTH_MESSAGE: &str = "DamBTI API is running";

/// Builds the full application router.
pub fn app_router(state: DiagnosisAppState) -> Router {
    Router::new()
        .route("/", get(health))
        .merge(diagnosis_router())
        .with_state(state)
}

/// Wraps a router with request tracing, CORS and a request timeout.
///
/// An empty origin list, or one containing `*`, allows any origin.
pub fn with_middleware(router: Router, cors_origins: &[String], timeout: Duration) -> Router {
    router
        .layer(cors_layer(cors_origins))
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    HEALTH_MESSAGE
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return base.allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(parsed)
}
