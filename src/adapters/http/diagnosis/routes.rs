//! Route configuration for diagnosis endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{diagnose, get_dam, list_questions, DiagnosisAppState};

/// Creates the diagnosis router with all endpoints.
///
/// Routes:
/// - `GET /api/questions` - Survey questions in presentation order
/// - `POST /api/diagnose` - Score answers and return matching dams
/// - `GET /api/dams/:id` - Dam attributes with realtime readings
pub fn diagnosis_router() -> Router<DiagnosisAppState> {
    Router::new()
        .route("/api/questions", get(list_questions))
        .route("/api/diagnose", post(diagnose))
        .route("/api/dams/:id", get(get_dam))
}
