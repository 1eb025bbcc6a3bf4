//! HTTP handlers for diagnosis endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::debug;

use crate::application::{
    DiagnoseCommand, DiagnoseHandler, GetDamDetailHandler, GetDamDetailQuery,
    ListQuestionsHandler, ListQuestionsQuery,
};
use crate::domain::foundation::{DamId, DomainError, ErrorCode};

use super::dto::{DamDetailResponse, DiagnoseRequest, DiagnoseResponse, ErrorResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the diagnosis routes.
#[derive(Clone)]
pub struct DiagnosisAppState {
    list_questions: Arc<ListQuestionsHandler>,
    diagnose: Arc<DiagnoseHandler>,
    dam_detail: Arc<GetDamDetailHandler>,
}

impl DiagnosisAppState {
    pub fn new(
        list_questions: Arc<ListQuestionsHandler>,
        diagnose: Arc<DiagnoseHandler>,
        dam_detail: Arc<GetDamDetailHandler>,
    ) -> Self {
        Self {
            list_questions,
            diagnose,
            dam_detail,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/questions - The full questionnaire
pub async fn list_questions(State(state): State<DiagnosisAppState>) -> impl IntoResponse {
    Json(state.list_questions.handle(ListQuestionsQuery))
}

/// GET /api/dams/:id - One dam with realtime readings
pub async fn get_dam(
    State(state): State<DiagnosisAppState>,
    Path(dam_id): Path<String>,
) -> Result<impl IntoResponse, DiagnosisApiError> {
    let dam_id = DamId::new(dam_id).map_err(|e| DiagnosisApiError(e.into()))?;

    let detail = state.dam_detail.handle(GetDamDetailQuery { dam_id }).await?;

    Ok((StatusCode::OK, Json(DamDetailResponse::from(detail))))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/diagnose - Score answers and find matching dams
pub async fn diagnose(
    State(state): State<DiagnosisAppState>,
    body: Result<Json<DiagnoseRequest>, JsonRejection>,
) -> Result<impl IntoResponse, DiagnosisApiError> {
    let Json(request) = body?;

    let cmd = DiagnoseCommand {
        answers: request.answers.into_iter().map(Into::into).collect(),
    };
    let diagnosis = state.diagnose.handle(cmd).await?;

    debug!(
        primary = %diagnosis.primary.dam.id,
        match_rate = %diagnosis.primary.match_rate,
        "Diagnosis complete"
    );

    Ok((StatusCode::OK, Json(DiagnoseResponse::from(diagnosis))))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub struct DiagnosisApiError(pub DomainError);

impl DiagnosisApiError {
    fn status(&self) -> StatusCode {
        match self.0.code {
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::OutOfRange => {
                StatusCode::BAD_REQUEST
            }
            ErrorCode::DamNotFound => StatusCode::NOT_FOUND,
            ErrorCode::EmptyCorpus | ErrorCode::CorpusUnavailable => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for DiagnosisApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for DiagnosisApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(DomainError::validation("body", rejection.body_text()))
    }
}

impl IntoResponse for DiagnosisApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let error = if status == StatusCode::INTERNAL_SERVER_ERROR {
            ErrorResponse::internal("An unexpected error occurred")
        } else {
            ErrorResponse::from(self.0)
        };

        (status, Json(error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_for(code: ErrorCode) -> StatusCode {
        DiagnosisApiError(DomainError::new(code, "x"))
            .into_response()
            .status()
    }

    #[test]
    fn validation_maps_to_400() {
        assert_eq!(status_for(ErrorCode::ValidationFailed), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::EmptyField), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::OutOfRange), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn dam_not_found_maps_to_404() {
        assert_eq!(status_for(ErrorCode::DamNotFound), StatusCode::NOT_FOUND);
    }

    #[test]
    fn corpus_problems_map_to_503() {
        assert_eq!(status_for(ErrorCode::EmptyCorpus), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            status_for(ErrorCode::CorpusUnavailable),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn internal_maps_to_500() {
        assert_eq!(status_for(ErrorCode::InternalError), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
