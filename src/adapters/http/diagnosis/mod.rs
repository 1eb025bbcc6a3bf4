//! HTTP adapter for diagnosis endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnswerRequest, DamDetailResponse, DiagnoseRequest, DiagnoseResponse, ErrorResponse,
    MatchResponse,
};
pub use handlers::{DiagnosisApiError, DiagnosisAppState};
pub use routes::diagnosis_router;
