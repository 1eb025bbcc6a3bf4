//! HTTP DTOs for diagnosis endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::application::{DamDetail, DamMatch, Diagnosis};
use crate::domain::foundation::DomainError;
use crate::domain::matching::Dam;
use crate::domain::survey::Answer;
use crate::domain::traits::TraitVector;
use crate::ports::RealtimeStatus;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One answered question, `{"questionId": "Q1", "choiceKey": "A"}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    pub question_id: String,
    pub choice_key: String,
}

impl From<AnswerRequest> for Answer {
    fn from(req: AnswerRequest) -> Self {
        Answer::new(req.question_id, req.choice_key)
    }
}

/// Request to diagnose a set of answers.
#[derive(Debug, Clone, Deserialize)]
pub struct DiagnoseRequest {
    pub answers: Vec<AnswerRequest>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A matched dam with its match rate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub entity: Dam,
    pub match_rate_percent: f64,
}

impl From<DamMatch> for MatchResponse {
    fn from(m: DamMatch) -> Self {
        Self {
            match_rate_percent: m.match_rate.value(),
            entity: m.dam,
        }
    }
}

/// Diagnosis result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnoseResponse {
    pub trait_vector: TraitVector,
    /// Display labels, in family priority order
    pub tags: Vec<String>,
    /// Stable codes for the same tags, e.g. `storage-high`
    pub tag_codes: Vec<String>,
    pub primary_match: MatchResponse,
    pub secondary_matches: Vec<MatchResponse>,
}

impl From<Diagnosis> for DiagnoseResponse {
    fn from(d: Diagnosis) -> Self {
        Self {
            trait_vector: d.traits,
            tags: d.tags.iter().map(|t| t.label.to_string()).collect(),
            tag_codes: d.tags.iter().map(|t| t.code()).collect(),
            primary_match: d.primary.into(),
            secondary_matches: d.secondaries.into_iter().map(MatchResponse::from).collect(),
        }
    }
}

/// Dam attributes with realtime readings; `realtime` is `{}` when unavailable.
#[derive(Debug, Clone, Serialize)]
pub struct DamDetailResponse {
    #[serde(flatten)]
    pub dam: Dam,
    pub realtime: RealtimeStatus,
}

impl From<DamDetail> for DamDetailResponse {
    fn from(detail: DamDetail) -> Self {
        Self {
            dam: detail.dam,
            realtime: detail.realtime.unwrap_or_default(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, String>>,
}

impl ErrorResponse {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        Self {
            code: err.code.to_string(),
            message: err.message,
            details: if err.details.is_empty() {
                None
            } else {
                Some(err.details)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DamId, ErrorCode, MatchRate};

    #[test]
    fn diagnose_request_deserializes_camel_case() {
        let json = r#"{"answers": [{"questionId": "Q1", "choiceKey": "A"}]}"#;
        let req: DiagnoseRequest = serde_json::from_str(json).unwrap();
        let answer: Answer = req.answers[0].clone().into();
        assert_eq!(answer, Answer::new("Q1", "A"));
    }

    #[test]
    fn answer_request_rejects_snake_case_fields() {
        let json = r#"{"question_id": "Q1", "choice_key": "A"}"#;
        assert!(serde_json::from_str::<AnswerRequest>(json).is_err());
    }

    #[test]
    fn diagnose_request_requires_answers() {
        assert!(serde_json::from_str::<DiagnoseRequest>("{}").is_err());
        assert!(serde_json::from_str::<DiagnoseRequest>(r#"{"answers": "Q1"}"#).is_err());
        assert!(
            serde_json::from_str::<DiagnoseRequest>(r#"{"answers": [{"questionId": "Q1"}]}"#)
                .is_err()
        );
    }

    #[test]
    fn match_response_serializes_rate_as_percent() {
        let dam = Dam::new(DamId::new("d1").unwrap(), "テスト", TraitVector::default());
        let response = MatchResponse::from(DamMatch {
            dam,
            similarity: 0.9876,
            match_rate: MatchRate::from_similarity(0.9876),
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["matchRatePercent"], 98.8);
        assert_eq!(json["entity"]["name_ja"], "テスト");
    }

    #[test]
    fn dam_detail_without_realtime_renders_empty_object() {
        let dam = Dam::new(DamId::new("d1").unwrap(), "テスト", TraitVector::default());
        let response = DamDetailResponse::from(DamDetail {
            dam,
            realtime: None,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], "d1");
        assert_eq!(json["realtime"], serde_json::json!({}));
    }

    #[test]
    fn error_response_from_domain_error_keeps_code_and_details() {
        let err = DomainError::new(ErrorCode::DamNotFound, "Dam not found").with_detail("dam_id", "x");
        let response = ErrorResponse::from(err);

        assert_eq!(response.code, "DAM_NOT_FOUND");
        assert_eq!(response.details.unwrap().get("dam_id").unwrap(), "x");
    }

    #[test]
    fn error_response_omits_empty_details() {
        let err = DomainError::new(ErrorCode::EmptyCorpus, "No dams loaded");
        let json = serde_json::to_string(&ErrorResponse::from(err)).unwrap();
        assert!(!json.contains("details"));

        let json = serde_json::to_string(&ErrorResponse::internal("boom")).unwrap();
        assert!(json.contains("INTERNAL_ERROR"));
        assert!(!json.contains("details"));
    }
}
