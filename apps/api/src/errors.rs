use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::riasec::TraitAxis;

/// Errors raised by the scoring and matching engine.
/// Every variant carries enough detail (axis, skill, threshold) to build a user-facing message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error(
        "Assessment incomplete: {answered} of {total} items answered, {required:.0}% required"
    )]
    IncompleteAssessment {
        answered: usize,
        total: usize,
        /// Required completion as a percentage.
        required: f64,
    },

    #[error("Career catalog is empty")]
    EmptyCatalog,

    #[error(
        "Trait vectors have different axis sets (missing from interest: {missing_from_interest:?}, missing from skill: {missing_from_skill:?})"
    )]
    MismatchedAxisSet {
        missing_from_interest: Vec<TraitAxis>,
        missing_from_skill: Vec<TraitAxis>,
    },

    #[error("Score for axis {axis} must be a finite value in [0, 100], got {value}")]
    InvalidScore { axis: TraitAxis, value: f64 },

    #[error("Response to question {question_id} must be between 1 and 5, got {value}")]
    InvalidResponse { question_id: u32, value: u8 },

    #[error("Confidence rating for skill '{skill}' must be between 1 and {max}, got {value}")]
    InvalidRating { skill: String, value: u8, max: u8 },

    #[error("Invalid match weights: {0}")]
    InvalidWeights(String),
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Scoring(e) => scoring_status(e),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

fn scoring_status(error: &ScoringError) -> (StatusCode, &'static str, String) {
    match error {
        ScoringError::IncompleteAssessment { .. } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "INCOMPLETE_ASSESSMENT",
            error.to_string(),
        ),
        ScoringError::MismatchedAxisSet { .. } => (
            StatusCode::BAD_REQUEST,
            "MISMATCHED_AXIS_SET",
            error.to_string(),
        ),
        ScoringError::InvalidScore { .. }
        | ScoringError::InvalidResponse { .. }
        | ScoringError::InvalidRating { .. } => {
            (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", error.to_string())
        }
        ScoringError::EmptyCatalog => {
            tracing::error!("Career matching requested against an empty catalog");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "EMPTY_CATALOG",
                "No careers are available for matching".to_string(),
            )
        }
        ScoringError::InvalidWeights(msg) => {
            tracing::error!("Invalid match weights: {msg}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INVALID_WEIGHTS",
                "Career matching is misconfigured".to_string(),
            )
        }
    }
}
