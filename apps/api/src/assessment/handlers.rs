//! Axum route handlers for the Assessment API.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::assessment::holland::holland_code;
use crate::assessment::interpretation::{interpret, Interpretation};
use crate::assessment::normalizer::normalize;
use crate::assessment::progress::{
    compute_progress, validate_responses, AssessmentProgress, ResponseValidation,
};
use crate::errors::AppError;
use crate::models::assessment::{AssessmentSession, Question};
use crate::models::riasec::{HollandCode, TraitAxis, TraitVector};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct QuestionsQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct ProgressRequest {
    /// Question id → Likert value.
    pub responses: AssessmentSession,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub progress: AssessmentProgress,
    pub validation: ResponseValidation,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub responses: AssessmentSession,
    /// Overrides COMPLETION_THRESHOLD for this request.
    pub completion_threshold: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub scores: TraitVector,
    pub holland_code: HollandCode,
    pub missing_axes: Vec<TraitAxis>,
    pub answered: usize,
    pub total: usize,
    pub interpretation: Interpretation,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/assessment/questions
pub async fn handle_questions(
    State(state): State<AppState>,
    Query(params): Query<QuestionsQuery>,
) -> Json<QuestionsResponse> {
    let bank = &state.content.questions;
    let questions: Vec<Question> = match params.category.as_deref() {
        Some(category) => bank.by_category(category).into_iter().cloned().collect(),
        None => bank.questions.clone(),
    };
    Json(QuestionsResponse {
        total: questions.len(),
        questions,
    })
}

/// POST /api/v1/assessment/progress
pub async fn handle_progress(
    State(state): State<AppState>,
    Json(request): Json<ProgressRequest>,
) -> Json<ProgressResponse> {
    let bank = &state.content.questions;
    Json(ProgressResponse {
        progress: compute_progress(bank, &request.responses),
        validation: validate_responses(bank, &request.responses),
    })
}

/// POST /api/v1/assessment/score
///
/// Normalizes the answer set into six trait scores, derives the Holland code and
/// attaches the narrative interpretation.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let threshold = request
        .completion_threshold
        .unwrap_or(state.config.scoring.completion_threshold);
    if !(0.0..=1.0).contains(&threshold) {
        return Err(AppError::Validation(format!(
            "completion_threshold must be within [0, 1], got {threshold}"
        )));
    }

    let items = state.content.questions.response_items(&request.responses);
    let normalized = normalize(&items, Some(threshold))?;
    let code = holland_code(&normalized.scores);
    let interpretation = interpret(&normalized.scores);

    info!(
        "Scored assessment: {} ({} of {} answered)",
        code, normalized.answered, normalized.total
    );
    if normalized.has_missing_data() {
        warn!(
            "Assessment scored with no answers for {:?}",
            normalized.missing_axes
        );
    }

    Ok(Json(ScoreResponse {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        holland_code: code,
        missing_axes: normalized.missing_axes,
        answered: normalized.answered,
        total: normalized.total,
        scores: normalized.scores,
        interpretation,
    }))
}
