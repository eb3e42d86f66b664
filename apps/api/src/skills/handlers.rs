//! Axum route handlers for the Skills API.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::riasec::TraitVector;
use crate::models::skills::{ConfidenceRating, SkillConfidence};
use crate::skills::gap::{analyze_gap, summarize_gaps, GapClassification, GapSummary};
use crate::skills::mapper::{map_skills, SkillMapping};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MapSkillsRequest {
    pub ratings: BTreeMap<String, ConfidenceRating>,
    /// Overrides CONFIDENCE_SCALE_MAX for this request.
    pub scale_max: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct GapRequest {
    pub interest: TraitVector,
    pub skill: TraitVector,
    pub threshold: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct GapResponse {
    pub classifications: Vec<GapClassification>,
    pub summary: GapSummary,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub interest: TraitVector,
    pub ratings: BTreeMap<String, ConfidenceRating>,
    pub scale_max: Option<u8>,
    pub threshold: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub mapping: SkillMapping,
    pub classifications: Vec<GapClassification>,
    pub summary: GapSummary,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/skills/map
pub async fn handle_map(
    State(state): State<AppState>,
    Json(request): Json<MapSkillsRequest>,
) -> Result<Json<SkillMapping>, AppError> {
    let confidence = confidence_from(&state, request.ratings, request.scale_max)?;
    Ok(Json(map_skills(&confidence, &state.content.skill_map)?))
}

/// POST /api/v1/skills/gap
pub async fn handle_gap(
    State(state): State<AppState>,
    Json(request): Json<GapRequest>,
) -> Result<Json<GapResponse>, AppError> {
    let threshold = gap_threshold(&state, request.threshold)?;
    let classifications = analyze_gap(&request.interest, &request.skill, threshold)?;
    let summary = summarize_gaps(&classifications, threshold);
    Ok(Json(GapResponse {
        classifications,
        summary,
    }))
}

/// POST /api/v1/skills/compare
///
/// Maps skill ratings onto the trait axes, then compares them against the
/// interest profile in one call.
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, AppError> {
    let threshold = gap_threshold(&state, request.threshold)?;
    let confidence = confidence_from(&state, request.ratings, request.scale_max)?;
    let mapping = map_skills(&confidence, &state.content.skill_map)?;
    let classifications = analyze_gap(&request.interest, &mapping.scores, threshold)?;
    let summary = summarize_gaps(&classifications, threshold);
    Ok(Json(CompareResponse {
        mapping,
        classifications,
        summary,
    }))
}

fn confidence_from(
    state: &AppState,
    ratings: BTreeMap<String, ConfidenceRating>,
    scale_max: Option<u8>,
) -> Result<SkillConfidence, AppError> {
    let scale_max = scale_max.unwrap_or(state.config.scoring.confidence_scale_max);
    if scale_max == 0 {
        return Err(AppError::Validation(
            "scale_max must be at least 1".to_string(),
        ));
    }
    let mut confidence = SkillConfidence::new(scale_max);
    for (skill, rating) in ratings {
        confidence.rate(skill, rating);
    }
    Ok(confidence)
}

fn gap_threshold(state: &AppState, requested: Option<f64>) -> Result<f64, AppError> {
    let threshold = requested.unwrap_or(state.config.scoring.gap_threshold);
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(AppError::Validation(format!(
            "threshold must be a non-negative number, got {threshold}"
        )));
    }
    Ok(threshold)
}
