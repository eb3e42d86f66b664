//! Axum route handlers for the Careers API.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assessment::holland::holland_code;
use crate::errors::AppError;
use crate::matching::development::{development_path, DevelopmentPath};
use crate::matching::matcher::{match_careers, MatchResult, MatchSettings};
use crate::matching::search::{career_insights, search_careers, CareerFilters, CareerInsights};
use crate::matching::skill_gaps::{analyze_skill_gaps, CareerSkillGaps};
use crate::matching::weights::MatchWeights;
use crate::models::career::CareerRecord;
use crate::models::riasec::{HollandCode, TraitVector};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub scores: TraitVector,
    pub top_n: Option<usize>,
    pub min_floor: Option<f64>,
    pub weights: Option<MatchWeights>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub holland_code: HollandCode,
    pub matches: Vec<MatchResult>,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub filters: CareerFilters,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub careers: Vec<CareerRecord>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct SkillGapsRequest {
    pub career_ids: Vec<String>,
    /// Skills the user already has.
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SkillGapsResponse {
    pub careers: Vec<CareerSkillGaps>,
    pub development_paths: Vec<DevelopmentPath>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/careers/match
///
/// Ranks the catalog against a trait profile. Request fields override the
/// configured weights, result count and score floor.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let scoring = &state.config.scoring;
    let settings = MatchSettings {
        weights: request.weights.unwrap_or(scoring.match_weights),
        top_n: request.top_n.unwrap_or(scoring.top_n),
        min_floor: request.min_floor.unwrap_or(scoring.min_floor),
    };

    // Request weights are caller input; configured weights were validated at startup.
    if request.weights.is_some() {
        settings
            .weights
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
    }
    if !(0.0..=1.0).contains(&settings.min_floor) {
        return Err(AppError::Validation(format!(
            "min_floor must be within [0, 1], got {}",
            settings.min_floor
        )));
    }

    let matches = match_careers(&request.scores, &state.content.careers, &settings)?;

    Ok(Json(MatchResponse {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        holland_code: holland_code(&request.scores),
        matches,
    }))
}

/// POST /api/v1/careers/search
pub async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Json<SearchResponse> {
    let careers: Vec<CareerRecord> =
        search_careers(&state.content.careers, &request.query, &request.filters)
            .into_iter()
            .cloned()
            .collect();
    Json(SearchResponse {
        total: careers.len(),
        careers,
    })
}

/// GET /api/v1/careers/:id
pub async fn handle_get_career(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CareerInsights>, AppError> {
    let career = state
        .content
        .career(&id)
        .ok_or_else(|| AppError::NotFound(format!("Career {id} not found")))?;
    Ok(Json(career_insights(&state.content.careers, career)))
}

/// POST /api/v1/careers/skill-gaps
pub async fn handle_skill_gaps(
    State(state): State<AppState>,
    Json(request): Json<SkillGapsRequest>,
) -> Result<Json<SkillGapsResponse>, AppError> {
    if request.career_ids.is_empty() {
        return Err(AppError::Validation(
            "career_ids cannot be empty".to_string(),
        ));
    }

    let mut careers = Vec::with_capacity(request.career_ids.len());
    let mut development_paths = Vec::with_capacity(request.career_ids.len());
    for id in &request.career_ids {
        let career = state
            .content
            .career(id)
            .ok_or_else(|| AppError::NotFound(format!("Career {id} not found")))?;
        let gaps = analyze_skill_gaps(career, &request.skills);
        development_paths.push(development_path(career, &gaps));
        careers.push(gaps);
    }

    Ok(Json(SkillGapsResponse {
        careers,
        development_paths,
    }))
}
