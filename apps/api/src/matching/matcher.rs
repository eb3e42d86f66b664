//! Career Similarity Matcher: ranks catalog careers against a trait profile.
//!
//! Composite score = weighted mean of three factors, each in [0, 1]:
//! 1. Primary: 1.0 when the career's first letter is the profile's top axis,
//!    decaying linearly with that letter's rank in the profile (rank 5 → 0).
//! 2. Secondary: the profile's 2nd axis counts 2/3, its 3rd 1/3, when listed by the career.
//! 3. Overall: cosine similarity of the full six-axis vectors.
//!
//! Ordering is a stable sort on the composite, so equal scores keep catalog order.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::assessment::holland::holland_code;
use crate::errors::ScoringError;
use crate::matching::similarity::{career_profile, cosine_similarity, rank_of};
use crate::matching::weights::{compute_composite_score, MatchWeights};
use crate::models::career::CareerRecord;
use crate::models::riasec::{HollandCode, TraitAxis, TraitVector};

const SECOND_AXIS_SHARE: f64 = 2.0 / 3.0;
const THIRD_AXIS_SHARE: f64 = 1.0 / 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct MatchSettings {
    pub weights: MatchWeights,
    pub top_n: usize,
    /// Careers scoring below this composite are dropped; 0 keeps everything.
    pub min_floor: f64,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            weights: MatchWeights::default(),
            top_n: 10,
            min_floor: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactorBreakdown {
    pub primary: f64,
    pub secondary: f64,
    pub overall: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub career: CareerRecord,
    /// Composite in [0, 1].
    pub score: f64,
    /// Composite as a rounded percentage.
    pub match_percent: u32,
    pub breakdown: FactorBreakdown,
    pub reasons: Vec<String>,
}

/// Scores every career in `catalog` against `profile` and returns the best `top_n`.
pub fn match_careers(
    profile: &TraitVector,
    catalog: &[CareerRecord],
    settings: &MatchSettings,
) -> Result<Vec<MatchResult>, ScoringError> {
    if catalog.is_empty() {
        return Err(ScoringError::EmptyCatalog);
    }
    settings.weights.validate()?;

    let ranking = profile.ranked_axes();
    let code = HollandCode::from_ranked(ranking);
    let profile_vector = profile.to_array();

    let mut seen = HashSet::new();
    let mut results: Vec<MatchResult> = catalog
        .iter()
        .filter(|career| seen.insert(career.id.as_str()))
        .map(|career| score_career(career, &ranking, &code, &profile_vector, &settings.weights))
        .filter(|result| result.score >= settings.min_floor)
        .collect();

    // Stable: equal scores keep catalog insertion order.
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results.truncate(settings.top_n);

    debug!(
        "Matched {} of {} careers for profile {}",
        results.len(),
        catalog.len(),
        code
    );

    Ok(results)
}

/// Holland letters for a career, derived from its explicit profile when none are listed.
fn career_letters(career: &CareerRecord) -> Vec<TraitAxis> {
    if !career.holland_codes.is_empty() {
        return career.holland_codes.clone();
    }
    match &career.profile {
        Some(profile) => holland_code(profile).axes().to_vec(),
        None => Vec::new(),
    }
}

fn score_career(
    career: &CareerRecord,
    ranking: &[TraitAxis; 6],
    code: &HollandCode,
    profile_vector: &[f64; 6],
    weights: &MatchWeights,
) -> MatchResult {
    let letters = career_letters(career);

    let primary = match letters.first() {
        Some(&first) => 1.0 - rank_of(ranking, first) as f64 / (ranking.len() - 1) as f64,
        None => 0.0,
    };

    let [second, third] = code.secondary();
    let mut secondary = 0.0;
    if letters.contains(&second) {
        secondary += SECOND_AXIS_SHARE;
    }
    if letters.contains(&third) {
        secondary += THIRD_AXIS_SHARE;
    }

    let overall = cosine_similarity(profile_vector, &career_profile(career));

    let score = compute_composite_score(primary, secondary, overall, weights);
    let match_percent = (score * 100.0).round() as u32;

    MatchResult {
        career: career.clone(),
        score,
        match_percent,
        breakdown: FactorBreakdown {
            primary,
            secondary,
            overall,
        },
        reasons: build_match_reasons(match_percent, code, &letters),
    }
}

/// Builds human-readable reasons from score band and letter overlap.
fn build_match_reasons(match_percent: u32, code: &HollandCode, letters: &[TraitAxis]) -> Vec<String> {
    let mut reasons = Vec::new();

    if match_percent >= 80 {
        reasons.push("Excellent match with your personality profile".to_string());
    } else if match_percent >= 60 {
        reasons.push("Strong alignment with your interests".to_string());
    } else if match_percent >= 40 {
        reasons.push("Good compatibility with your preferences".to_string());
    }

    if letters.first() == Some(&code.primary()) {
        reasons.push(format!("Primary type match ({})", code.primary()));
    }

    let shared: Vec<String> = code
        .secondary()
        .iter()
        .filter(|axis| letters.contains(axis))
        .map(|axis| axis.to_string())
        .collect();
    if !shared.is_empty() {
        reasons.push(format!("Secondary type alignment ({})", shared.join(", ")));
    }

    reasons
}
