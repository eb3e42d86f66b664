//! Trait Score Normalizer: weighted Likert responses to six 0–100 trait scores.
//!
//! `score = 100 × Σ(weight × value) / Σ(weight × 5)` per axis, over answered items only.
//! Unanswered items drop out of both sums, so a partial assessment is scored on
//! what was answered rather than penalized as if the rest were zeros.

use serde::Serialize;
use tracing::debug;

use crate::errors::ScoringError;
use crate::models::assessment::{ResponseItem, LIKERT_MAX, LIKERT_MIN};
use crate::models::riasec::{TraitAxis, TraitVector, MAX_SCORE};

/// Normalizer output: the vector plus which axes had nothing to score.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedScores {
    pub scores: TraitVector,
    /// Axes with zero answered items. Their score is 0 but carries no information.
    pub missing_axes: Vec<TraitAxis>,
    pub answered: usize,
    pub total: usize,
}

impl NormalizedScores {
    pub fn has_missing_data(&self) -> bool {
        !self.missing_axes.is_empty()
    }

    pub fn completion(&self) -> f64 {
        completion_ratio(self.answered, self.total)
    }
}

/// Normalizes `items` into a complete `TraitVector`.
///
/// `completion_threshold` is the fraction (0–1) of items that must be answered;
/// `None` or `0.0` accepts any partial set.
pub fn normalize(
    items: &[ResponseItem],
    completion_threshold: Option<f64>,
) -> Result<NormalizedScores, ScoringError> {
    let total = items.len();
    let answered = items.iter().filter(|i| i.value.is_some()).count();

    if let Some(required) = completion_threshold.filter(|t| *t > 0.0) {
        if completion_ratio(answered, total) < required {
            return Err(ScoringError::IncompleteAssessment {
                answered,
                total,
                required: required * 100.0,
            });
        }
    }

    let mut weighted_sum = [0.0_f64; 6];
    let mut weighted_max = [0.0_f64; 6];

    for item in items {
        let Some(value) = item.value else {
            continue;
        };
        if !(LIKERT_MIN..=LIKERT_MAX).contains(&value) {
            return Err(ScoringError::InvalidResponse {
                question_id: item.question_id,
                value,
            });
        }
        let slot = item.axis as usize;
        weighted_sum[slot] += item.weight * f64::from(value);
        weighted_max[slot] += item.weight * f64::from(LIKERT_MAX);
    }

    let mut scores = [0.0_f64; 6];
    let mut missing_axes = Vec::new();
    for (slot, axis) in TraitAxis::ALL.into_iter().enumerate() {
        if weighted_max[slot] > 0.0 {
            scores[slot] = (MAX_SCORE * weighted_sum[slot] / weighted_max[slot]).clamp(0.0, MAX_SCORE);
        } else {
            missing_axes.push(axis);
        }
    }

    if !missing_axes.is_empty() {
        debug!("Normalized with no answered items for axes {:?}", missing_axes);
    }

    Ok(NormalizedScores {
        scores: TraitVector::new(scores)?,
        missing_axes,
        answered,
        total,
    })
}

fn completion_ratio(answered: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        answered as f64 / total as f64
    }
}
