//! Gap Analysis Engine: per-axis interest vs. skill comparison.

use serde::Serialize;

use crate::errors::ScoringError;
use crate::models::riasec::{TraitAxis, TraitVector};

/// Both scores must exceed this for an axis to count as a strongest alignment.
const STRONG_SCORE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GapLabel {
    Aligned,
    /// Interest clearly above skill.
    DevelopmentOpportunity,
    /// Skill clearly above interest.
    UnderutilizedStrength,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapClassification {
    pub axis: TraitAxis,
    pub interest: f64,
    pub skill: f64,
    /// interest − skill
    pub delta: f64,
    pub label: GapLabel,
}

pub fn classify_delta(delta: f64, threshold: f64) -> GapLabel {
    if delta > threshold {
        GapLabel::DevelopmentOpportunity
    } else if delta < -threshold {
        GapLabel::UnderutilizedStrength
    } else {
        GapLabel::Aligned
    }
}

/// Classifies every axis. Both vectors must carry the same axes.
pub fn analyze_gap(
    interest: &TraitVector,
    skill: &TraitVector,
    threshold: f64,
) -> Result<Vec<GapClassification>, ScoringError> {
    let missing_from_interest: Vec<TraitAxis> =
        skill.axes().filter(|axis| !interest.contains(*axis)).collect();
    let missing_from_skill: Vec<TraitAxis> =
        interest.axes().filter(|axis| !skill.contains(*axis)).collect();

    if !missing_from_interest.is_empty() || !missing_from_skill.is_empty() {
        return Err(ScoringError::MismatchedAxisSet {
            missing_from_interest,
            missing_from_skill,
        });
    }

    Ok(interest
        .iter()
        .map(|(axis, interest_score)| {
            let skill_score = skill.score(axis);
            let delta = interest_score - skill_score;
            GapClassification {
                axis,
                interest: interest_score,
                skill: skill_score,
                delta,
                label: classify_delta(delta, threshold),
            }
        })
        .collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GapDirection {
    SkillsNeeded,
    UnderutilizedSkills,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisGap {
    pub axis: TraitAxis,
    pub interest: f64,
    pub skill: f64,
    pub gap: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BiggestGap {
    #[serde(flatten)]
    pub gap: AxisGap,
    pub direction: GapDirection,
}

#[derive(Debug, Clone, Serialize)]
pub struct GapSummary {
    /// 100 − mean |delta|, floored at 0.
    pub overall_alignment: f64,
    pub strongest_alignment: Option<AxisGap>,
    pub biggest_gap: Option<BiggestGap>,
    pub insights: Vec<String>,
}

/// Aggregates classifications into headline figures and insight text.
pub fn summarize_gaps(classifications: &[GapClassification], threshold: f64) -> GapSummary {
    if classifications.is_empty() {
        return GapSummary {
            overall_alignment: 100.0,
            strongest_alignment: None,
            biggest_gap: None,
            insights: vec![],
        };
    }

    let mean_abs_delta = classifications.iter().map(|c| c.delta.abs()).sum::<f64>()
        / classifications.len() as f64;
    let overall_alignment = ((100.0 - mean_abs_delta).max(0.0) * 10.0).round() / 10.0;

    let axis_gap = |c: &GapClassification| AxisGap {
        axis: c.axis,
        interest: c.interest,
        skill: c.skill,
        gap: c.delta,
    };

    // First minimum wins, so ties resolve in canonical axis order.
    let strongest_alignment = classifications
        .iter()
        .filter(|c| c.interest > STRONG_SCORE && c.skill > STRONG_SCORE)
        .fold(None::<&GapClassification>, |best, c| match best {
            Some(b) if b.delta.abs() <= c.delta.abs() => Some(b),
            _ => Some(c),
        })
        .map(axis_gap);

    let biggest_gap = classifications
        .iter()
        .filter(|c| c.delta != 0.0)
        .fold(None::<&GapClassification>, |best, c| match best {
            Some(b) if b.delta.abs() >= c.delta.abs() => Some(b),
            _ => Some(c),
        })
        .map(|c| BiggestGap {
            gap: axis_gap(c),
            direction: if c.delta > 0.0 {
                GapDirection::SkillsNeeded
            } else {
                GapDirection::UnderutilizedSkills
            },
        });

    let mut insights = Vec::new();
    if mean_abs_delta <= threshold {
        insights.push("Your skills align well with your interests overall!".to_string());
    } else if mean_abs_delta <= threshold * 2.0 {
        insights.push("Moderate alignment between interests and skills".to_string());
    } else {
        insights.push("Significant gaps between interests and skills".to_string());
    }

    let max_positive = classifications
        .iter()
        .filter(|c| c.label == GapLabel::DevelopmentOpportunity)
        .max_by(|a, b| a.delta.total_cmp(&b.delta));
    if let Some(c) = max_positive {
        insights.push(format!("Biggest opportunity: Develop {} skills", c.axis.name()));
    }

    let max_negative = classifications
        .iter()
        .filter(|c| c.label == GapLabel::UnderutilizedStrength)
        .min_by(|a, b| a.delta.total_cmp(&b.delta));
    if let Some(c) = max_negative {
        insights.push(format!("Hidden strength: Strong {} skills", c.axis.name()));
    }

    GapSummary {
        overall_alignment,
        strongest_alignment,
        biggest_gap,
        insights,
    }
}
