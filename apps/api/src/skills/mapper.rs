//! Skills-Confidence Mapper: self-rated skill confidence onto the six trait axes.
//!
//! Per axis: `100 × Σ(weight × rating / scale_max) / Σ weight` over the skills the
//! table maps to that axis. The result sits on the same 0–100 scale as interest scores.

use serde::Serialize;
use tracing::warn;

use crate::errors::ScoringError;
use crate::models::riasec::{TraitAxis, TraitVector, MAX_SCORE};
use crate::models::skills::{ConfidenceRating, SkillConfidence, SkillTraitTable};

/// A rated skill the mapping table has no entry for. Non-fatal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnmappedSkillWarning {
    pub skill: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillMapping {
    pub scores: TraitVector,
    /// Axes no rated skill mapped to.
    pub missing_axes: Vec<TraitAxis>,
    pub warnings: Vec<UnmappedSkillWarning>,
}

pub fn map_skills(
    confidence: &SkillConfidence,
    table: &SkillTraitTable,
) -> Result<SkillMapping, ScoringError> {
    let scale_max = confidence.scale_max.max(1);

    let mut weighted_sum = [0.0_f64; 6];
    let mut weight_total = [0.0_f64; 6];
    let mut warnings = Vec::new();

    for (skill, rating) in &confidence.ratings {
        let fraction = rating_fraction(skill, *rating, scale_max)?;

        let Some(entry) = table.lookup(skill) else {
            warn!("Skill '{}' has no trait mapping; ignoring", skill);
            warnings.push(UnmappedSkillWarning {
                skill: skill.clone(),
            });
            continue;
        };

        let slot = entry.axis() as usize;
        weighted_sum[slot] += entry.weight() * fraction;
        weight_total[slot] += entry.weight();
    }

    let mut scores = [0.0_f64; 6];
    let mut missing_axes = Vec::new();
    for (slot, axis) in TraitAxis::ALL.into_iter().enumerate() {
        if weight_total[slot] > 0.0 {
            scores[slot] = (MAX_SCORE * weighted_sum[slot] / weight_total[slot]).clamp(0.0, MAX_SCORE);
        } else {
            missing_axes.push(axis);
        }
    }

    Ok(SkillMapping {
        scores: TraitVector::new(scores)?,
        missing_axes,
        warnings,
    })
}

fn rating_fraction(skill: &str, rating: ConfidenceRating, scale_max: u8) -> Result<f64, ScoringError> {
    match rating {
        ConfidenceRating::Named(level) => Ok(level.fraction()),
        ConfidenceRating::Level(value) if (1..=scale_max).contains(&value) => {
            Ok(f64::from(value) / f64::from(scale_max))
        }
        ConfidenceRating::Level(value) => Err(ScoringError::InvalidRating {
            skill: skill.to_string(),
            value,
            max: scale_max,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::skills::{ConfidenceLevel, SkillTraitEntry};

    fn table() -> SkillTraitTable {
        let mut table = SkillTraitTable::default();
        table.entries.insert(
            "Leadership".to_string(),
            SkillTraitEntry::Axis(TraitAxis::Enterprising),
        );
        table.entries.insert(
            "Sales".to_string(),
            SkillTraitEntry::Weighted {
                axis: TraitAxis::Enterprising,
                weight: 0.5,
            },
        );
        table.entries.insert(
            "Research".to_string(),
            SkillTraitEntry::Axis(TraitAxis::Investigative),
        );
        table
    }

    #[test]
    fn test_many_skills_to_one_axis_use_weighted_mean() {
        let mut confidence = SkillConfidence::new(5);
        confidence.rate("Leadership", ConfidenceRating::Level(5));
        confidence.rate("Sales", ConfidenceRating::Level(2));
        let mapping = map_skills(&confidence, &table()).unwrap();
        // (1.0×1.0 + 0.5×0.4) / 1.5 = 0.8
        assert!((mapping.scores.score(TraitAxis::Enterprising) - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_named_levels_use_scale_fraction() {
        let mut confidence = SkillConfidence::new(5);
        confidence.rate("Research", ConfidenceRating::Named(ConfidenceLevel::Advanced));
        let mapping = map_skills(&confidence, &table()).unwrap();
        assert_eq!(mapping.scores.score(TraitAxis::Investigative), 75.0);
    }

    #[test]
    fn test_unmapped_skill_warns_without_failing() {
        let mut confidence = SkillConfidence::new(5);
        confidence.rate("Juggling", ConfidenceRating::Level(5));
        confidence.rate("Research", ConfidenceRating::Level(5));
        let mapping = map_skills(&confidence, &table()).unwrap();
        assert_eq!(
            mapping.warnings,
            vec![UnmappedSkillWarning {
                skill: "Juggling".to_string()
            }]
        );
        assert_eq!(mapping.scores.score(TraitAxis::Investigative), 100.0);
    }

    #[test]
    fn test_blank_and_short_skill_names_are_unmapped() {
        let mut confidence = SkillConfidence::new(5);
        for name in ["", " ", "R", "Go"] {
            confidence.rate(name, ConfidenceRating::Level(5));
        }
        let mapping = map_skills(&confidence, &SkillTraitTable::builtin()).unwrap();

        let warned: Vec<_> = mapping.warnings.iter().map(|w| w.skill.as_str()).collect();
        assert_eq!(warned, vec!["", " ", "Go", "R"]);
        for axis in TraitAxis::ALL {
            assert_eq!(mapping.scores.score(axis), 0.0);
        }
        assert_eq!(mapping.missing_axes, TraitAxis::ALL.to_vec());
    }

    #[test]
    fn test_axes_without_skills_are_missing() {
        let mut confidence = SkillConfidence::new(5);
        confidence.rate("Research", ConfidenceRating::Level(3));
        let mapping = map_skills(&confidence, &table()).unwrap();
        assert!(mapping.scores.is_complete());
        assert_eq!(mapping.missing_axes.len(), 5);
        assert!(!mapping.missing_axes.contains(&TraitAxis::Investigative));
    }

    #[test]
    fn test_rating_above_scale_is_rejected() {
        let mut confidence = SkillConfidence::new(4);
        confidence.rate("Research", ConfidenceRating::Level(5));
        assert_eq!(
            map_skills(&confidence, &table()).unwrap_err(),
            ScoringError::InvalidRating {
                skill: "Research".to_string(),
                value: 5,
                max: 4
            }
        );
    }

    #[test]
    fn test_four_point_scale_matches_named_levels() {
        let mut numeric = SkillConfidence::new(4);
        numeric.rate("Research", ConfidenceRating::Level(2));
        let mut named = SkillConfidence::new(4);
        named.rate("Research", ConfidenceRating::Named(ConfidenceLevel::Intermediate));
        assert_eq!(
            map_skills(&numeric, &table()).unwrap().scores,
            map_skills(&named, &table()).unwrap().scores
        );
    }
}
