use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::career::{CareerRecord, Difficulty};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Importance {
    Medium,
    High,
}

/// A required skill the user does not list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillGap {
    pub skill: String,
    pub importance: Importance,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Serialize)]
pub struct CareerSkillGaps {
    pub career_id: String,
    pub title: String,
    pub gaps: Vec<SkillGap>,
    /// Share of required skills already held, 0–100.
    pub coverage: u32,
}

/// Required skills of `career` missing from `user_skills` (case-insensitive).
/// Core skills rank High and come first; otherwise catalog order is kept.
pub fn analyze_skill_gaps(career: &CareerRecord, user_skills: &[String]) -> CareerSkillGaps {
    let held: HashSet<String> = user_skills.iter().map(|s| s.to_lowercase()).collect();
    let core: HashSet<String> = career.core_skills.iter().map(|s| s.to_lowercase()).collect();

    let mut gaps: Vec<SkillGap> = career
        .required_skills
        .iter()
        .filter(|skill| !held.contains(&skill.to_lowercase()))
        .map(|skill| SkillGap {
            skill: skill.clone(),
            importance: if core.contains(&skill.to_lowercase()) {
                Importance::High
            } else {
                Importance::Medium
            },
            difficulty: career.difficulty_of(skill),
        })
        .collect();
    gaps.sort_by(|a, b| b.importance.cmp(&a.importance));

    let required = career.required_skills.len();
    let coverage = if required == 0 {
        100
    } else {
        (((required - gaps.len()) as f64 / required as f64) * 100.0).round() as u32
    };

    CareerSkillGaps {
        career_id: career.id.clone(),
        title: career.title.clone(),
        gaps,
        coverage,
    }
}
