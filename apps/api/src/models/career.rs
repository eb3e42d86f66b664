use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::riasec::{TraitAxis, TraitVector};

/// Minimum schooling a career expects, ordered from least to most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    HighSchool,
    Associate,
    Bachelor,
    Master,
    Doctoral,
}

impl EducationLevel {
    /// True for levels that imply a university degree.
    pub fn is_degree(self) -> bool {
        self >= EducationLevel::Bachelor
    }

    pub fn degree_name(self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "high school diploma",
            EducationLevel::Associate => "associate degree",
            EducationLevel::Bachelor => "bachelor's degree",
            EducationLevel::Master => "master's degree",
            EducationLevel::Doctoral => "doctoral degree",
        }
    }
}

/// Where a career usually sits on the seniority ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeniorityLevel {
    Entry,
    #[default]
    Mid,
    Senior,
}

/// How hard a skill is to pick up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

fn default_true() -> bool {
    true
}

/// A read-only career catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Holland letters, most characteristic first. May be empty when `profile` is given.
    #[serde(default)]
    pub holland_codes: Vec<TraitAxis>,
    /// Explicit six-axis ideal profile; expanded from `holland_codes` when absent.
    #[serde(default)]
    pub profile: Option<TraitVector>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub core_skills: Vec<String>,
    #[serde(default)]
    pub education_level: Option<EducationLevel>,
    #[serde(default)]
    pub salary_range_min: Option<u32>,
    #[serde(default)]
    pub salary_range_max: Option<u32>,
    /// Projected growth, percent.
    #[serde(default)]
    pub growth_outlook: Option<f64>,
    #[serde(default)]
    pub seniority_level: SeniorityLevel,
    /// Skill → difficulty; unlisted skills are `Medium`.
    #[serde(default)]
    pub skill_difficulty: BTreeMap<String, Difficulty>,
    #[serde(default = "default_true")]
    pub certifications_available: bool,
    #[serde(default)]
    pub apprenticeships_common: bool,
}

impl CareerRecord {
    pub fn lists_axis(&self, axis: TraitAxis) -> bool {
        self.holland_codes.contains(&axis)
    }

    /// Case-insensitive difficulty lookup.
    pub fn difficulty_of(&self, skill: &str) -> Difficulty {
        self.skill_difficulty
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(skill))
            .map(|(_, difficulty)| *difficulty)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_record() {
        let career: CareerRecord = serde_json::from_str(
            r#"{"id": "data-scientist", "title": "Data Scientist", "holland_codes": ["I", "C", "R"]}"#,
        )
        .unwrap();
        assert_eq!(career.holland_codes.first(), Some(&TraitAxis::Investigative));
        assert!(career.lists_axis(TraitAxis::Conventional));
        assert!(!career.lists_axis(TraitAxis::Social));
        assert!(career.profile.is_none());
        assert_eq!(career.seniority_level, SeniorityLevel::Mid);
        assert!(career.certifications_available);
        assert!(!career.apprenticeships_common);
    }

    #[test]
    fn test_profile_only_record_deserializes() {
        let career: CareerRecord = serde_json::from_str(
            r#"{"id": "lab-tech", "title": "Lab Technician",
                "profile": {"R": 70, "I": 90, "A": 10, "S": 20, "E": 10, "C": 60}}"#,
        )
        .unwrap();
        assert!(career.holland_codes.is_empty());
        assert_eq!(
            career.profile.unwrap().score(TraitAxis::Investigative),
            90.0
        );
    }

    #[test]
    fn test_difficulty_defaults_to_medium() {
        let career: CareerRecord = serde_json::from_str(
            r#"{"id": "x", "title": "X", "skill_difficulty": {"Calculus": "Hard"}}"#,
        )
        .unwrap();
        assert_eq!(career.difficulty_of("calculus"), Difficulty::Hard);
        assert_eq!(career.difficulty_of("Typing"), Difficulty::Medium);
    }

    #[test]
    fn test_education_levels_are_ordered() {
        assert!(EducationLevel::HighSchool < EducationLevel::Bachelor);
        assert!(EducationLevel::Doctoral > EducationLevel::Master);
        let level: EducationLevel = serde_json::from_str("\"high_school\"").unwrap();
        assert_eq!(level, EducationLevel::HighSchool);
    }
}
