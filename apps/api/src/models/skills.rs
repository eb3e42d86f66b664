use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::riasec::TraitAxis;

/// Named self-assessment levels, spread evenly over the rating scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ConfidenceLevel {
    /// Share of the scale maximum this level represents.
    pub fn fraction(self) -> f64 {
        match self {
            ConfidenceLevel::Beginner => 0.25,
            ConfidenceLevel::Intermediate => 0.5,
            ConfidenceLevel::Advanced => 0.75,
            ConfidenceLevel::Expert => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfidenceRating {
    Level(u8),
    Named(ConfidenceLevel),
}

fn default_scale_max() -> u8 {
    5
}

/// Skill → confidence ratings on a `1..=scale_max` scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillConfidence {
    pub ratings: BTreeMap<String, ConfidenceRating>,
    #[serde(default = "default_scale_max")]
    pub scale_max: u8,
}

impl SkillConfidence {
    pub fn new(scale_max: u8) -> Self {
        Self {
            ratings: BTreeMap::new(),
            scale_max,
        }
    }

    pub fn rate(&mut self, skill: impl Into<String>, rating: ConfidenceRating) {
        self.ratings.insert(skill.into(), rating);
    }
}

/// Where a skill's confidence lands and how much it counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillTraitEntry {
    Weighted {
        #[serde(rename = "type")]
        axis: TraitAxis,
        weight: f64,
    },
    Axis(TraitAxis),
}

impl SkillTraitEntry {
    pub fn axis(&self) -> TraitAxis {
        match *self {
            SkillTraitEntry::Weighted { axis, .. } | SkillTraitEntry::Axis(axis) => axis,
        }
    }

    pub fn weight(&self) -> f64 {
        match *self {
            SkillTraitEntry::Weighted { weight, .. } => weight,
            SkillTraitEntry::Axis(_) => 1.0,
        }
    }
}

/// Shortest name that may take part in a containment match.
const MIN_PARTIAL_LEN: usize = 3;

/// Externally maintained skill → trait table. May lag behind the skill catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillTraitTable {
    #[serde(rename = "skill_riasec_mapping")]
    pub entries: BTreeMap<String, SkillTraitEntry>,
}

impl SkillTraitTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact name first, then case-insensitive, then containment in either direction.
    /// Blank names never match; containment needs both names to be at least
    /// `MIN_PARTIAL_LEN` characters.
    pub fn lookup(&self, skill: &str) -> Option<&SkillTraitEntry> {
        let skill = skill.trim();
        if skill.is_empty() {
            return None;
        }
        if let Some(entry) = self.entries.get(skill) {
            return Some(entry);
        }
        let skill_lower = skill.to_lowercase();
        if let Some((_, entry)) = self
            .entries
            .iter()
            .find(|(name, _)| name.trim().to_lowercase() == skill_lower)
        {
            return Some(entry);
        }
        if skill_lower.chars().count() < MIN_PARTIAL_LEN {
            return None;
        }
        self.entries
            .iter()
            .find(|(name, _)| {
                let name_lower = name.trim().to_lowercase();
                name_lower.chars().count() >= MIN_PARTIAL_LEN
                    && (name_lower.contains(&skill_lower) || skill_lower.contains(&name_lower))
            })
            .map(|(_, entry)| entry)
    }

    /// Built-in table used when no mapping file is configured.
    pub fn builtin() -> Self {
        use TraitAxis::*;

        const DEFAULTS: &[(&str, TraitAxis)] = &[
            ("Equipment Operation", Realistic),
            ("Mechanical Skills", Realistic),
            ("Physical Coordination", Realistic),
            ("Tool Usage", Realistic),
            ("Construction", Realistic),
            ("Repair & Maintenance", Realistic),
            ("Technical Drawing", Realistic),
            ("Safety Procedures", Realistic),
            ("Manufacturing", Realistic),
            ("Data Analysis", Investigative),
            ("Research", Investigative),
            ("Problem Solving", Investigative),
            ("Critical Thinking", Investigative),
            ("Scientific Method", Investigative),
            ("Statistical Analysis", Investigative),
            ("Laboratory Skills", Investigative),
            ("Hypothesis Testing", Investigative),
            ("Technical Writing", Investigative),
            ("Systems Analysis", Investigative),
            ("Creative Design", Artistic),
            ("Writing", Artistic),
            ("Visual Arts", Artistic),
            ("Music/Performance", Artistic),
            ("Innovation", Artistic),
            ("Storytelling", Artistic),
            ("Photography", Artistic),
            ("Video Production", Artistic),
            ("Graphic Design", Artistic),
            ("User Experience Design", Artistic),
            ("Communication", Social),
            ("Teaching", Social),
            ("Counseling", Social),
            ("Team Collaboration", Social),
            ("Customer Service", Social),
            ("Empathy", Social),
            ("Active Listening", Social),
            ("Conflict Resolution", Social),
            ("Mentoring", Social),
            ("Public Relations", Social),
            ("Leadership", Enterprising),
            ("Sales", Enterprising),
            ("Negotiation", Enterprising),
            ("Strategic Planning", Enterprising),
            ("Public Speaking", Enterprising),
            ("Business Development", Enterprising),
            ("Marketing", Enterprising),
            ("Project Management", Enterprising),
            ("Entrepreneurship", Enterprising),
            ("Risk Management", Enterprising),
            ("Organization", Conventional),
            ("Data Entry", Conventional),
            ("Record Keeping", Conventional),
            ("Quality Control", Conventional),
            ("Process Management", Conventional),
            ("Compliance", Conventional),
            ("Accounting", Conventional),
            ("Documentation", Conventional),
            ("Scheduling", Conventional),
            ("Database Management", Conventional),
        ];

        Self {
            entries: DEFAULTS
                .iter()
                .map(|&(skill, axis)| (skill.to_string(), SkillTraitEntry::Axis(axis)))
                .collect(),
        }
    }
}
