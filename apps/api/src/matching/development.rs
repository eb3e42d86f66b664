//! Phased learning plans built from a career's skill gaps.

use serde::Serialize;

use crate::matching::skill_gaps::{CareerSkillGaps, Importance, SkillGap};
use crate::models::career::{CareerRecord, Difficulty, EducationLevel};

const MAX_PHASE_SKILLS: usize = 5;

const SUCCESS_FACTORS: [&str; 4] = [
    "Consistent daily practice",
    "Real-world project application",
    "Networking in the field",
    "Continuous learning mindset",
];

#[derive(Debug, Clone, Serialize)]
pub struct DevelopmentPhase {
    pub phase: u32,
    pub title: &'static str,
    pub duration: &'static str,
    pub skills: Vec<SkillGap>,
    pub focus: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EntryOption {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: String,
    pub duration: &'static str,
    pub pros: [&'static str; 3],
    pub cons: [&'static str; 3],
}

#[derive(Debug, Clone, Serialize)]
pub struct DevelopmentPath {
    pub career_id: String,
    pub title: String,
    pub total_duration: String,
    pub phases: Vec<DevelopmentPhase>,
    pub entry_options: Vec<EntryOption>,
    pub success_factors: [&'static str; 4],
}

/// Groups gaps into foundation, advanced core and complementary phases.
/// Empty phases are skipped and the remaining ones numbered consecutively.
pub fn development_path(career: &CareerRecord, gaps: &CareerSkillGaps) -> DevelopmentPath {
    let candidates = [
        (
            "Foundation Skills",
            "3-6 months",
            "Build essential skills for immediate impact",
            select(&gaps.gaps, |g| {
                g.importance == Importance::High && g.difficulty != Difficulty::Hard
            }),
        ),
        (
            "Advanced Core Skills",
            "6-12 months",
            "Master complex skills critical to the role",
            select(&gaps.gaps, |g| {
                g.importance == Importance::High && g.difficulty == Difficulty::Hard
            }),
        ),
        (
            "Complementary Skills",
            "3-6 months",
            "Round out your skill set for career advancement",
            select(&gaps.gaps, |g| g.importance == Importance::Medium),
        ),
    ];

    let phases: Vec<DevelopmentPhase> = candidates
        .into_iter()
        .filter(|(_, _, _, skills)| !skills.is_empty())
        .zip(1..)
        .map(|((title, duration, focus, skills), phase)| DevelopmentPhase {
            phase,
            title,
            duration,
            skills,
            focus,
        })
        .collect();

    let total_duration = match phases.len() {
        0 => "Ready now".to_string(),
        n => format!("{}-{} months", n * 6, n * 12),
    };

    DevelopmentPath {
        career_id: career.id.clone(),
        title: career.title.clone(),
        total_duration,
        phases,
        entry_options: entry_options(career),
        success_factors: SUCCESS_FACTORS,
    }
}

fn select(gaps: &[SkillGap], keep: impl Fn(&SkillGap) -> bool) -> Vec<SkillGap> {
    gaps.iter()
        .filter(|g| keep(g))
        .take(MAX_PHASE_SKILLS)
        .cloned()
        .collect()
}

/// Ways into the career. A missing education level is treated as a bachelor's degree.
pub fn entry_options(career: &CareerRecord) -> Vec<EntryOption> {
    let level = career.education_level.unwrap_or(EducationLevel::Bachelor);
    let mut options = Vec::new();

    if level.is_degree() {
        options.push(EntryOption {
            kind: "Traditional Education",
            description: format!("Complete a {} in a related field", level.degree_name()),
            duration: "2-6 years",
            pros: ["Comprehensive knowledge", "Networking opportunities", "Credentials"],
            cons: ["Time intensive", "Costly", "May include irrelevant coursework"],
        });
    }

    if career.certifications_available {
        options.push(EntryOption {
            kind: "Bootcamp/Certification",
            description: "Intensive training programs and industry certifications".to_string(),
            duration: "3-12 months",
            pros: ["Focused learning", "Practical skills", "Faster entry"],
            cons: ["Intensive pace", "Limited depth", "Requires self-discipline"],
        });
    }

    options.push(EntryOption {
        kind: "Self-Directed Learning",
        description: "Online courses, tutorials, and personal projects".to_string(),
        duration: "6-18 months",
        pros: ["Flexible schedule", "Cost-effective", "Learn at your pace"],
        cons: ["Requires discipline", "No formal credentials", "Limited networking"],
    });

    if career.apprenticeships_common {
        options.push(EntryOption {
            kind: "Apprenticeship/Internship",
            description: "Learn while working under experienced professionals".to_string(),
            duration: "6-24 months",
            pros: ["Paid learning", "Real experience", "Mentorship"],
            cons: ["Competitive entry", "Lower initial pay", "Limited positions"],
        });
    }

    options
}
