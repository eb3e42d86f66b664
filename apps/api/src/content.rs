//! Read-only content loaded once at startup: question bank, career catalog, skill map.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::assessment::{Question, QuestionBank};
use crate::models::career::CareerRecord;
use crate::models::riasec::TraitAxis;
use crate::models::skills::SkillTraitTable;

#[derive(Debug, Clone, Default)]
pub struct ContentSnapshot {
    pub questions: QuestionBank,
    pub careers: Vec<CareerRecord>,
    pub skill_map: SkillTraitTable,
}

/// On-disk shape of the career catalog file.
#[derive(Debug, Deserialize)]
struct CareerCatalogFile {
    #[serde(default)]
    careers: Vec<CareerRecord>,
}

impl ContentSnapshot {
    pub fn load(config: &Config) -> Result<Self> {
        let questions = match read_json::<QuestionBank>(&config.question_bank_path)? {
            Some(bank) => bank,
            None => {
                warn!(
                    "Question bank not found at {}; using built-in questions",
                    config.question_bank_path.display()
                );
                builtin_questions()
            }
        };
        validate_questions(&questions)?;

        let careers = match read_json::<CareerCatalogFile>(&config.career_catalog_path)? {
            Some(file) => file.careers,
            None => {
                warn!(
                    "Career catalog not found at {}; career matching is unavailable",
                    config.career_catalog_path.display()
                );
                Vec::new()
            }
        };

        let skill_map = match read_json::<SkillTraitTable>(&config.skill_map_path)? {
            Some(table) => table,
            None => {
                warn!(
                    "Skill mapping not found at {}; using built-in mapping",
                    config.skill_map_path.display()
                );
                SkillTraitTable::builtin()
            }
        };

        info!(
            "Content loaded: {} questions, {} careers, {} mapped skills",
            questions.len(),
            careers.len(),
            skill_map.len()
        );

        Ok(Self {
            questions,
            careers,
            skill_map,
        })
    }

    pub fn career(&self, career_id: &str) -> Option<&CareerRecord> {
        self.careers.iter().find(|c| c.id == career_id)
    }
}

/// `Ok(None)` when the file does not exist; parse failures are errors.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(Some(value))
}

fn validate_questions(bank: &QuestionBank) -> Result<()> {
    let mut seen = HashSet::new();
    for question in &bank.questions {
        ensure!(
            seen.insert(question.id),
            "Question bank contains duplicate id {}",
            question.id
        );
        ensure!(
            question.weight > 0.0 && question.weight <= 1.0,
            "Question {} has weight {} outside (0, 1]",
            question.id,
            question.weight
        );
    }
    Ok(())
}

/// One question per axis.
fn builtin_questions() -> QuestionBank {
    const TEXTS: [&str; 6] = [
        "I enjoy working with tools and machines",
        "I like to solve complex problems",
        "I enjoy creative activities like art, music, or writing",
        "I like helping and teaching others",
        "I enjoy leading and persuading people",
        "I prefer working with data and details",
    ];

    let questions = TraitAxis::ALL
        .into_iter()
        .zip(TEXTS)
        .enumerate()
        .map(|(i, (axis, text))| Question {
            id: i as u32 + 1,
            text: text.to_string(),
            axis,
            weight: 1.0,
            category: "interests".to_string(),
        })
        .collect();

    QuestionBank { questions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    use crate::config::ScoringConfig;
    use crate::matching::matcher::{match_careers, MatchSettings};

    fn config_in(dir: &Path) -> Config {
        Config {
            port: 0,
            rust_log: "info".to_string(),
            question_bank_path: dir.join("questions.json"),
            career_catalog_path: dir.join("careers.json"),
            skill_map_path: dir.join("skills.json"),
            scoring: ScoringConfig::default(),
        }
    }

    fn write(path: &PathBuf, body: &str) {
        let mut file = fs::File::create(path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
    }

    #[test]
    fn test_missing_files_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = ContentSnapshot::load(&config_in(dir.path())).unwrap();
        assert_eq!(snapshot.questions.len(), 6);
        assert!(snapshot.careers.is_empty());
        assert!(!snapshot.skill_map.is_empty());
    }

    #[test]
    fn test_builtin_questions_cover_every_axis() {
        let bank = builtin_questions();
        let axes: Vec<_> = bank.questions.iter().map(|q| q.axis).collect();
        assert_eq!(axes, TraitAxis::ALL.to_vec());
    }

    #[test]
    fn test_loads_files_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        write(
            &config.question_bank_path,
            r#"{"questions": [{"id": 10, "text": "Fix engines", "type": "Realistic", "weight": 0.5}]}"#,
        );
        write(
            &config.career_catalog_path,
            r#"{"careers": [{"id": "mechanic", "title": "Mechanic", "holland_codes": ["R", "I", "C"]}]}"#,
        );
        write(
            &config.skill_map_path,
            r#"{"skill_riasec_mapping": {"Welding": "R"}}"#,
        );

        let snapshot = ContentSnapshot::load(&config).unwrap();
        assert_eq!(snapshot.questions.len(), 1);
        assert_eq!(snapshot.questions.questions[0].weight, 0.5);
        assert_eq!(snapshot.career("mechanic").unwrap().title, "Mechanic");
        assert_eq!(snapshot.skill_map.len(), 1);
    }

    #[test]
    fn test_profile_only_career_loads_and_matches() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        write(
            &config.career_catalog_path,
            r#"{"careers": [{"id": "scientist", "title": "Research Scientist",
                "profile": {"R": 30, "I": 95, "A": 40, "S": 20, "E": 10, "C": 50}}]}"#,
        );

        let snapshot = ContentSnapshot::load(&config).unwrap();
        let career = snapshot.career("scientist").unwrap();
        assert!(career.holland_codes.is_empty());

        let profile = career.profile.clone().unwrap();
        let matches =
            match_careers(&profile, &snapshot.careers, &MatchSettings::default()).unwrap();
        assert_eq!(matches[0].career.id, "scientist");
    }

    #[test]
    fn test_rejects_duplicate_question_ids() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        write(
            &config.question_bank_path,
            r#"{"questions": [
                {"id": 1, "text": "a", "type": "R"},
                {"id": 1, "text": "b", "type": "I"}
            ]}"#,
        );
        assert!(ContentSnapshot::load(&config).is_err());
    }

    #[test]
    fn test_rejects_weight_above_one() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        write(
            &config.question_bank_path,
            r#"{"questions": [{"id": 1, "text": "a", "type": "R", "weight": 2.0}]}"#,
        );
        assert!(ContentSnapshot::load(&config).is_err());
    }

    #[test]
    fn test_shipped_data_files_load() {
        let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data");
        let config = Config {
            question_bank_path: data.join("riasec_questions.json"),
            career_catalog_path: data.join("careers_database.json"),
            skill_map_path: data.join("job_skills_mapping.json"),
            ..config_in(&data)
        };
        let snapshot = ContentSnapshot::load(&config).unwrap();
        assert_eq!(snapshot.questions.len(), 30);
        assert!(snapshot.careers.len() >= 10);
        assert!(snapshot.skill_map.lookup("Programming").is_some());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        write(&config.career_catalog_path, "{not json");
        assert!(ContentSnapshot::load(&config).is_err());
    }
}
