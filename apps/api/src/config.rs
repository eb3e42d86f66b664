use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{ensure, Context, Result};

use crate::matching::weights::MatchWeights;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub question_bank_path: PathBuf,
    pub career_catalog_path: PathBuf,
    pub skill_map_path: PathBuf,
    pub scoring: ScoringConfig,
}

/// Tunable scoring parameters. Every call site reads thresholds from here so that
/// individual reports and aggregate analyses classify with the same boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub match_weights: MatchWeights,
    pub top_n: usize,
    pub min_floor: f64,
    /// Gap analysis threshold on the 0–100 scale.
    pub gap_threshold: f64,
    /// Fraction (0–1) of questions that must be answered before scoring.
    pub completion_threshold: f64,
    pub confidence_scale_max: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            match_weights: MatchWeights::default(),
            top_n: 10,
            min_floor: 0.0,
            gap_threshold: 15.0,
            completion_threshold: 0.0,
            confidence_scale_max: 5,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<()> {
        self.match_weights
            .validate()
            .context("MATCH_WEIGHT_* settings are invalid")?;
        ensure!(
            (0.0..=1.0).contains(&self.min_floor),
            "MATCH_MIN_FLOOR must be within [0, 1], got {}",
            self.min_floor
        );
        ensure!(
            self.gap_threshold.is_finite() && self.gap_threshold >= 0.0,
            "GAP_THRESHOLD must be a non-negative number, got {}",
            self.gap_threshold
        );
        ensure!(
            (0.0..=1.0).contains(&self.completion_threshold),
            "COMPLETION_THRESHOLD must be within [0, 1], got {}",
            self.completion_threshold
        );
        ensure!(
            self.confidence_scale_max >= 1,
            "CONFIDENCE_SCALE_MAX must be at least 1"
        );
        Ok(())
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = ScoringConfig::default();
        let scoring = ScoringConfig {
            match_weights: MatchWeights {
                primary: env_or("MATCH_WEIGHT_PRIMARY", defaults.match_weights.primary)?,
                secondary: env_or("MATCH_WEIGHT_SECONDARY", defaults.match_weights.secondary)?,
                overall: env_or("MATCH_WEIGHT_OVERALL", defaults.match_weights.overall)?,
            },
            top_n: env_or("MATCH_TOP_N", defaults.top_n)?,
            min_floor: env_or("MATCH_MIN_FLOOR", defaults.min_floor)?,
            gap_threshold: env_or("GAP_THRESHOLD", defaults.gap_threshold)?,
            completion_threshold: env_or("COMPLETION_THRESHOLD", defaults.completion_threshold)?,
            confidence_scale_max: env_or("CONFIDENCE_SCALE_MAX", defaults.confidence_scale_max)?,
        };
        scoring.validate()?;

        Ok(Config {
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            question_bank_path: path_or("QUESTION_BANK_PATH", "data/riasec_questions.json"),
            career_catalog_path: path_or("CAREER_CATALOG_PATH", "data/careers_database.json"),
            skill_map_path: path_or("SKILL_MAP_PATH", "data/job_skills_mapping.json"),
            scoring,
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

fn path_or(key: &str, default: &str) -> PathBuf {
    std::env::var(key)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_config_is_valid() {
        assert!(ScoringConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_completion_threshold() {
        let config = ScoringConfig {
            completion_threshold: 1.5,
            ..ScoringConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_gap_threshold() {
        let config = ScoringConfig {
            gap_threshold: -1.0,
            ..ScoringConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_all_zero_weights() {
        let config = ScoringConfig {
            match_weights: MatchWeights {
                primary: 0.0,
                secondary: 0.0,
                overall: 0.0,
            },
            ..ScoringConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_or_falls_back_when_unset() {
        let value: usize = env_or("PATHWAY_TEST_SURELY_UNSET_VAR", 7).unwrap();
        assert_eq!(value, 7);
    }
}
