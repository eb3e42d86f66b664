use serde::{Deserialize, Serialize};

use crate::errors::ScoringError;

/// Relative weights of the three match factors. Need not sum to 1; the
/// composite is divided by the total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub primary: f64,
    pub secondary: f64,
    pub overall: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            primary: 0.40,
            secondary: 0.30,
            overall: 0.30,
        }
    }
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.primary + self.secondary + self.overall
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        for (name, weight) in [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("overall", self.overall),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ScoringError::InvalidWeights(format!(
                    "{name} weight must be a non-negative number, got {weight}"
                )));
            }
        }
        if self.sum() <= 0.0 {
            return Err(ScoringError::InvalidWeights(
                "weights must not all be zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Combined score: Σ(weight × factor) / Σ weight, clamped to [0, 1].
pub fn compute_composite_score(primary: f64, secondary: f64, overall: f64, weights: &MatchWeights) -> f64 {
    let total = weights.sum();
    if total <= 0.0 {
        return 0.0;
    }
    ((weights.primary * primary + weights.secondary * secondary + weights.overall * overall) / total)
        .clamp(0.0, 1.0)
}
