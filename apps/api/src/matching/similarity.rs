use crate::models::career::CareerRecord;
use crate::models::riasec::{TraitAxis, MAX_SCORE};

/// Number of Holland letters that count when expanding a letter-only career.
const EXPANDED_LETTERS: usize = 3;

/// Six-axis ideal profile for a career.
///
/// Careers without an explicit profile are expanded from their Holland letters:
/// each of the first three listed letters scores 100, every other axis 0.
pub fn career_profile(career: &CareerRecord) -> [f64; 6] {
    if let Some(profile) = &career.profile {
        return profile.to_array();
    }
    let mut expanded = [0.0; 6];
    for axis in career.holland_codes.iter().take(EXPANDED_LETTERS) {
        expanded[*axis as usize] = MAX_SCORE;
    }
    expanded
}

/// Cosine similarity of two non-negative vectors, in [0, 1].
/// Returns 0 when either vector is all zeros.
pub fn cosine_similarity(a: &[f64; 6], b: &[f64; 6]) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Position (0 = highest) of `axis` in a ranking.
pub fn rank_of(ranking: &[TraitAxis; 6], axis: TraitAxis) -> usize {
    ranking
        .iter()
        .position(|a| *a == axis)
        .unwrap_or(ranking.len() - 1)
}
