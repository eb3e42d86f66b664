use crate::models::riasec::{HollandCode, TraitVector};

/// Top three axes by score, highest first. Equal scores resolve R < I < A < S < E < C,
/// so identical vectors always yield identical codes.
pub fn holland_code(vector: &TraitVector) -> HollandCode {
    HollandCode::from_ranked(vector.ranked_axes())
}
