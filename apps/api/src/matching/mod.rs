// Career matching: composite similarity ranking, catalog search, per-career skill gaps.

pub mod development;
pub mod handlers;
pub mod matcher;
pub mod search;
pub mod similarity;
pub mod skill_gaps;
pub mod weights;
