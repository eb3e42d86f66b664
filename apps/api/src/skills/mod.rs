// Skills confidence: self-ratings to trait scores, and interest vs. skill gap analysis.

pub mod gap;
pub mod handlers;
pub mod mapper;
