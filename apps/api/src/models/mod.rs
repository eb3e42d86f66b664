pub mod assessment;
pub mod career;
pub mod riasec;
pub mod skills;
