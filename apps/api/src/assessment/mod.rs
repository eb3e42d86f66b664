// Assessment scoring: Likert responses to trait scores, Holland code, interpretation.
// Pure functions over the caller's answer set; no state is kept between requests.

pub mod handlers;
pub mod holland;
pub mod interpretation;
pub mod normalizer;
pub mod progress;
