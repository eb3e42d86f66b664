use std::sync::Arc;

use crate::config::Config;
use crate::content::ContentSnapshot;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Loaded once at startup and never mutated.
    pub content: Arc<ContentSnapshot>,
}
