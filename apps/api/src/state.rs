use std::sync::Arc;

use crate::config::Config;
use crate::library::generator::Library;
use crate::library::taxonomy::Taxonomy;
use crate::stack_plan::planner::StackPlanner;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Taxonomy the library was generated from; also backs the facets endpoint.
    pub taxonomy: Arc<Taxonomy>,
    /// Generated once at startup, read-only afterwards.
    pub library: Arc<Library>,
    /// Pluggable stack planner. Default: GeminiStackPlanner.
    pub planner: Arc<dyn StackPlanner>,
    pub config: Config,
}
