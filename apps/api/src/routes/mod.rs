pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::library::handlers as library;
use crate::stack_plan::handlers as stack_plan;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Prompt Library API
        .route("/api/v1/prompts", get(library::handle_query_prompts))
        .route("/api/v1/prompts/facets", get(library::handle_facets))
        .route("/api/v1/prompts/:id", get(library::handle_get_prompt))
        // Stack Plan API
        .route("/api/v1/stack-plan", post(stack_plan::handle_stack_plan))
        .with_state(state)
}
