//! Axum route handlers for the Stack Plan API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::stack_plan::planner::{StackPlanRequest, StackPlanResponse};
use crate::state::AppState;

/// POST /api/v1/stack-plan
///
/// Validates the four stack fields, asks the planner for a setup plan and
/// returns its Markdown unchanged.
pub async fn handle_stack_plan(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<StackPlanRequest>,
) -> Result<Json<StackPlanResponse>, AppError> {
    let selection = request.validate()?;
    let plan = state.planner.plan(&selection).await?;
    Ok(Json(StackPlanResponse { plan }))
}
