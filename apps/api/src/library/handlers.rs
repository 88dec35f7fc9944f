//! Axum route handlers for the Prompt Library API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::extract::ApiQuery;
use crate::library::query::{query_library, PromptFilters, QueryResults, Tab};
use crate::library::taxonomy::Facets;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Query string for `GET /api/v1/prompts`. Empty values mean "unset".
#[derive(Debug, Default, Deserialize)]
pub struct PromptQueryParams {
    pub tab: Option<String>,
    pub domain: Option<String>,
    pub category: Option<String>,
    pub tech_stack: Option<String>,
    pub vibe: Option<String>,
    pub scale: Option<String>,
    pub q: Option<String>,
}

impl PromptQueryParams {
    fn tab(&self) -> Result<Tab, AppError> {
        match non_empty(&self.tab).as_deref() {
            None | Some("coding") => Ok(Tab::Coding),
            Some("requirements") => Ok(Tab::Requirements),
            Some(other) => Err(AppError::Validation(format!(
                "tab must be 'coding' or 'requirements', got '{other}'"
            ))),
        }
    }

    fn filters(&self) -> PromptFilters {
        PromptFilters {
            domain: non_empty(&self.domain),
            category: non_empty(&self.category),
            tech_stack: non_empty(&self.tech_stack),
            vibe: non_empty(&self.vibe),
            scale: non_empty(&self.scale),
        }
    }
}

/// Empty string is the UI's "no constraint" sentinel; it never reaches the query layer.
fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

#[derive(Debug, Serialize)]
pub struct PromptQueryResponse<'a> {
    pub tab: Tab,
    pub total: usize,
    pub shown: usize,
    pub has_more: bool,
    pub results: QueryResults<'a>,
}

#[derive(Debug, Serialize)]
pub struct FacetsResponse {
    pub facets: Facets,
    pub coding_prompt_count: usize,
    pub requirement_prompt_count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/prompts
///
/// Filters the selected tab's collection and returns at most `display_cap`
/// records, flagging `has_more` when the filters need narrowing.
pub async fn handle_query_prompts(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PromptQueryParams>,
) -> Result<Json<Value>, AppError> {
    let tab = params.tab()?;
    let filters = params.filters();
    let query = params.q.as_deref().unwrap_or("");

    let results = query_library(&state.library, tab, &filters, query);
    let total = results.len();
    let (results, has_more) = results.cap(state.config.display_cap);

    let response = PromptQueryResponse {
        tab,
        total,
        shown: results.len(),
        has_more,
        results,
    };

    // Results borrow from the shared library; the response body must be owned.
    let body = serde_json::to_value(&response)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize results: {e}")))?;
    Ok(Json(body))
}

/// GET /api/v1/prompts/facets
pub async fn handle_facets(State(state): State<AppState>) -> Json<FacetsResponse> {
    Json(FacetsResponse {
        facets: state.taxonomy.facets(),
        coding_prompt_count: state.library.coding_prompts.len(),
        requirement_prompt_count: state.library.requirement_prompts.len(),
    })
}

/// GET /api/v1/prompts/:id
///
/// Looks a record up by id in either collection (copy-to-clipboard).
pub async fn handle_get_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let found = match state.library.coding_prompt(&id) {
        Some(entry) => serde_json::to_value(entry),
        None => match state.library.requirement_prompt(&id) {
            Some(entry) => serde_json::to_value(entry),
            None => return Err(AppError::NotFound(format!("Prompt {id} not found"))),
        },
    };

    found
        .map(Json)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize prompt: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(tab: Option<&str>) -> PromptQueryParams {
        PromptQueryParams {
            tab: tab.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_tab_defaults_to_coding() {
        assert_eq!(params(None).tab().unwrap(), Tab::Coding);
        assert_eq!(params(Some("")).tab().unwrap(), Tab::Coding);
        assert_eq!(params(Some("requirements")).tab().unwrap(), Tab::Requirements);
    }

    #[test]
    fn test_unknown_tab_is_validation_error() {
        let err = params(Some("designs")).tab().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_empty_params_become_unset_filters() {
        let p = PromptQueryParams {
            domain: Some(String::new()),
            vibe: Some("Concise".to_string()),
            ..Default::default()
        };
        let filters = p.filters();
        assert_eq!(filters.domain, None);
        assert_eq!(filters.vibe.as_deref(), Some("Concise"));
    }
}
