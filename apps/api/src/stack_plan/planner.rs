//! Stack Planner: pluggable, trait-based backend that turns a stack selection
//! into a Markdown setup plan.
//!
//! Default: `GeminiStackPlanner` (via `llm_client`).
//! `AppState` holds an `Arc<dyn StackPlanner>` so tests can swap in a stub.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::AppError;
use crate::library::templates::fill_placeholders;
use crate::llm_client::prompts::MARKDOWN_ONLY_SYSTEM;
use crate::llm_client::LlmClient;
use crate::stack_plan::prompts::STACK_PLAN_PROMPT_TEMPLATE;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Request body for a stack plan. All four fields are required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StackPlanRequest {
    pub frontend: Option<String>,
    pub backend: Option<String>,
    pub database: Option<String>,
    pub deployment: Option<String>,
}

/// A validated stack selection, every field non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackSelection {
    pub frontend: String,
    pub backend: String,
    pub database: String,
    pub deployment: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StackPlanResponse {
    pub plan: String,
}

impl StackPlanRequest {
    /// Rejects the request if any of the four stack fields is missing or blank,
    /// naming every missing field.
    pub fn validate(self) -> Result<StackSelection, AppError> {
        let fields = [
            ("frontend", &self.frontend),
            ("backend", &self.backend),
            ("database", &self.database),
            ("deployment", &self.deployment),
        ];
        let missing: Vec<&str> = fields
            .iter()
            .filter(|(_, value)| value.as_deref().map_or(true, |v| v.trim().is_empty()))
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing required stack fields: {}",
                missing.join(", ")
            )));
        }

        Ok(StackSelection {
            frontend: trimmed(self.frontend),
            backend: trimmed(self.backend),
            database: trimmed(self.database),
            deployment: trimmed(self.deployment),
        })
    }
}

fn trimmed(value: Option<String>) -> String {
    value.unwrap_or_default().trim().to_string()
}

/// Hand-built prompt sent upstream for a stack selection.
pub fn build_stack_plan_prompt(selection: &StackSelection) -> String {
    fill_placeholders(
        STACK_PLAN_PROMPT_TEMPLATE,
        &[
            ("frontend", selection.frontend.as_str()),
            ("backend", selection.backend.as_str()),
            ("database", selection.database.as_str()),
            ("deployment", selection.deployment.as_str()),
        ],
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait StackPlanner: Send + Sync {
    /// Returns the upstream Markdown plan verbatim.
    async fn plan(&self, selection: &StackSelection) -> Result<String, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// GeminiStackPlanner
// ────────────────────────────────────────────────────────────────────────────

/// Planner backed by Gemini. `None` means no API key was configured; every
/// request then fails with a configuration error instead of failing startup.
pub struct GeminiStackPlanner {
    llm: Option<LlmClient>,
}

impl GeminiStackPlanner {
    pub fn new(llm: Option<LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl StackPlanner for GeminiStackPlanner {
    async fn plan(&self, selection: &StackSelection) -> Result<String, AppError> {
        let llm = self.llm.as_ref().ok_or_else(|| {
            error!("Stack plan requested but GEMINI_API_KEY is not configured");
            AppError::Config("The AI provider API key is not configured on the server".to_string())
        })?;

        info!(
            "Generating stack plan: {} / {} / {} / {}",
            selection.frontend, selection.backend, selection.database, selection.deployment
        );

        let prompt = build_stack_plan_prompt(selection);
        llm.call_text(&prompt, Some(MARKDOWN_ONLY_SYSTEM))
            .await
            .map_err(|e| AppError::Llm(format!("Stack plan generation failed: {e}")))
    }
}
