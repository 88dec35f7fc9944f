//! Prompt Library generator: expands a `Taxonomy` into the full prompt corpus.
//!
//! Two independent nested expansions:
//!   coding:       domain → tech stack value → vibe → sub-category
//!   requirements: domain → requirement type → scale
//!
//! Outer-to-inner loop order fixes both record order and ids. Ids are built
//! from axis indices, so they are unique per collection and stable for a
//! given combination. Generation cannot fail; an empty axis yields an empty
//! collection.

use serde::Serialize;
use tracing::info;

use crate::library::taxonomy::{StackRole, Taxonomy};
use crate::library::templates::{render_coding_prompt, render_requirement_prompt, CodingFill};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// One generated coding prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodingPromptEntry {
    pub id: String,
    pub domain: String,
    pub tech_stack: String,
    pub stack_role: StackRole,
    pub vibe: String,
    pub sub_category: String,
    pub prompt: String,
}

/// One generated project-specification prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementPromptEntry {
    pub id: String,
    pub domain: String,
    #[serde(rename = "type")]
    pub requirement_type: String,
    pub scale: String,
    pub prompt: String,
}

/// The complete generated corpus. Built once, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Library {
    pub coding_prompts: Vec<CodingPromptEntry>,
    pub requirement_prompts: Vec<RequirementPromptEntry>,
}

impl Library {
    pub fn coding_prompt(&self, id: &str) -> Option<&CodingPromptEntry> {
        self.coding_prompts.iter().find(|p| p.id == id)
    }

    pub fn requirement_prompt(&self, id: &str) -> Option<&RequirementPromptEntry> {
        self.requirement_prompts.iter().find(|p| p.id == id)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

/// Builds the full corpus from the given taxonomy.
pub fn generate_library(taxonomy: &Taxonomy) -> Library {
    let library = Library {
        coding_prompts: generate_coding_prompts(taxonomy),
        requirement_prompts: generate_requirement_prompts(taxonomy),
    };

    info!(
        "Prompt library generated: {} coding prompts, {} requirement prompts",
        library.coding_prompts.len(),
        library.requirement_prompts.len()
    );

    library
}

fn generate_coding_prompts(taxonomy: &Taxonomy) -> Vec<CodingPromptEntry> {
    let tech_values = taxonomy.tech_stack.values();
    let capacity = taxonomy.domains.len()
        * tech_values.len()
        * taxonomy.vibes.len()
        * taxonomy.sub_categories.len();
    let mut entries = Vec::with_capacity(capacity);

    for (d, domain) in taxonomy.domains.iter().enumerate() {
        for (t, (role, tech)) in tech_values.iter().enumerate() {
            for (v, vibe) in taxonomy.vibes.iter().enumerate() {
                for (s, sub_category) in taxonomy.sub_categories.iter().enumerate() {
                    let prompt = render_coding_prompt(&CodingFill {
                        domain,
                        tech,
                        role: role.as_str(),
                        category: &sub_category.name,
                        sub_category_id: &sub_category.id,
                        vibe_id: &vibe.id,
                        vibe_name: &vibe.name,
                    });

                    entries.push(CodingPromptEntry {
                        id: format!("code-{d}-{t}-{v}-{s}"),
                        domain: domain.clone(),
                        tech_stack: tech.to_string(),
                        stack_role: *role,
                        vibe: vibe.name.clone(),
                        sub_category: sub_category.name.clone(),
                        prompt,
                    });
                }
            }
        }
    }

    entries
}

fn generate_requirement_prompts(taxonomy: &Taxonomy) -> Vec<RequirementPromptEntry> {
    let mut entries = Vec::with_capacity(
        taxonomy.domains.len() * taxonomy.requirement_types.len() * taxonomy.scales.len(),
    );

    for (d, domain) in taxonomy.domains.iter().enumerate() {
        for (r, requirement_type) in taxonomy.requirement_types.iter().enumerate() {
            for (s, scale) in taxonomy.scales.iter().enumerate() {
                entries.push(RequirementPromptEntry {
                    id: format!("req-{d}-{r}-{s}"),
                    domain: domain.clone(),
                    requirement_type: requirement_type.name.clone(),
                    scale: scale.clone(),
                    prompt: render_requirement_prompt(
                        domain,
                        &requirement_type.id,
                        &requirement_type.name,
                        scale,
                    ),
                });
            }
        }
    }

    entries
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
