//! Taxonomy tables: the fixed axes the prompt library is expanded from.
//!
//! `Taxonomy::builtin()` holds the production tables. Tests build small
//! synthetic taxonomies directly so generator output sizes stay countable.

use serde::Serialize;

/// Role a tool plays in a project's tech stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StackRole {
    Frontend,
    Backend,
    Database,
    Testing,
    Devops,
}

impl StackRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            StackRole::Frontend => "frontend",
            StackRole::Backend => "backend",
            StackRole::Database => "database",
            StackRole::Testing => "testing",
            StackRole::Devops => "devops",
        }
    }
}

/// A coding "style" used to flavor a generated coding prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VibePersona {
    pub id: String,
    pub name: String,
}

/// Category of coding prompt (API design, testing, refactoring...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubCategory {
    pub id: String,
    pub name: String,
}

/// Category of project-specification prompt (PRD, technical spec, roadmap...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequirementType {
    pub id: String,
    pub name: String,
}

/// Ordered mapping from stack role to the tools offered for it.
/// Role order and tool order are both significant for corpus ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TechStackAxis {
    pub roles: Vec<(StackRole, Vec<String>)>,
}

impl TechStackAxis {
    /// Flattened `(role, tool)` sequence in role order, then tool order.
    pub fn values(&self) -> Vec<(StackRole, &str)> {
        self.roles
            .iter()
            .flat_map(|(role, tools)| tools.iter().map(move |t| (*role, t.as_str())))
            .collect()
    }
}

/// All axes the generator expands. Owned by the caller; no global state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomy {
    pub domains: Vec<String>,
    pub tech_stack: TechStackAxis,
    pub vibes: Vec<VibePersona>,
    pub sub_categories: Vec<SubCategory>,
    pub requirement_types: Vec<RequirementType>,
    pub scales: Vec<String>,
}

/// Facet value lists for filter dropdowns.
#[derive(Debug, Clone, Serialize)]
pub struct Facets {
    pub domains: Vec<String>,
    pub tech_stacks: Vec<String>,
    pub vibes: Vec<String>,
    pub sub_categories: Vec<String>,
    pub requirement_types: Vec<String>,
    pub scales: Vec<String>,
}

impl Taxonomy {
    /// Production taxonomy behind the Prompt Library dashboard.
    pub fn builtin() -> Self {
        Self {
            domains: strings(&[
                "E-commerce",
                "SaaS",
                "Social Network",
                "FinTech",
                "HealthTech",
                "EdTech",
                "Marketplace",
                "Developer Tools",
                "IoT Dashboard",
                "Content Management",
                "Real-time Chat",
                "Analytics Platform",
            ]),
            tech_stack: TechStackAxis {
                roles: vec![
                    (
                        StackRole::Frontend,
                        strings(&["React", "Next.js", "Vue", "Svelte", "Angular"]),
                    ),
                    (
                        StackRole::Backend,
                        strings(&["Node.js", "Django", "FastAPI", "Go", "Rust (Axum)"]),
                    ),
                    (
                        StackRole::Database,
                        strings(&["PostgreSQL", "MongoDB", "Supabase", "Firebase", "Redis"]),
                    ),
                    (
                        StackRole::Testing,
                        strings(&["Jest", "Vitest", "Playwright", "Cypress"]),
                    ),
                    (
                        StackRole::Devops,
                        strings(&["Docker", "Kubernetes", "Vercel", "GitHub Actions"]),
                    ),
                ],
            },
            vibes: vec![
                vibe("concise", "Concise"),
                vibe("verbose", "Verbose"),
                vibe("pair-programmer", "Pair Programmer"),
                vibe("senior-architect", "Senior Architect"),
                vibe("teacher", "Patient Teacher"),
                vibe("security-auditor", "Security Auditor"),
            ],
            sub_categories: vec![
                sub_category("api-design", "API Design"),
                sub_category("data-modeling", "Data Modeling"),
                sub_category("authentication", "Authentication"),
                sub_category("ui-components", "UI Components"),
                sub_category("testing", "Testing"),
                sub_category("performance", "Performance"),
                sub_category("refactoring", "Refactoring"),
                sub_category("deployment", "Deployment"),
            ],
            requirement_types: vec![
                requirement_type("prd", "PRD"),
                requirement_type("technical-spec", "Technical Spec"),
                requirement_type("roadmap", "Roadmap"),
                requirement_type("user-stories", "User Stories"),
                requirement_type("architecture", "Architecture Overview"),
                requirement_type("mvp-scope", "MVP Scope"),
            ],
            scales: strings(&["MVP", "Growth-stage Startup", "Enterprise"]),
        }
    }

    pub fn facets(&self) -> Facets {
        Facets {
            domains: self.domains.clone(),
            tech_stacks: self
                .tech_stack
                .values()
                .into_iter()
                .map(|(_, tool)| tool.to_string())
                .collect(),
            vibes: self.vibes.iter().map(|v| v.name.clone()).collect(),
            sub_categories: self.sub_categories.iter().map(|s| s.name.clone()).collect(),
            requirement_types: self
                .requirement_types
                .iter()
                .map(|r| r.name.clone())
                .collect(),
            scales: self.scales.clone(),
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn vibe(id: &str, name: &str) -> VibePersona {
    VibePersona {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn sub_category(id: &str, name: &str) -> SubCategory {
    SubCategory {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn requirement_type(id: &str, name: &str) -> RequirementType {
    RequirementType {
        id: id.to_string(),
        name: name.to_string(),
    }
}
