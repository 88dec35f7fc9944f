// Prompt templates for the generated library.
// Template choice is a lookup keyed by sub-category id / requirement-type id.
// Unknown ids fall back to a generic template so any taxonomy renders.

/// Coding prompt templates keyed by sub-category id.
/// Placeholders: {domain}, {tech}, {role}, {category}
const CODING_TEMPLATES: &[(&str, &str)] = &[
    (
        "api-design",
        "Design a RESTful API for a {domain} application whose {role} is built with {tech}. \
        List the resources, endpoints, request/response shapes and status codes, and show the \
        handler for the most important endpoint.",
    ),
    (
        "data-modeling",
        "Model the core data for a {domain} product using {tech} on the {role}. \
        Define the entities, their relationships and constraints, and explain the indexes \
        you would add for the three most frequent queries.",
    ),
    (
        "authentication",
        "Implement sign-up, login and session handling for a {domain} app where the {role} \
        uses {tech}. Cover password storage, token refresh and role-based access control.",
    ),
    (
        "ui-components",
        "Build a reusable component set for a {domain} interface, integrating with {tech} \
        on the {role}. Include a data table, a form with validation and an empty state.",
    ),
    (
        "testing",
        "Write a test plan and the first test suite for a {domain} codebase that uses {tech} \
        on the {role}. Cover unit, integration and one end-to-end happy path.",
    ),
    (
        "performance",
        "Profile and optimize a slow {domain} feature built with {tech} on the {role}. \
        Identify the likely bottlenecks, propose fixes and show how to measure the gain.",
    ),
    (
        "refactoring",
        "Refactor a legacy {domain} module that relies on {tech} for the {role} into smaller, \
        testable units. Explain each step and keep behavior unchanged.",
    ),
    (
        "deployment",
        "Set up a production deployment for a {domain} service whose {role} runs {tech}. \
        Include environment configuration, a CI pipeline and a rollback strategy.",
    ),
];

/// Fallback for sub-categories with no dedicated template.
const GENERIC_CODING_TEMPLATE: &str =
    "Help me with {category} for a {domain} project that uses {tech} on the {role}. \
    Produce working code and explain the key decisions.";

/// Requirement prompt templates keyed by requirement-type id.
/// Placeholders: {domain}, {type}, {scale}
const REQUIREMENT_TEMPLATES: &[(&str, &str)] = &[
    (
        "prd",
        "Write a {type} for a {domain} product at the {scale} stage. Include the problem \
        statement, target users, goals and non-goals, functional requirements and success metrics.",
    ),
    (
        "technical-spec",
        "Draft a {type} for a {domain} system sized for {scale}. Describe components, data \
        flow, APIs, storage choices and the main operational risks.",
    ),
    (
        "roadmap",
        "Create a {type} for a {domain} product at {scale} scale, broken into quarterly \
        milestones with deliverables, dependencies and exit criteria.",
    ),
    (
        "user-stories",
        "Write {type} for a {domain} application at the {scale} stage, grouped by persona, \
        each with acceptance criteria in Given/When/Then form.",
    ),
    (
        "architecture",
        "Produce an {type} for a {domain} platform built for {scale}. Cover service \
        boundaries, deployment topology, scaling strategy and failure modes.",
    ),
    (
        "mvp-scope",
        "Define the {type} for a {domain} idea targeting {scale}. Separate must-haves from \
        later features and estimate the build effort for each.",
    ),
];

const GENERIC_REQUIREMENT_TEMPLATE: &str =
    "Write a {type} document for a {domain} project at {scale} scale.";

/// Persona instructions keyed by vibe id.
const VIBE_INSTRUCTIONS: &[(&str, &str)] = &[
    ("concise", "Keep the answer short. Code first, minimal prose."),
    ("verbose", "Explain every step in detail, including alternatives you rejected."),
    (
        "pair-programmer",
        "Work through it with me step by step and ask before making big assumptions.",
    ),
    (
        "senior-architect",
        "Focus on trade-offs, long-term maintainability and system boundaries.",
    ),
    ("teacher", "Assume I am new to this stack and teach the concepts as you go."),
    (
        "security-auditor",
        "Call out every security risk and show the hardened version of the code.",
    ),
];

pub fn coding_template(sub_category_id: &str) -> &'static str {
    lookup(CODING_TEMPLATES, sub_category_id).unwrap_or(GENERIC_CODING_TEMPLATE)
}

pub fn requirement_template(type_id: &str) -> &'static str {
    lookup(REQUIREMENT_TEMPLATES, type_id).unwrap_or(GENERIC_REQUIREMENT_TEMPLATE)
}

/// Persona clause appended to every coding prompt. Always names the vibe.
pub fn vibe_clause(vibe_id: &str, vibe_name: &str) -> String {
    match lookup(VIBE_INSTRUCTIONS, vibe_id) {
        Some(instruction) => format!("Style ({vibe_name}): {instruction}"),
        None => format!("Style ({vibe_name}): answer in a {vibe_name} style."),
    }
}

/// Fields substituted into a coding template.
pub struct CodingFill<'a> {
    pub domain: &'a str,
    pub tech: &'a str,
    pub role: &'a str,
    pub category: &'a str,
    pub sub_category_id: &'a str,
    pub vibe_id: &'a str,
    pub vibe_name: &'a str,
}

pub fn render_coding_prompt(fill: &CodingFill<'_>) -> String {
    let body = fill_placeholders(
        coding_template(fill.sub_category_id),
        &[
            ("domain", fill.domain),
            ("tech", fill.tech),
            ("role", fill.role),
            ("category", fill.category),
        ],
    );
    format!(
        "[{}] {}\n\n{}",
        fill.category,
        body,
        vibe_clause(fill.vibe_id, fill.vibe_name)
    )
}

pub fn render_requirement_prompt(
    domain: &str,
    type_id: &str,
    type_name: &str,
    scale: &str,
) -> String {
    fill_placeholders(
        requirement_template(type_id),
        &[("domain", domain), ("type", type_name), ("scale", scale)],
    )
}

/// Substitutes `{name}` tokens from `values` in a single left-to-right pass.
/// Substituted text is never rescanned, so labels containing braces come out
/// verbatim. Unknown tokens and unmatched braces are copied unchanged.
pub fn fill_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let value = after.find('}').and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, end))
        });
        match value {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
