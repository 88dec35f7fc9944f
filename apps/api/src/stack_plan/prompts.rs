// LLM prompt constants for the Stack Plan module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Stack plan prompt template.
/// Replace: {frontend}, {backend}, {database}, {deployment}
pub const STACK_PLAN_PROMPT_TEMPLATE: &str = r#"I am starting a new web project with this tech stack:

- Frontend: {frontend}
- Backend: {backend}
- Database: {database}
- Deployment: {deployment}

Write a practical, step-by-step setup plan for this exact stack. Include:

1. Project scaffolding commands for the frontend and backend
2. A recommended folder structure
3. How to connect the backend to {database}, including the client library and connection configuration
4. Environment variables the project needs and how to manage them locally and in production
5. Deploying to {deployment}: build settings, environment configuration and a CI workflow
6. Common pitfalls specific to combining {frontend} with {backend}, and how to avoid them

Use Markdown headings for each step and fenced code blocks for every command or config file."#;
