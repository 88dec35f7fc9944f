// Stack Plan: forwards a frontend/backend/database/deployment selection to the
// LLM and relays its Markdown setup plan verbatim.
// All LLM calls go through llm_client.

pub mod handlers;
pub mod planner;
pub mod prompts;
