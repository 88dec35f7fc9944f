// Prompt Library: taxonomy tables, template rendering, corpus generation and
// the filter/search query surface consumed by the dashboard.
// Pure and synchronous; the corpus is generated once at startup.

pub mod generator;
pub mod handlers;
pub mod query;
pub mod taxonomy;
pub mod templates;
