mod config;
mod errors;
mod extract;
mod library;
mod llm_client;
mod routes;
mod stack_plan;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::library::generator::generate_library;
use crate::library::taxonomy::Taxonomy;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::stack_plan::planner::GeminiStackPlanner;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting DevTools API v{}", env!("CARGO_PKG_VERSION"));

    // Generate the prompt corpus once, before serving any query
    let taxonomy = Taxonomy::builtin();
    let library = generate_library(&taxonomy);

    // Initialize LLM client (optional; stack plans report a config error without it)
    let llm = config.gemini_api_key.clone().map(LlmClient::new);
    match &llm {
        Some(_) => info!("LLM client initialized (model: {})", llm_client::MODEL),
        None => warn!("GEMINI_API_KEY not set; stack plan requests will fail"),
    }

    let state = AppState {
        taxonomy: Arc::new(taxonomy),
        library: Arc::new(library),
        planner: Arc::new(GeminiStackPlanner::new(llm)),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
