use anyhow::{bail, Context, Result};

use crate::library::query::DEFAULT_DISPLAY_CAP;

/// Application configuration loaded from environment variables.
/// `GEMINI_API_KEY` is optional; without it the stack plan endpoint answers
/// with a configuration error while the prompt library keeps working.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub display_cap: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let display_cap = match std::env::var("PROMPT_DISPLAY_CAP") {
            Ok(raw) => parse_display_cap(&raw)?,
            Err(_) => DEFAULT_DISPLAY_CAP,
        };

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            display_cap,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_display_cap(raw: &str) -> Result<usize> {
    let cap = raw
        .trim()
        .parse::<usize>()
        .context("PROMPT_DISPLAY_CAP must be a positive integer")?;
    if cap == 0 {
        bail!("PROMPT_DISPLAY_CAP must be a positive integer");
    }
    Ok(cap)
}
