use anyhow::{Context, Result};

const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:8080";

/// Application configuration loaded from environment variables.
/// Only `PORT` can fail startup; the rest are optional or defaulted.
#[derive(Debug, Clone)]
pub struct Config {
    /// When unset, stories live in process memory.
    pub database_url: Option<String>,
    /// When unset, draft generation uses the offline fallback.
    pub anthropic_api_key: Option<String>,
    pub public_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            public_base_url: optional_env("PUBLIC_BASE_URL")
                .unwrap_or_else(|| DEFAULT_PUBLIC_BASE_URL.to_string()),
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// No database, no model key.
    #[cfg(test)]
    pub fn local() -> Self {
        Config {
            database_url: None,
            anthropic_api_key: None,
            public_base_url: DEFAULT_PUBLIC_BASE_URL.to_string(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

/// Treats unset and blank variables alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_port(raw: Option<&str>) -> Result<u16> {
    raw.unwrap_or("8080")
        .parse::<u16>()
        .context("PORT must be a valid port number")
}
