use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::store::StoryStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Postgres in production, in-memory when `DATABASE_URL` is unset.
    pub store: Arc<dyn StoryStore>,
    /// `None` when no API key is configured.
    pub llm: Option<LlmClient>,
    pub config: Config,
}
