// Draft generation: prompt building per writing style, one LLM call through
// llm_client, and a deterministic fallback when no model is configured.

pub mod generator;
pub mod handlers;
pub mod prompts;
