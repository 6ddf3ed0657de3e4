//! Draft generation: LLM call with a deterministic offline fallback.

use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::prompts::{build_prompt, DEFAULT_PARAGRAPH, DRAFT_SYSTEM};
use crate::llm_client::LlmClient;
use crate::models::story::{Story, WritingStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Fallback,
    Anthropic,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedDraft {
    pub draft: String,
    pub provider: Provider,
}

/// Assembles a draft from the story's own summaries, without any model call.
pub fn fallback_draft(story: &Story, style: WritingStyle) -> String {
    let blocks = [
        ("Roots", &story.personal.background),
        ("Childhood", &story.childhood.summary),
        ("Education", &story.education.summary),
        ("Career", &story.career.summary),
        ("Relationships", &story.relationships.summary),
        ("Challenges", &story.challenges.summary),
        ("Dreams", &story.dreams.summary),
    ];

    let paragraphs: Vec<String> = blocks
        .iter()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(title, text)| format!("{title}: {text}"))
        .collect();

    let name = if story.personal.full_name.is_empty() {
        "My story"
    } else {
        story.personal.full_name.as_str()
    };
    let body = if paragraphs.is_empty() {
        DEFAULT_PARAGRAPH.to_string()
    } else {
        paragraphs.join("\n\n")
    };

    format!("({} draft) {name}\n\n{body}", style.label())
}

/// Generates a draft for `style`. Without a client the fallback is returned;
/// an empty model response also falls back.
pub async fn generate_draft(
    llm: Option<&LlmClient>,
    story: &Story,
    style: WritingStyle,
) -> Result<GeneratedDraft, AppError> {
    let Some(llm) = llm else {
        warn!(%style, "No LLM client configured, using fallback draft");
        return Ok(GeneratedDraft {
            draft: fallback_draft(story, style),
            provider: Provider::Fallback,
        });
    };

    let prompt = build_prompt(story, style);
    let text = llm
        .complete(&prompt, DRAFT_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    let draft = match text.trim() {
        "" => {
            warn!(%style, "LLM returned an empty draft, using fallback");
            fallback_draft(story, style)
        }
        trimmed => trimmed.to_string(),
    };

    info!(%style, chars = draft.len(), "Draft generated");
    Ok(GeneratedDraft {
        draft,
        provider: Provider::Anthropic,
    })
}
