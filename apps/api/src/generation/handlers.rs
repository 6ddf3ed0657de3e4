//! Axum route handlers for draft generation.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::errors::AppError;
use crate::generation::generator::{generate_draft, GeneratedDraft};
use crate::generation::prompts::DEFAULT_PARAGRAPH;
use crate::models::story::{Story, WritingStyle};
use crate::state::AppState;

pub const MISSING_STYLE_OR_STORY: &str = "Missing style or story payload.";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateStoryRequest {
    pub story: Option<Story>,
    pub style: Option<WritingStyle>,
}

/// Model failures still hand the client a usable placeholder draft.
pub struct GenerationFailed;

impl IntoResponse for GenerationFailed {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Failed to generate story",
                "draft": DEFAULT_PARAGRAPH,
            })),
        )
            .into_response()
    }
}

/// POST /api/generate-story
pub async fn handle_generate_story(
    State(state): State<AppState>,
    body: Result<Json<GenerateStoryRequest>, JsonRejection>,
) -> Result<Json<GeneratedDraft>, Response> {
    let Json(request) = body.map_err(|e| AppError::from(e).into_response())?;
    let (Some(story), Some(style)) = (request.story, request.style) else {
        return Err(AppError::Validation(MISSING_STYLE_OR_STORY.to_string()).into_response());
    };

    match generate_draft(state.llm.as_ref(), &story, style).await {
        Ok(generated) => Ok(Json(generated)),
        Err(e) => {
            tracing::error!("generate-story error: {e}");
            Err(GenerationFailed.into_response())
        }
    }
}
