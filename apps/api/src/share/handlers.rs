use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, SHARE_UNAVAILABLE};
use crate::models::{ShareSnapshot, WritingStyle};
use crate::render::document::split_paragraphs;
use crate::share::service::{self, ShareLookup};
use crate::state::AppState;
use crate::stories::service::load_story;

/// Body for publishing a share link. Omitted fields fall back to the story's
/// selected style and its stored draft for that style.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ShareRequest {
    pub draft: Option<String>,
    pub style: Option<WritingStyle>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareCreated {
    pub share_id: String,
    pub url: String,
}

/// Snapshot as served to public readers, with the draft pre-split into paragraphs.
#[derive(Debug, Serialize)]
pub struct SharedStoryView {
    #[serde(flatten)]
    pub snapshot: ShareSnapshot,
    pub paragraphs: Vec<String>,
}

/// POST /api/v1/stories/:user_id/share
pub async fn handle_create_share(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    body: Result<Json<ShareRequest>, JsonRejection>,
) -> Result<Json<ShareCreated>, AppError> {
    let Json(request) = body?;
    let store = state.store.as_ref();

    let (draft, style) = match (request.draft, request.style) {
        (Some(draft), Some(style)) => (draft, style),
        (draft, style) => {
            let story = load_story(store, &user_id).await?;
            let style = style.unwrap_or(story.selected_style);
            let draft = draft.unwrap_or_else(|| story.story_drafts.get(style).to_string());
            (draft, style)
        }
    };

    let share_id = service::create_share(store, &user_id, draft, style).await?;
    let url = service::share_url(&state.config.public_base_url, &share_id);
    Ok(Json(ShareCreated { share_id, url }))
}

/// GET /api/v1/shares/:share_id
pub async fn handle_get_share(
    State(state): State<AppState>,
    Path(share_id): Path<String>,
) -> Result<Json<SharedStoryView>, AppError> {
    match service::get_share(state.store.as_ref(), &share_id).await? {
        ShareLookup::Found(snapshot) => {
            let paragraphs = split_paragraphs(&snapshot.draft);
            Ok(Json(SharedStoryView {
                snapshot,
                paragraphs,
            }))
        }
        ShareLookup::Unavailable => Err(AppError::NotFound(SHARE_UNAVAILABLE.to_string())),
    }
}
