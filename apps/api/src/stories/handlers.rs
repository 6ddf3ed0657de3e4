use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::story::{
    Customization, NewTimelineEvent, Story, StoryPatch, TimelineEvent, TimelineEventPatch,
    WritingStyle,
};
use crate::state::AppState;
use crate::stories::service;

#[derive(Debug, Deserialize)]
pub struct DraftBody {
    pub content: String,
}

/// GET /api/v1/stories/:user_id
pub async fn handle_get_story(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Story>, AppError> {
    let story = service::load_story(state.store.as_ref(), &user_id).await?;
    Ok(Json(story))
}

/// PATCH /api/v1/stories/:user_id
pub async fn handle_patch_story(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    body: Result<Json<StoryPatch>, JsonRejection>,
) -> Result<Json<Story>, AppError> {
    let Json(patch) = body?;
    let story = service::apply_patch(state.store.as_ref(), &user_id, patch).await?;
    Ok(Json(story))
}

/// PUT /api/v1/stories/:user_id/drafts/:style
pub async fn handle_put_draft(
    State(state): State<AppState>,
    Path((user_id, style)): Path<(String, String)>,
    body: Result<Json<DraftBody>, JsonRejection>,
) -> Result<Json<Story>, AppError> {
    let style = WritingStyle::parse(&style)
        .ok_or_else(|| AppError::Validation(format!("Unknown writing style '{style}'")))?;
    let Json(DraftBody { content }) = body?;
    let story =
        service::update_story_draft(state.store.as_ref(), &user_id, style, content).await?;
    Ok(Json(story))
}

/// PUT /api/v1/stories/:user_id/customization
pub async fn handle_put_customization(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    body: Result<Json<Customization>, JsonRejection>,
) -> Result<Json<Story>, AppError> {
    let Json(customization) = body?;
    let story = service::set_customization(state.store.as_ref(), &user_id, customization).await?;
    Ok(Json(story))
}

/// POST /api/v1/stories/:user_id/timeline
pub async fn handle_add_timeline_event(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    body: Result<Json<NewTimelineEvent>, JsonRejection>,
) -> Result<(StatusCode, Json<TimelineEvent>), AppError> {
    let Json(event) = body?;
    let created = service::add_timeline_event(state.store.as_ref(), &user_id, event).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /api/v1/stories/:user_id/timeline/:event_id
pub async fn handle_update_timeline_event(
    State(state): State<AppState>,
    Path((user_id, event_id)): Path<(String, String)>,
    body: Result<Json<TimelineEventPatch>, JsonRejection>,
) -> Result<Json<TimelineEvent>, AppError> {
    let Json(patch) = body?;
    let updated =
        service::update_timeline_event(state.store.as_ref(), &user_id, &event_id, patch).await?;
    Ok(Json(updated))
}

/// DELETE /api/v1/stories/:user_id/timeline/:event_id
pub async fn handle_delete_timeline_event(
    State(state): State<AppState>,
    Path((user_id, event_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    service::delete_timeline_event(state.store.as_ref(), &user_id, &event_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
