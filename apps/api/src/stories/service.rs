use tracing::info;

use crate::errors::AppError;
use crate::models::story::{
    Customization, NewTimelineEvent, Story, StoryPatch, TimelineEvent, TimelineEventPatch,
    WritingStyle,
};
use crate::store::StoryStore;

/// Returns the stored story, or a fresh default story if none was saved yet.
pub async fn load_story(store: &dyn StoryStore, user_id: &str) -> Result<Story, AppError> {
    Ok(store.load_story(user_id).await?.unwrap_or_default())
}

/// Merges `patch` into the stored (or default) story and saves it.
pub async fn apply_patch(
    store: &dyn StoryStore,
    user_id: &str,
    patch: StoryPatch,
) -> Result<Story, AppError> {
    let mut story = load_story(store, user_id).await?;
    patch.apply(&mut story);
    store.save_story(user_id, &story).await?;
    Ok(story)
}

/// Stores `content` as the draft for `style` and makes `style` the selected one.
pub async fn update_story_draft(
    store: &dyn StoryStore,
    user_id: &str,
    style: WritingStyle,
    content: String,
) -> Result<Story, AppError> {
    let mut story = load_story(store, user_id).await?;
    story.story_drafts.set(style, content);
    story.selected_style = style;
    story.touch();
    store.save_story(user_id, &story).await?;
    Ok(story)
}

pub async fn set_customization(
    store: &dyn StoryStore,
    user_id: &str,
    customization: Customization,
) -> Result<Story, AppError> {
    let mut story = load_story(store, user_id).await?;
    story.customization = customization;
    story.touch();
    store.save_story(user_id, &story).await?;
    Ok(story)
}

pub async fn add_timeline_event(
    store: &dyn StoryStore,
    user_id: &str,
    event: NewTimelineEvent,
) -> Result<TimelineEvent, AppError> {
    let mut story = load_story(store, user_id).await?;
    let created = story.add_timeline_event(event);
    story.touch();
    store.save_story(user_id, &story).await?;
    info!(user_id = %user_id, event_id = %created.id, "Timeline event added");
    Ok(created)
}

pub async fn update_timeline_event(
    store: &dyn StoryStore,
    user_id: &str,
    event_id: &str,
    patch: TimelineEventPatch,
) -> Result<TimelineEvent, AppError> {
    let mut story = load_story(store, user_id).await?;
    let updated = story
        .update_timeline_event(event_id, patch)
        .cloned()
        .ok_or_else(|| timeline_not_found(event_id))?;
    story.touch();
    store.save_story(user_id, &story).await?;
    Ok(updated)
}

pub async fn delete_timeline_event(
    store: &dyn StoryStore,
    user_id: &str,
    event_id: &str,
) -> Result<(), AppError> {
    let mut story = load_story(store, user_id).await?;
    if !story.remove_timeline_event(event_id) {
        return Err(timeline_not_found(event_id));
    }
    story.touch();
    store.save_story(user_id, &story).await?;
    info!(user_id = %user_id, event_id = %event_id, "Timeline event removed");
    Ok(())
}

fn timeline_not_found(event_id: &str) -> AppError {
    AppError::NotFound(format!("Timeline event {event_id} not found"))
}
