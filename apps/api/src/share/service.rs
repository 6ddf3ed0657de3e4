use tracing::info;

use crate::errors::AppError;
use crate::models::id::new_share_id;
use crate::models::{ShareSnapshot, WritingStyle};
use crate::store::StoryStore;
use crate::stories::service::load_story;

/// Outcome of a public share lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum ShareLookup {
    Found(ShareSnapshot),
    Unavailable,
}

/// Publishes `draft` (in `style`) for the story owned by `story_id`.
///
/// The story keeps a single share id: re-sharing reuses it and overwrites the
/// snapshot. The story itself is updated with the shared draft and style; a
/// user with no saved story shares from the default one, which is then saved.
pub async fn create_share(
    store: &dyn StoryStore,
    story_id: &str,
    draft: String,
    style: WritingStyle,
) -> Result<String, AppError> {
    let mut story = load_story(store, story_id).await?;

    let share_id = match &story.shareable_id {
        Some(id) if !id.is_empty() => id.clone(),
        _ => new_share_id(),
    };

    story.shareable_id = Some(share_id.clone());
    story.selected_style = style;
    story.story_drafts.set(style, draft.clone());
    story.touch();
    store.save_story(story_id, &story).await?;

    let snapshot = ShareSnapshot::project(&share_id, story_id, &story, &draft, style);
    store.save_share(&snapshot).await?;

    info!(story_id = %story_id, share_id = %share_id, %style, "Share snapshot published");
    Ok(share_id)
}

pub async fn get_share(store: &dyn StoryStore, share_id: &str) -> Result<ShareLookup, AppError> {
    Ok(match store.load_share(share_id).await? {
        Some(snapshot) => ShareLookup::Found(snapshot),
        None => ShareLookup::Unavailable,
    })
}

/// Public URL for a share id, e.g. `https://example.org/share/AbC123`.
pub fn share_url(base_url: &str, share_id: &str) -> String {
    format!("{}/share/{share_id}", base_url.trim_end_matches('/'))
}
