use async_trait::async_trait;
use dashmap::DashMap;

use crate::errors::AppError;
use crate::models::{ShareSnapshot, Story};
use crate::store::StoryStore;

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    stories: DashMap<String, Story>,
    shares: DashMap<String, ShareSnapshot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StoryStore for MemoryStore {
    async fn load_story(&self, story_id: &str) -> Result<Option<Story>, AppError> {
        Ok(self.stories.get(story_id).map(|s| s.clone()))
    }

    async fn save_story(&self, story_id: &str, story: &Story) -> Result<(), AppError> {
        self.stories.insert(story_id.to_string(), story.clone());
        tracing::debug!(story_id = %story_id, "Story saved");
        Ok(())
    }

    async fn save_share(&self, snapshot: &ShareSnapshot) -> Result<(), AppError> {
        self.shares
            .insert(snapshot.share_id.clone(), snapshot.clone());
        tracing::debug!(share_id = %snapshot.share_id, "Share snapshot saved");
        Ok(())
    }

    async fn load_share(&self, share_id: &str) -> Result<Option<ShareSnapshot>, AppError> {
        Ok(self.shares.get(share_id).map(|s| s.clone()))
    }
}
