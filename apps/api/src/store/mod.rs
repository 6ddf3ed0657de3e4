//! Persistence seam for stories and share snapshots.
//!
//! Carried in `AppState` as `Arc<dyn StoryStore>`. `PgStore` backs production;
//! `MemoryStore` is used when no database is configured and in tests.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::{ShareSnapshot, Story};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait StoryStore: Send + Sync {
    /// Returns `Ok(None)` when no story has been saved for `story_id`.
    async fn load_story(&self, story_id: &str) -> Result<Option<Story>, AppError>;

    async fn save_story(&self, story_id: &str, story: &Story) -> Result<(), AppError>;

    /// Writes a snapshot, replacing any previous snapshot with the same share id.
    async fn save_share(&self, snapshot: &ShareSnapshot) -> Result<(), AppError>;

    async fn load_share(&self, share_id: &str) -> Result<Option<ShareSnapshot>, AppError>;
}
