use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::{ShareSnapshot, Story};
use crate::store::StoryStore;

/// Postgres-backed store. Stories and snapshots are kept as JSONB documents,
/// one row per story id and one row per share id.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoryStore for PgStore {
    async fn load_story(&self, story_id: &str) -> Result<Option<Story>, AppError> {
        let row: Option<(Json<Story>,)> = sqlx::query_as("SELECT data FROM stories WHERE id = $1")
            .bind(story_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|(Json(story),)| story))
    }

    async fn save_story(&self, story_id: &str, story: &Story) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO stories (id, data, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE
            SET data = EXCLUDED.data, updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(story_id)
        .bind(Json(story))
        .bind(story.last_updated)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save_share(&self, snapshot: &ShareSnapshot) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO shares (share_id, story_id, data, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (share_id) DO UPDATE
            SET story_id = EXCLUDED.story_id,
                data = EXCLUDED.data,
                created_at = EXCLUDED.created_at
            "#,
        )
        .bind(&snapshot.share_id)
        .bind(&snapshot.story_id)
        .bind(Json(snapshot))
        .bind(snapshot.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn load_share(&self, share_id: &str) -> Result<Option<ShareSnapshot>, AppError> {
        let row: Option<(Json<ShareSnapshot>,)> =
            sqlx::query_as("SELECT data FROM shares WHERE share_id = $1")
                .bind(share_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|(Json(snapshot),)| snapshot))
    }
}
