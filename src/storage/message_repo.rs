use crate::domain::message::Message;
use crate::error::{AppError, Result};
use crate::storage::records::MessageRecord;
use crate::storage::{DbPool, MessageStore};
use async_trait::async_trait;

#[derive(Clone, Debug)]
pub struct MessageRepository {
    pool: DbPool,
}

impl MessageRepository {
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStore for MessageRepository {
    #[tracing::instrument(level = "debug", skip(self, content))]
    async fn insert(&self, content: &str) -> Result<()> {
        sqlx::query("INSERT INTO messages (content) VALUES ($1)")
            .bind(content)
            .execute(&self.pool)
            .await
            .map_err(AppError::Write)?;
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn recent(&self, limit: i64) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, MessageRecord>(
            r"
            SELECT id, content, created_at
            FROM messages
            ORDER BY created_at DESC
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Read)?;

        Ok(messages.into_iter().map(Into::into).collect())
    }
}
