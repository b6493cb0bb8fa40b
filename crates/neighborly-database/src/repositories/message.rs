//! PostgreSQL message store.

use async_trait::async_trait;
use sqlx::PgPool;

use neighborly_core::error::{AppError, ErrorKind};
use neighborly_core::result::AppResult;
use neighborly_core::types::{RequestId, UserId};
use neighborly_entity::message::Message;

use crate::store::MessageStore;

/// PostgreSQL-backed message store.
#[derive(Debug, Clone)]
pub struct PgMessageStore {
    pool: PgPool,
}

impl PgMessageStore {
    /// Create a new store over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStore for PgMessageStore {
    async fn insert(&self, message: &Message) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO messages \
             (id, request_id, sender_id, sender_label, recipient_id, body, read, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(message.id)
        .bind(message.request_id)
        .bind(message.sender_id)
        .bind(&message.sender_label)
        .bind(message.recipient_id)
        .bind(&message.body)
        .bind(message.read)
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert message", e))?;
        Ok(())
    }

    async fn list_thread(&self, request_id: RequestId) -> AppResult<Vec<Message>> {
        sqlx::query_as::<_, Message>(
            "SELECT * FROM messages WHERE request_id = $1 ORDER BY created_at ASC",
        )
        .bind(request_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list thread", e))
    }

    async fn mark_thread_read(&self, request_id: RequestId, reader: UserId) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE messages SET read = TRUE \
             WHERE request_id = $1 AND recipient_id = $2 AND read = FALSE",
        )
        .bind(request_id)
        .bind(reader)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark thread read", e)
        })?;
        Ok(result.rows_affected())
    }

    async fn unread_count(&self, user_id: UserId) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM messages WHERE recipient_id = $1 AND read = FALSE",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count unread messages", e)
        })?;
        Ok(count as u64)
    }
}
