//! In-memory message store.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use neighborly_core::result::AppResult;
use neighborly_core::types::{RequestId, UserId};
use neighborly_entity::message::Message;

use crate::store::MessageStore;

/// Memory-backed message store.
#[derive(Debug, Clone, Default)]
pub struct MemoryMessageStore {
    messages: Arc<RwLock<Vec<Message>>>,
}

impl MemoryMessageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageStore for MemoryMessageStore {
    async fn insert(&self, message: &Message) -> AppResult<()> {
        self.messages.write().await.push(message.clone());
        Ok(())
    }

    async fn list_thread(&self, request_id: RequestId) -> AppResult<Vec<Message>> {
        let guard = self.messages.read().await;
        let mut thread: Vec<Message> = guard
            .iter()
            .filter(|m| m.request_id == request_id)
            .cloned()
            .collect();
        thread.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(thread)
    }

    async fn mark_thread_read(&self, request_id: RequestId, reader: UserId) -> AppResult<u64> {
        let mut guard = self.messages.write().await;
        let mut updated = 0;
        for message in guard.iter_mut() {
            if message.request_id == request_id && message.recipient_id == reader && !message.read {
                message.read = true;
                updated += 1;
            }
        }
        Ok(updated)
    }

    async fn unread_count(&self, user_id: UserId) -> AppResult<u64> {
        let guard = self.messages.read().await;
        Ok(guard
            .iter()
            .filter(|m| m.recipient_id == user_id && !m.read)
            .count() as u64)
    }
}
