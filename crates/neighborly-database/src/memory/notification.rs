//! In-memory notification store.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use neighborly_core::result::AppResult;
use neighborly_core::types::{NotificationId, PageRequest, PageResponse, UserId};
use neighborly_entity::notification::Notification;

use crate::store::NotificationStore;

/// Memory-backed notification store.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotificationStore {
    notifications: Arc<RwLock<Vec<Notification>>>,
}

impl MemoryNotificationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationStore for MemoryNotificationStore {
    async fn insert(&self, notification: &Notification) -> AppResult<()> {
        self.notifications.write().await.push(notification.clone());
        Ok(())
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        let guard = self.notifications.read().await;
        let mut mine: Vec<Notification> = guard
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = mine.len() as u64;
        let items: Vec<Notification> = mine
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn mark_read(&self, id: NotificationId, user_id: UserId) -> AppResult<bool> {
        let mut guard = self.notifications.write().await;
        match guard
            .iter_mut()
            .find(|n| n.id == id && n.user_id == user_id)
        {
            Some(notification) => {
                notification.read = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn mark_all_read(&self, user_id: UserId) -> AppResult<u64> {
        let mut guard = self.notifications.write().await;
        let mut updated = 0;
        for notification in guard.iter_mut() {
            if notification.user_id == user_id && !notification.read {
                notification.read = true;
                updated += 1;
            }
        }
        Ok(updated)
    }

    async fn unread_count(&self, user_id: UserId) -> AppResult<u64> {
        let guard = self.notifications.read().await;
        Ok(guard
            .iter()
            .filter(|n| n.user_id == user_id && !n.read)
            .count() as u64)
    }
}
