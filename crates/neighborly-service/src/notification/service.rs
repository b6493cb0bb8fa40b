//! Notification service: persistence plus realtime fan-out.

use std::sync::Arc;

use tracing::{info, warn};

use neighborly_core::error::AppError;
use neighborly_core::events::{DomainEvent, EventPayload, NotificationEvent};
use neighborly_core::result::AppResult;
use neighborly_core::types::{NotificationId, PageRequest, PageResponse, RequestId, UserId};
use neighborly_database::Store;
use neighborly_entity::notification::{Notification, NotificationKind};
use neighborly_realtime::{EventHub, Topic};

use crate::context::RequestContext;

/// Creates, lists, and marks notifications.
#[derive(Clone)]
pub struct NotificationService {
    store: Store,
    hub: Arc<EventHub>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(store: Store, hub: Arc<EventHub>) -> Self {
        Self { store, hub }
    }

    /// Create a notification for a user and push it to their realtime
    /// topic.
    ///
    /// Notification delivery is a side effect of a primary transition;
    /// failures are logged and swallowed so they never invalidate the
    /// transition's success.
    pub async fn notify(
        &self,
        user_id: UserId,
        kind: NotificationKind,
        title: impl Into<String>,
        body: impl Into<String>,
        request_id: Option<RequestId>,
    ) {
        let notification = Notification::new(user_id, kind, title, body, request_id);
        if let Err(e) = self.store.notifications.insert(&notification).await {
            warn!(user_id = %user_id, error = %e, "Failed to persist notification");
            return;
        }

        let event = DomainEvent::new(
            None,
            EventPayload::Notification(NotificationEvent::Created {
                notification_id: notification.id.into_uuid(),
                user_id,
                kind: notification.kind.as_str().to_string(),
                request_id,
            }),
        );
        self.hub
            .publish(Topic::UserNotifications(user_id), event)
            .await;
        info!(user_id = %user_id, kind = %notification.kind, "Notification created");
    }

    /// List the current user's notifications, newest first.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        self.store.notifications.list_for_user(ctx.user_id, &page).await
    }

    /// Mark one of the current user's notifications as read.
    pub async fn mark_read(&self, ctx: &RequestContext, id: NotificationId) -> AppResult<()> {
        if self.store.notifications.mark_read(id, ctx.user_id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(format!("Notification {id} not found")))
        }
    }

    /// Mark all of the current user's notifications as read.
    pub async fn mark_all_read(&self, ctx: &RequestContext) -> AppResult<u64> {
        self.store.notifications.mark_all_read(ctx.user_id).await
    }

    /// Count the current user's unread notifications.
    pub async fn unread_count(&self, ctx: &RequestContext) -> AppResult<u64> {
        self.store.notifications.unread_count(ctx.user_id).await
    }
}
