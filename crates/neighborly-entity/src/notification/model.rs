//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use neighborly_core::types::{NotificationId, RequestId, UserId};

use super::kind::NotificationKind;

/// A stored notification for a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: NotificationId,
    /// The user being notified.
    pub user_id: UserId,
    /// What kind of event this reports.
    pub kind: NotificationKind,
    /// Short headline.
    pub title: String,
    /// Body text.
    pub body: String,
    /// The request the notification refers to, if any.
    pub request_id: Option<RequestId>,
    /// Whether the user has read it.
    pub read: bool,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Create a new unread notification timestamped now.
    pub fn new(
        user_id: UserId,
        kind: NotificationKind,
        title: impl Into<String>,
        body: impl Into<String>,
        request_id: Option<RequestId>,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            user_id,
            kind,
            title: title.into(),
            body: body.into(),
            request_id,
            read: false,
            created_at: Utc::now(),
        }
    }
}
