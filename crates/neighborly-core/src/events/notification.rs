//! Notification delivery events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{RequestId, UserId};

/// Events pushed to a user's notification stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NotificationEvent {
    /// A new notification was stored for the user.
    Created {
        /// The notification ID.
        notification_id: Uuid,
        /// The notified user.
        user_id: UserId,
        /// The notification kind, as its snake_case name.
        kind: String,
        /// The request the notification refers to, if any.
        request_id: Option<RequestId>,
    },
}
