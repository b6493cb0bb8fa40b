//! Notification kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of event a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A volunteer claimed your request.
    RequestClaimed,
    /// The volunteer reported your request complete.
    CompletionRequested,
    /// The requester confirmed your completion.
    CompletionConfirmed,
    /// The requester rejected your completion report.
    CompletionRejected,
    /// You received a rating.
    RatingReceived,
    /// You received a message.
    MessageReceived,
}

impl NotificationKind {
    /// Return the kind as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RequestClaimed => "request_claimed",
            Self::CompletionRequested => "completion_requested",
            Self::CompletionConfirmed => "completion_confirmed",
            Self::CompletionRejected => "completion_rejected",
            Self::RatingReceived => "rating_received",
            Self::MessageReceived => "message_received",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
