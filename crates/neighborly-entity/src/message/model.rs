//! Message entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use neighborly_core::types::{MessageId, RequestId, UserId};

/// A message in a request's thread between requester and claimant.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Message {
    /// Unique message identifier.
    pub id: MessageId,
    /// The request this thread belongs to.
    pub request_id: RequestId,
    /// Who sent the message.
    pub sender_id: UserId,
    /// Display label of the sender.
    pub sender_label: String,
    /// Who receives the message.
    pub recipient_id: UserId,
    /// Message body.
    pub body: String,
    /// Whether the recipient has read it.
    pub read: bool,
    /// When the message was sent.
    pub created_at: DateTime<Utc>,
}

/// Input for posting a message to a thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMessage {
    /// The request whose thread receives the message.
    pub request_id: RequestId,
    /// Message body.
    pub body: String,
}
