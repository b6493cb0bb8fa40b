//! Messaging events.

use serde::{Deserialize, Serialize};

use crate::types::{MessageId, RequestId, UserId};

/// Events related to request message threads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MessageEvent {
    /// A message was posted to a request thread.
    Posted {
        /// The message ID.
        message_id: MessageId,
        /// The thread's request.
        request_id: RequestId,
        /// The sender.
        sender_id: UserId,
        /// The recipient.
        recipient_id: UserId,
    },
}
