//! Topic naming for the event hub.

use std::fmt;

use neighborly_core::types::{RequestId, UserId};

/// A named event stream on the hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// All request lifecycle events (feeds the open-requests listing).
    Requests,
    /// Notifications addressed to one user.
    UserNotifications(UserId),
    /// The message thread of one request.
    RequestThread(RequestId),
}

impl Topic {
    /// The channel name used on the wire and as the hub map key.
    pub fn channel_name(&self) -> String {
        match self {
            Self::Requests => "requests".to_string(),
            Self::UserNotifications(user_id) => format!("user:{user_id}:notifications"),
            Self::RequestThread(request_id) => format!("request:{request_id}:messages"),
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.channel_name())
    }
}
