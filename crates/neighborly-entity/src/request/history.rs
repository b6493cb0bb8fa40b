//! Append-only request history log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use neighborly_core::types::UserId;

/// The kind of lifecycle event recorded in a request's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryEventType {
    /// The request was posted.
    Created,
    /// A volunteer claimed the request.
    Claimed,
    /// The volunteer reported completion.
    MarkedComplete,
    /// The requester confirmed completion.
    VerifiedComplete,
    /// The requester rejected the completion report.
    CompletionRejected,
}

impl HistoryEventType {
    /// Return the event type as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Claimed => "claimed",
            Self::MarkedComplete => "marked_complete",
            Self::VerifiedComplete => "verified_complete",
            Self::CompletionRejected => "completion_rejected",
        }
    }
}

impl fmt::Display for HistoryEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single entry in a request's history log.
///
/// Entries are appended on every successful transition and are never
/// mutated or reordered afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// What happened.
    pub event: HistoryEventType,
    /// Who performed the action.
    pub actor_id: UserId,
    /// Human-readable label for the actor at the time of the event.
    pub actor_label: String,
    /// When it happened.
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create a new history entry timestamped now.
    pub fn now(event: HistoryEventType, actor_id: UserId, actor_label: impl Into<String>) -> Self {
        Self {
            event,
            actor_id,
            actor_label: actor_label.into(),
            timestamp: Utc::now(),
        }
    }
}
