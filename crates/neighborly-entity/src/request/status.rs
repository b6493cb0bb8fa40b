//! Request lifecycle status and its transition rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a help request.
///
/// Valid transitions:
///
/// ```text
/// open -> claimed -> pending_completion -> completed
///              ^            |
///              +-- rejected +
/// ```
///
/// `completed` is terminal for transitions; a rating may still attach to a
/// completed request afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "request_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Posted and waiting for a volunteer.
    Open,
    /// A volunteer has claimed the request and work is in progress.
    Claimed,
    /// The volunteer reported completion; awaiting requester confirmation.
    PendingCompletion,
    /// The requester confirmed completion.
    Completed,
}

impl RequestStatus {
    /// Check whether a transition from `self` to `next` is allowed.
    pub fn can_transition(&self, next: RequestStatus) -> bool {
        matches!(
            (self, next),
            (Self::Open, Self::Claimed)
                | (Self::Claimed, Self::PendingCompletion)
                | (Self::PendingCompletion, Self::Completed)
                | (Self::PendingCompletion, Self::Claimed)
        )
    }

    /// Whether a claimant must be set at this status.
    pub fn requires_claimant(&self) -> bool {
        matches!(self, Self::Claimed | Self::PendingCompletion | Self::Completed)
    }

    /// Whether the creator/claimant pair may exchange messages.
    pub fn allows_messaging(&self) -> bool {
        matches!(self, Self::Claimed | Self::PendingCompletion)
    }

    /// Whether this status terminates the transition graph.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Return the status as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Claimed => "claimed",
            Self::PendingCompletion => "pending_completion",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
