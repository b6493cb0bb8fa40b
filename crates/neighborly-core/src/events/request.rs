//! Help-request lifecycle events.

use serde::{Deserialize, Serialize};

use crate::types::{RequestId, UserId};

/// Events related to the help-request lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RequestEvent {
    /// A new help request was posted.
    Created {
        /// The request ID.
        request_id: RequestId,
        /// The requester.
        requester_id: UserId,
        /// Category slug.
        category: String,
        /// Urgency level name.
        urgency: String,
    },
    /// A volunteer claimed an open request.
    Claimed {
        /// The request ID.
        request_id: RequestId,
        /// The requester.
        requester_id: UserId,
        /// The winning volunteer.
        claimant_id: UserId,
    },
    /// The volunteer marked the request complete; awaiting confirmation.
    CompletionRequested {
        /// The request ID.
        request_id: RequestId,
        /// The requester.
        requester_id: UserId,
        /// The claimant.
        claimant_id: UserId,
        /// Whether on-site location verification passed.
        location_verified: bool,
    },
    /// The requester confirmed completion.
    Completed {
        /// The request ID.
        request_id: RequestId,
        /// The requester.
        requester_id: UserId,
        /// The claimant.
        claimant_id: UserId,
    },
    /// The requester rejected the completion; work continues.
    CompletionRejected {
        /// The request ID.
        request_id: RequestId,
        /// The requester.
        requester_id: UserId,
        /// The claimant.
        claimant_id: UserId,
        /// The requester's stated reason, if any.
        reason: Option<String>,
    },
    /// The requester rated the claimant after completion.
    Rated {
        /// The request ID.
        request_id: RequestId,
        /// The rated claimant.
        claimant_id: UserId,
        /// Stars given (1-5).
        stars: u8,
    },
}
