//! Help-request entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use neighborly_core::types::{RequestId, UserId};

use super::category::Category;
use super::history::{HistoryEntry, HistoryEventType};
use super::location::Location;
use super::rating::Rating;
use super::status::RequestStatus;
use super::urgency::Urgency;
use super::verification::CompletionVerification;

/// A help request posted by a resident.
///
/// The claimant field is set exactly when the status requires one
/// (claimed, pending_completion, completed). The history log is
/// append-only; replaying it reproduces the current status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpRequest {
    /// Unique request identifier.
    pub id: RequestId,
    /// Short title.
    pub title: String,
    /// Detailed description of the help needed.
    pub description: String,
    /// Category of assistance.
    pub category: Category,
    /// Urgency level.
    pub urgency: Urgency,
    /// Where the help is needed.
    pub location: Location,
    /// How the requester prefers to be reached.
    pub contact_info: Option<String>,
    /// Rough time estimate given by the requester.
    pub estimated_time: Option<String>,
    /// Current lifecycle status.
    pub status: RequestStatus,
    /// The resident who posted the request.
    pub requester_id: UserId,
    /// Display label of the requester, denormalized for listings.
    pub requester_label: String,
    /// The volunteer currently holding the claim, if any.
    pub claimant_id: Option<UserId>,
    /// Display label of the claimant, if any.
    pub claimant_label: Option<String>,
    /// The requester who confirmed completion.
    pub verified_by: Option<UserId>,
    /// Append-only lifecycle event log.
    pub history: Vec<HistoryEntry>,
    /// Geolocation proof attached at completion report, if any.
    pub verification: Option<CompletionVerification>,
    /// Rating attached after completion, if any.
    pub rating: Option<Rating>,
    /// When the request was posted.
    pub created_at: DateTime<Utc>,
    /// When the request was last modified.
    pub updated_at: DateTime<Utc>,
}

impl HelpRequest {
    /// Build a fresh open request from creation input.
    pub fn create(
        input: CreateRequest,
        requester_id: UserId,
        requester_label: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        let requester_label = requester_label.into();
        Self {
            id: RequestId::new(),
            title: input.title,
            description: input.description,
            category: input.category,
            urgency: input.urgency,
            location: input.location,
            contact_info: input.contact_info,
            estimated_time: input.estimated_time,
            status: RequestStatus::Open,
            requester_id,
            requester_label: requester_label.clone(),
            claimant_id: None,
            claimant_label: None,
            verified_by: None,
            history: vec![HistoryEntry {
                event: HistoryEventType::Created,
                actor_id: requester_id,
                actor_label: requester_label,
                timestamp: now,
            }],
            verification: None,
            rating: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether the given user holds the claim.
    pub fn is_claimant(&self, user_id: UserId) -> bool {
        self.claimant_id == Some(user_id)
    }

    /// Check whether the given user posted the request.
    pub fn is_requester(&self, user_id: UserId) -> bool {
        self.requester_id == user_id
    }

    /// Check whether the given user is a party to the request (requester
    /// or current claimant).
    pub fn is_party(&self, user_id: UserId) -> bool {
        self.is_requester(user_id) || self.is_claimant(user_id)
    }

    /// Verify the structural invariants that every stored request must
    /// satisfy. Used by tests and the memory store's debug assertions.
    pub fn check_invariants(&self) -> bool {
        let claimant_matches_status = self.claimant_id.is_some() == self.status.requires_claimant();
        let rating_implies_completed =
            self.rating.is_none() || self.status == RequestStatus::Completed;
        let verified_by_implies_completed =
            self.verified_by.is_none() || self.status == RequestStatus::Completed;
        let history_nonempty = !self.history.is_empty();
        claimant_matches_status
            && rating_implies_completed
            && verified_by_implies_completed
            && history_nonempty
    }
}

/// Input for posting a new help request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRequest {
    /// Short title.
    pub title: String,
    /// Detailed description.
    pub description: String,
    /// Category of assistance.
    pub category: Category,
    /// Urgency level.
    #[serde(default)]
    pub urgency: Urgency,
    /// Where the help is needed.
    pub location: Location,
    /// How the requester prefers to be reached.
    #[serde(default)]
    pub contact_info: Option<String>,
    /// Rough time estimate.
    #[serde(default)]
    pub estimated_time: Option<String>,
}
