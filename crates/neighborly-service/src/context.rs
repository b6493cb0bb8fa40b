//! Request context carrying the authenticated user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use neighborly_core::types::UserId;
use neighborly_entity::user::UserType;

/// Context for the current authenticated request.
///
/// Extracted by middleware and passed into service methods so that every
/// operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// The user's email (convenience field from JWT claims).
    pub email: String,
    /// The user's participation type at token issuance.
    pub user_type: UserType,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId, email: String, user_type: UserType) -> Self {
        Self {
            user_id,
            email,
            user_type,
            request_time: Utc::now(),
        }
    }

    /// The label used for this actor in history entries and listings.
    pub fn actor_label(&self) -> &str {
        &self.email
    }
}
