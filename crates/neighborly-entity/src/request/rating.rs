//! Post-completion rating.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use neighborly_core::types::UserId;

/// A rating left by the requester for the volunteer after completion.
///
/// At most one rating attaches to a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Stars, 1 through 5.
    pub stars: u8,
    /// Optional free-text review.
    pub review: Option<String>,
    /// The volunteer being rated.
    pub rated_user_id: UserId,
    /// The rated volunteer's email at rating time.
    pub rated_user_email: String,
    /// When the rating was left.
    pub rated_at: DateTime<Utc>,
}
