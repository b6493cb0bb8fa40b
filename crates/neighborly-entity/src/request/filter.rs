//! Listing filters for help requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::status::RequestStatus;
use super::urgency::Urgency;

/// Filter criteria for request listings.
///
/// All fields are conjunctive; `None` means "no constraint". The search
/// term matches as a case-insensitive substring over title, description,
/// and location address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestFilter {
    /// Free-text substring search.
    pub search: Option<String>,
    /// Restrict to one category.
    pub category: Option<Category>,
    /// Restrict to one urgency level.
    pub urgency: Option<Urgency>,
    /// Restrict to one status.
    pub status: Option<RequestStatus>,
    /// Only requests created at or after this time.
    pub created_after: Option<DateTime<Utc>>,
    /// Only requests created at or before this time.
    pub created_before: Option<DateTime<Utc>>,
}

impl RequestFilter {
    /// A filter with no constraints.
    pub fn any() -> Self {
        Self::default()
    }

    /// Whether the filter constrains anything at all.
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.category.is_none()
            && self.urgency.is_none()
            && self.status.is_none()
            && self.created_after.is_none()
            && self.created_before.is_none()
    }
}
