//! Request DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use neighborly_core::types::{PageRequest, RequestSort};
use neighborly_entity::request::{Category, GeoPoint, RequestFilter, RequestStatus, Urgency};

/// Query parameters for the request listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListRequestsQuery {
    /// Free-text search over title, description, and address.
    pub search: Option<String>,
    /// Filter by category.
    pub category: Option<Category>,
    /// Filter by urgency.
    pub urgency: Option<Urgency>,
    /// Filter by status.
    pub status: Option<RequestStatus>,
    /// Only requests created at or after this time.
    pub created_after: Option<DateTime<Utc>>,
    /// Only requests created at or before this time.
    pub created_before: Option<DateTime<Utc>>,
    /// Sort order.
    #[serde(default)]
    pub sort: RequestSort,
    /// Page number (1-based).
    #[serde(default)]
    pub page: Option<u64>,
    /// Items per page.
    #[serde(default)]
    pub page_size: Option<u64>,
}

impl ListRequestsQuery {
    /// Split into the pieces the service expects.
    pub fn into_parts(self) -> (RequestFilter, RequestSort, PageRequest) {
        let filter = RequestFilter {
            search: self.search,
            category: self.category,
            urgency: self.urgency,
            status: self.status,
            created_after: self.created_after,
            created_before: self.created_before,
        };
        let page = PageRequest::new(self.page.unwrap_or(1), self.page_size.unwrap_or(20));
        (filter, self.sort, page)
    }
}

/// Body for reporting a request complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteBody {
    /// The volunteer's current position, if available.
    #[serde(default)]
    pub position: Option<GeoPoint>,
}

/// Body for confirming or rejecting a completion report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyBody {
    /// True to confirm, false to reject.
    pub approved: bool,
    /// Reason given on rejection.
    #[serde(default)]
    pub reason: Option<String>,
}

/// Body for rating a completed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateBody {
    /// Stars, 1 through 5.
    pub stars: u8,
    /// Optional free-text review.
    #[serde(default)]
    pub review: Option<String>,
}

/// Body for posting a message to a thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageBody {
    /// The message text.
    pub body: String,
}
