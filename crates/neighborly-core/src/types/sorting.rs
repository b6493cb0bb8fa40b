//! Sorting options for help-request listings.

use serde::{Deserialize, Serialize};

/// Available sort orders for the request feed.
///
/// Urgency sorts compare by numeric urgency weight first and fall back to
/// newest-first within the same urgency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestSort {
    /// Most recently created first.
    Newest,
    /// Oldest first.
    Oldest,
    /// Highest urgency first.
    UrgencyHigh,
    /// Lowest urgency first.
    UrgencyLow,
    /// Alphabetical by title.
    Title,
}

impl Default for RequestSort {
    fn default() -> Self {
        Self::Newest
    }
}

impl RequestSort {
    /// Return the SQL `ORDER BY` clause body for this sort.
    ///
    /// The urgency CASE weights mirror `Urgency::weight`.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Newest => "created_at DESC",
            Self::Oldest => "created_at ASC",
            Self::UrgencyHigh => {
                "CASE urgency WHEN 'high' THEN 3 WHEN 'medium' THEN 2 ELSE 1 END DESC, \
                 created_at DESC"
            }
            Self::UrgencyLow => {
                "CASE urgency WHEN 'high' THEN 3 WHEN 'medium' THEN 2 ELSE 1 END ASC, \
                 created_at DESC"
            }
            Self::Title => "lower(title) ASC",
        }
    }
}
