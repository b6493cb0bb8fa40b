//! Completion location verification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::location::GeoPoint;

/// Geolocation proof attached when a volunteer reports completion.
///
/// The `verified` flag records whether the reported position was within
/// the configured radius of the request location at the time of the
/// report. A failed or missing check degrades to `verified = false`; it
/// does not by itself block the completion report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionVerification {
    /// The volunteer's reported position.
    pub position: GeoPoint,
    /// Great-circle distance in meters from the request location.
    pub distance_meters: f64,
    /// Whether the distance was within the verification radius.
    pub verified: bool,
    /// When the position was captured.
    pub timestamp: DateTime<Utc>,
}
