//! Request location value objects.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees, -90.0 to 90.0.
    pub lat: f64,
    /// Longitude in decimal degrees, -180.0 to 180.0.
    pub lng: f64,
}

impl GeoPoint {
    /// Create a new point, returning `None` for out-of-range coordinates.
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng) {
            Some(Self { lat, lng })
        } else {
            None
        }
    }
}

/// Where a help request takes place.
///
/// Requests created with only a street address stay `PlainText`; requests
/// with coordinates (from a map pin or geocoder) are `Geocoded` and become
/// eligible for on-site completion verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Location {
    /// A human-entered address or place description.
    PlainText {
        /// The address text.
        address: String,
    },
    /// An address with resolved coordinates.
    Geocoded {
        /// The address text.
        address: String,
        /// Resolved coordinates.
        point: GeoPoint,
    },
}

impl Location {
    /// The address text regardless of variant.
    pub fn address(&self) -> &str {
        match self {
            Self::PlainText { address } => address,
            Self::Geocoded { address, .. } => address,
        }
    }

    /// The coordinates, when the location is geocoded.
    pub fn point(&self) -> Option<GeoPoint> {
        match self {
            Self::PlainText { .. } => None,
            Self::Geocoded { point, .. } => Some(*point),
        }
    }
}
