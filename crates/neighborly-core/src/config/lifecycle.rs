//! Request lifecycle and validation configuration.

use serde::{Deserialize, Serialize};

/// Help-request lifecycle configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifecycleConfig {
    /// Maximum distance in meters between the volunteer's reported position
    /// and the request location for on-site verification to pass.
    #[serde(default = "default_verification_radius")]
    pub verification_radius_meters: f64,
    /// Whether completion requires a passing location verification when the
    /// request has geocoded coordinates. When false, a failed or missing
    /// check is recorded as unverified and completion proceeds.
    #[serde(default)]
    pub require_location_verification: bool,
    /// Minimum title length in characters.
    #[serde(default = "default_title_min")]
    pub title_min_length: usize,
    /// Maximum title length in characters.
    #[serde(default = "default_title_max")]
    pub title_max_length: usize,
    /// Minimum description length in characters.
    #[serde(default = "default_description_min")]
    pub description_min_length: usize,
    /// Maximum description length in characters.
    #[serde(default = "default_description_max")]
    pub description_max_length: usize,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            verification_radius_meters: default_verification_radius(),
            require_location_verification: false,
            title_min_length: default_title_min(),
            title_max_length: default_title_max(),
            description_min_length: default_description_min(),
            description_max_length: default_description_max(),
        }
    }
}

fn default_verification_radius() -> f64 {
    100.0
}

fn default_title_min() -> usize {
    5
}

fn default_title_max() -> usize {
    120
}

fn default_description_min() -> usize {
    20
}

fn default_description_max() -> usize {
    2000
}
