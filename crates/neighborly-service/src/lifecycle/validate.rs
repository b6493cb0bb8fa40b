//! Creation-time input validation.

use neighborly_core::config::lifecycle::LifecycleConfig;
use neighborly_core::error::AppError;
use neighborly_core::result::AppResult;
use neighborly_entity::request::{CreateRequest, GeoPoint};

/// Validate the fields of a new help request against configured limits.
pub fn validate_create(input: &CreateRequest, config: &LifecycleConfig) -> AppResult<()> {
    let title = input.title.trim();
    if title.chars().count() < config.title_min_length {
        return Err(AppError::validation(format!(
            "Title must be at least {} characters",
            config.title_min_length
        )));
    }
    if title.chars().count() > config.title_max_length {
        return Err(AppError::validation(format!(
            "Title must be at most {} characters",
            config.title_max_length
        )));
    }

    let description = input.description.trim();
    if description.chars().count() < config.description_min_length {
        return Err(AppError::validation(format!(
            "Description must be at least {} characters",
            config.description_min_length
        )));
    }
    if description.chars().count() > config.description_max_length {
        return Err(AppError::validation(format!(
            "Description must be at most {} characters",
            config.description_max_length
        )));
    }

    if input.location.address().trim().is_empty() {
        return Err(AppError::validation("Location is required"));
    }
    // Serde builds GeoPoint without the range check, so re-check here.
    if let Some(point) = input.location.point() {
        if GeoPoint::new(point.lat, point.lng).is_none() {
            return Err(AppError::validation(
                "Location coordinates are out of range",
            ));
        }
    }

    Ok(())
}
