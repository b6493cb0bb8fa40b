//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use neighborly_core::types::UserId;

use super::user_type::UserType;

/// A registered user of the Neighborly platform.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Email address, used for login. Unique.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Human-readable display name.
    pub display_name: String,
    /// How this user participates in the community.
    pub user_type: UserType,
    /// Free-text neighborhood or area label.
    pub neighborhood: Option<String>,
    /// Short self-description shown on the profile.
    pub bio: Option<String>,
    /// Contact phone number (optional, shown to matched parties only).
    pub phone: Option<String>,
    /// Skills the user offers, as free-form tags.
    pub skills: Vec<String>,
    /// Languages the user speaks.
    pub languages: Vec<String>,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Display name.
    pub display_name: String,
    /// Participation type.
    pub user_type: UserType,
    /// Neighborhood label (optional).
    pub neighborhood: Option<String>,
}

/// Data for updating an existing user's profile.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfile {
    /// New display name.
    pub display_name: Option<String>,
    /// New participation type.
    pub user_type: Option<UserType>,
    /// New neighborhood label.
    pub neighborhood: Option<String>,
    /// New bio.
    pub bio: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// Replacement skill set.
    pub skills: Option<Vec<String>>,
    /// Replacement language set.
    pub languages: Option<Vec<String>>,
}
