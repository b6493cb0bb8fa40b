//! Profile service.

use tracing::info;

use neighborly_core::error::AppError;
use neighborly_core::result::AppResult;
use neighborly_core::types::UserId;
use neighborly_database::Store;
use neighborly_entity::user::{UpdateProfile, User};

use crate::context::RequestContext;

/// Reads and updates user profiles.
#[derive(Clone)]
pub struct ProfileService {
    store: Store,
}

impl ProfileService {
    /// Creates a new profile service.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Fetch a user's profile. The password hash is never serialized.
    pub async fn get(&self, user_id: UserId) -> AppResult<User> {
        self.store
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))
    }

    /// Apply a partial update to the current user's own profile.
    pub async fn update(&self, ctx: &RequestContext, update: UpdateProfile) -> AppResult<User> {
        if let Some(name) = &update.display_name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Display name must not be empty"));
            }
        }

        let user = self.store.users.update_profile(ctx.user_id, &update).await?;
        info!(user_id = %ctx.user_id, "Profile updated");
        Ok(user)
    }
}
