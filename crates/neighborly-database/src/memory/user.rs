//! In-memory user store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use neighborly_core::error::AppError;
use neighborly_core::result::AppResult;
use neighborly_core::types::UserId;
use neighborly_entity::user::{CreateUser, UpdateProfile, User};

use crate::store::UserStore;

/// Memory-backed user store.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut guard = self.users.write().await;
        if guard
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&data.email))
        {
            return Err(AppError::conflict("Email already in use".to_string()));
        }

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            display_name: data.display_name.clone(),
            user_type: data.user_type,
            neighborhood: data.neighborhood.clone(),
            bio: None,
            phone: None,
            skills: Vec::new(),
            languages: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        guard.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn update_profile(&self, id: UserId, update: &UpdateProfile) -> AppResult<User> {
        let mut guard = self.users.write().await;
        let user = guard
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;

        if let Some(display_name) = &update.display_name {
            user.display_name = display_name.clone();
        }
        if let Some(user_type) = update.user_type {
            user.user_type = user_type;
        }
        if let Some(neighborhood) = &update.neighborhood {
            user.neighborhood = Some(neighborhood.clone());
        }
        if let Some(bio) = &update.bio {
            user.bio = Some(bio.clone());
        }
        if let Some(phone) = &update.phone {
            user.phone = Some(phone.clone());
        }
        if let Some(skills) = &update.skills {
            user.skills = skills.clone();
        }
        if let Some(languages) = &update.languages {
            user.languages = languages.clone();
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}
