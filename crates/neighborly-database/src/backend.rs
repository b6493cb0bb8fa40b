//! Backend selection and store bundle.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use crate::memory::{
    MemoryMessageStore, MemoryNotificationStore, MemoryRequestStore, MemoryUserStore,
};
use crate::repositories::{PgMessageStore, PgNotificationStore, PgRequestStore, PgUserStore};
use crate::store::{MessageStore, NotificationStore, RequestStore, UserStore};

/// The full set of stores for one backend, shared across services.
#[derive(Clone)]
pub struct Store {
    /// Help-request persistence.
    pub requests: Arc<dyn RequestStore>,
    /// Message persistence.
    pub messages: Arc<dyn MessageStore>,
    /// Notification persistence.
    pub notifications: Arc<dyn NotificationStore>,
    /// User account persistence.
    pub users: Arc<dyn UserStore>,
}

impl Store {
    /// Build the PostgreSQL-backed store set.
    pub fn postgres(pool: PgPool) -> Self {
        info!("Using PostgreSQL storage backend");
        Self {
            requests: Arc::new(PgRequestStore::new(pool.clone())),
            messages: Arc::new(PgMessageStore::new(pool.clone())),
            notifications: Arc::new(PgNotificationStore::new(pool.clone())),
            users: Arc::new(PgUserStore::new(pool)),
        }
    }

    /// Build the in-process memory store set.
    pub fn memory() -> Self {
        info!("Using in-memory storage backend");
        Self {
            requests: Arc::new(MemoryRequestStore::new()),
            messages: Arc::new(MemoryMessageStore::new()),
            notifications: Arc::new(MemoryNotificationStore::new()),
            users: Arc::new(MemoryUserStore::new()),
        }
    }
}
