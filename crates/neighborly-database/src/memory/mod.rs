//! In-process memory store backend.
//!
//! Implements the same store traits as the PostgreSQL backend over
//! `tokio::sync::RwLock`-guarded maps. Used by the test suite and local
//! development; state does not survive a restart.

pub mod message;
pub mod notification;
pub mod request;
pub mod user;

pub use message::MemoryMessageStore;
pub use notification::MemoryNotificationStore;
pub use request::MemoryRequestStore;
pub use user::MemoryUserStore;
