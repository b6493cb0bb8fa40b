//! PostgreSQL store implementations.

pub mod message;
pub mod notification;
pub mod request;
pub mod user;

pub use message::PgMessageStore;
pub use notification::PgNotificationStore;
pub use request::PgRequestStore;
pub use user::PgUserStore;
